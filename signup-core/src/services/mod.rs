//! Service layer - business logic orchestration
//!
//! Services coordinate domain logic and port interactions.

mod add_account;
pub mod migration;

pub use add_account::DbAddAccount;
pub use migration::{MigrationResult, MigrationService};
