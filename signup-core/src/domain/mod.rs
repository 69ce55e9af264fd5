//! Core domain entities
//!
//! Plain data structures - no I/O or external dependencies.

mod account;
pub mod encryption;
pub mod result;

pub use account::{Account, AddAccountModel};
pub use encryption::Argon2Params;
