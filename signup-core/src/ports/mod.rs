//! Port definitions (hexagonal architecture)
//!
//! Ports define the interfaces for external dependencies. The core depends
//! only on these traits, not on concrete implementations, so each one can be
//! replaced by a test double.

mod add_account;
mod email_validator;
mod encrypter;
mod repository;

pub use add_account::AddAccount;
pub use email_validator::EmailValidator;
pub use encrypter::Encrypter;
pub use repository::AddAccountRepository;
