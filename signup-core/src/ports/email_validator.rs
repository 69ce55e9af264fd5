//! Email syntax checker port

use crate::domain::result::Result;

/// Checks that an email address is syntactically well formed
///
/// `Ok(false)` means the address is malformed. An `Err` means the check itself
/// could not be performed and is treated by callers as a server failure.
pub trait EmailValidator: Send + Sync {
    fn is_valid(&self, email: &str) -> Result<bool>;
}
