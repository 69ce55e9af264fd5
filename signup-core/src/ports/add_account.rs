//! Account registration use case port

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Account, AddAccountModel};

/// Registers a new account from a plaintext password
///
/// Consumed by the sign-up controller; implemented by
/// [`DbAddAccount`](crate::services::DbAddAccount).
#[async_trait]
pub trait AddAccount: Send + Sync {
    async fn add(&self, account: AddAccountModel) -> Result<Account>;
}
