//! Repository port - account persistence abstraction

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Account, AddAccountModel};

/// Account store abstraction
///
/// Implementations (adapters) own their storage handle and are responsible
/// for the atomicity of each insert.
#[async_trait]
pub trait AddAccountRepository: Send + Sync {
    /// Persist a new account and return it with its store-assigned id
    ///
    /// `account.password` is already encoded. Must return an error, never a
    /// partially written account, if the insert cannot be completed.
    async fn add(&self, account: AddAccountModel) -> Result<Account>;
}
