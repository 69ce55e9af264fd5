//! Account registration service - hashes the password and persists the account

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, instrument};

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AddAccountModel};
use crate::ports::{AddAccount, AddAccountRepository, Encrypter};

/// Registration use case backed by an encrypter and an account store
///
/// Steps run strictly in order: encode the password, then persist. A failure
/// at any step is returned unchanged; nothing is retried or rolled back here.
pub struct DbAddAccount {
    encrypter: Arc<dyn Encrypter>,
    repository: Arc<dyn AddAccountRepository>,
}

impl DbAddAccount {
    pub fn new(encrypter: Arc<dyn Encrypter>, repository: Arc<dyn AddAccountRepository>) -> Self {
        Self {
            encrypter,
            repository,
        }
    }
}

#[async_trait]
impl AddAccount for DbAddAccount {
    #[instrument(name = "add_account", skip_all)]
    async fn add(&self, account: AddAccountModel) -> Result<Account> {
        let hashed = self.encrypter.encrypt(&account.password).await?;
        if hashed.is_empty() {
            return Err(Error::encryption("encrypter returned an empty value"));
        }
        if hashed == account.password {
            return Err(Error::encryption("encrypter returned the plaintext"));
        }
        debug!("Password encoded");

        self.repository.add(account.with_password(hashed)).await
    }
}
