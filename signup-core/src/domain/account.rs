//! Account domain model

use serde::{Deserialize, Serialize};

/// A registered account as returned by the account store
///
/// `password` only ever holds the encoded form produced by an
/// [`Encrypter`](crate::ports::Encrypter).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Store-assigned identity, opaque to the core
    pub id: String,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Data needed to register a new account
///
/// Handed to the registration use case with the plaintext password, and to
/// the account store with the encoded one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddAccountModel {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl AddAccountModel {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
        }
    }

    /// Same name and email, password replaced
    pub fn with_password(self, password: impl Into<String>) -> Self {
        Self {
            password: password.into(),
            ..self
        }
    }
}
