//! Credential encoder port

use async_trait::async_trait;

use crate::domain::result::Result;

/// One-way encoding of a plaintext secret into a storable form
///
/// The output must be usable for later verification against the plaintext.
/// Implementations fail rather than return an empty encoding.
#[async_trait]
pub trait Encrypter: Send + Sync {
    async fn encrypt(&self, value: &str) -> Result<String>;
}
