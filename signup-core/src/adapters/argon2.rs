//! Argon2id credential encoder
//!
//! Produces self-describing PHC strings (`$argon2id$v=19$m=..,t=..,p=..$salt$hash`)
//! so the parameters and salt travel with the stored password.

use argon2::password_hash::{PasswordHasher, SaltString};
use argon2::{Algorithm, Argon2, Params, Version};
use async_trait::async_trait;
use rand::Rng;

use crate::domain::encryption::SALT_LEN;
use crate::domain::result::{Error, Result};
use crate::domain::Argon2Params;
use crate::ports::Encrypter;

/// Password encoder using Argon2id with a fresh random salt per call
#[derive(Debug, Clone)]
pub struct Argon2Encrypter {
    params: Params,
}

impl Argon2Encrypter {
    /// Build an encoder, rejecting parameters Argon2 would refuse
    pub fn new(params: &Argon2Params) -> Result<Self> {
        let params = Params::new(
            params.memory_cost,
            params.time_cost,
            params.parallelism,
            Some(params.hash_len as usize),
        )
        .map_err(|e| Error::config(format!("Invalid argon2 params: {}", e)))?;

        Ok(Self { params })
    }

    fn hash(params: Params, value: &str) -> Result<String> {
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let salt: [u8; SALT_LEN] = rand::thread_rng().gen();
        let salt = SaltString::encode_b64(&salt)
            .map_err(|e| Error::encryption(format!("Failed to encode salt: {}", e)))?;

        let hash = argon2
            .hash_password(value.as_bytes(), &salt)
            .map_err(|e| Error::encryption(format!("Failed to hash password: {}", e)))?
            .to_string();

        if hash.is_empty() {
            return Err(Error::encryption("argon2 produced an empty hash"));
        }
        Ok(hash)
    }
}

#[async_trait]
impl Encrypter for Argon2Encrypter {
    async fn encrypt(&self, value: &str) -> Result<String> {
        let params = self.params.clone();
        let value = value.to_string();

        // Hashing is CPU bound; run it off the async workers
        tokio::task::spawn_blocking(move || Self::hash(params, &value))
            .await
            .map_err(|e| Error::encryption(format!("Hashing task failed: {}", e)))?
    }
}
