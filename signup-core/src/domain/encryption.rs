//! Password hashing parameters

use serde::{Deserialize, Serialize};

/// Default Argon2id parameters
pub const DEFAULT_TIME_COST: u32 = 3;
pub const DEFAULT_MEMORY_COST: u32 = 65536; // 64 MiB
pub const DEFAULT_PARALLELISM: u32 = 4;
pub const DEFAULT_HASH_LEN: u32 = 32;

/// Length of the random salt generated for every password, in bytes
pub const SALT_LEN: usize = 16;

/// Argon2id cost parameters used when encoding passwords
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Argon2Params {
    #[serde(default = "default_time_cost")]
    pub time_cost: u32,
    /// Memory cost in KiB
    #[serde(default = "default_memory_cost")]
    pub memory_cost: u32,
    #[serde(default = "default_parallelism")]
    pub parallelism: u32,
    #[serde(default = "default_hash_len")]
    pub hash_len: u32,
}

fn default_time_cost() -> u32 {
    DEFAULT_TIME_COST
}

fn default_memory_cost() -> u32 {
    DEFAULT_MEMORY_COST
}

fn default_parallelism() -> u32 {
    DEFAULT_PARALLELISM
}

fn default_hash_len() -> u32 {
    DEFAULT_HASH_LEN
}

impl Default for Argon2Params {
    fn default() -> Self {
        Self {
            time_cost: DEFAULT_TIME_COST,
            memory_cost: DEFAULT_MEMORY_COST,
            parallelism: DEFAULT_PARALLELISM,
            hash_len: DEFAULT_HASH_LEN,
        }
    }
}
