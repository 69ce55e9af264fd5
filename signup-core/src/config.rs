//! Configuration management
//!
//! Settings live in `settings.json` inside the data directory:
//! ```json
//! {
//!   "databaseFile": "accounts.duckdb",
//!   "argon2": { "timeCost": 3, "memoryCost": 65536, "parallelism": 4, "hashLen": 32 }
//! }
//! ```
//! Every key is optional.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::domain::result::Result;
use crate::domain::Argon2Params;

/// Default database file name inside the data directory
pub const DEFAULT_DATABASE_FILE: &str = "accounts.duckdb";

/// Environment variable overriding `databaseFile`
pub const DATABASE_FILE_ENV: &str = "SIGNUP_DATABASE_FILE";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    database_file: Option<String>,
    #[serde(default)]
    argon2: Argon2Params,
}

/// Sign-up configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Database file name, relative to the data directory unless absolute
    pub database_file: String,
    pub argon2: Argon2Params,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_file: DEFAULT_DATABASE_FILE.to_string(),
            argon2: Argon2Params::default(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing settings file gives the defaults. A malformed one is logged
    /// and ignored, an unreadable one is an [`Error::Io`](crate::Error::Io).
    /// `SIGNUP_DATABASE_FILE` wins over the file.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let settings_path = data_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            match serde_json::from_str(&content) {
                Ok(raw) => raw,
                Err(e) => {
                    warn!(path = %settings_path.display(), error = %e, "Ignoring malformed settings file");
                    SettingsFile::default()
                }
            }
        } else {
            SettingsFile::default()
        };

        let env_override = std::env::var(DATABASE_FILE_ENV)
            .ok()
            .filter(|v| !v.trim().is_empty());

        Ok(Self::from_settings(raw, env_override))
    }

    fn from_settings(raw: SettingsFile, database_file_override: Option<String>) -> Self {
        let database_file = database_file_override
            .or(raw.database_file)
            .unwrap_or_else(|| DEFAULT_DATABASE_FILE.to_string());

        Self {
            database_file,
            argon2: raw.argon2,
        }
    }

    /// Full path of the database file
    pub fn db_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.database_file)
    }
}
