//! Sign-up core - account registration pipeline
//!
//! This crate implements the sign-up flow following hexagonal architecture:
//!
//! - **domain**: Core entities (Account, AddAccountModel) and the error type
//! - **ports**: Trait definitions for collaborators (Encrypter, AddAccountRepository,
//!   EmailValidator) and for the registration use case (AddAccount)
//! - **services**: Use case orchestration (DbAddAccount) and schema migrations
//! - **presentation**: The sign-up controller and the response envelope
//! - **adapters**: Concrete implementations (DuckDB, Argon2id, regex)
//!
//! A request flows controller → use case → encrypter → store, and the
//! controller always answers with a complete `{ statusCode, body }` envelope.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod migrations;
pub mod ports;
pub mod presentation;
pub mod services;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};

use adapters::argon2::Argon2Encrypter;
use adapters::duckdb::DuckDbAccountRepository;
use adapters::email::RegexEmailValidator;
use config::Config;
use presentation::Controller;
use services::DbAddAccount;

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{Account, AddAccountModel};
pub use presentation::{
    ErrorBody, HttpError, HttpRequest, HttpResponse, ResponseBody, SignUpBody, SignUpController,
};

/// Main context for sign-up operations
///
/// Composition root: owns the store and wires exactly one implementation of
/// each port into the controller.
pub struct SignUpContext {
    pub config: Config,
    pub data_dir: PathBuf,
    pub repository: Arc<DuckDbAccountRepository>,
    pub controller: SignUpController,
}

impl SignUpContext {
    /// Create a context backed by the database in `data_dir`
    pub fn new(data_dir: &Path) -> Result<Self> {
        let config = Config::load(data_dir)?;
        let db_path = config.db_path(data_dir);

        let repository = DuckDbAccountRepository::new(&db_path)
            .with_context(|| format!("Failed to open database: {}", db_path.display()))?;
        repository
            .ensure_schema()
            .context("Failed to initialize database schema")?;

        Self::with_repository(config, data_dir, Arc::new(repository))
    }

    /// Create a context around an already opened store
    pub fn with_repository(
        config: Config,
        data_dir: &Path,
        repository: Arc<DuckDbAccountRepository>,
    ) -> Result<Self> {
        let encrypter =
            Argon2Encrypter::new(&config.argon2).context("Failed to configure password hashing")?;
        let email_validator =
            RegexEmailValidator::new().context("Failed to configure email validation")?;

        let add_account = DbAddAccount::new(Arc::new(encrypter), repository.clone());
        let controller = SignUpController::new(Arc::new(email_validator), Arc::new(add_account));

        Ok(Self {
            config,
            data_dir: data_dir.to_path_buf(),
            repository,
            controller,
        })
    }

    /// Run a sign-up request through the controller
    pub async fn sign_up(&self, body: SignUpBody) -> HttpResponse {
        self.controller.handle(HttpRequest::new(body)).await
    }
}
