//! CLI command implementations

pub mod register;
pub mod request;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};
use signup_core::SignUpContext;
use tracing::debug;

/// Get the data directory from environment or default
pub fn get_data_dir() -> Result<PathBuf> {
    if let Ok(dir) = std::env::var("SIGNUP_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("Could not find home directory")?;
    Ok(home.join(".signup"))
}

/// Get or create the sign-up context
pub fn get_context() -> Result<SignUpContext> {
    let data_dir = get_data_dir()?;
    debug!(data_dir = %data_dir.display(), "Opening sign-up data directory");

    std::fs::create_dir_all(&data_dir)
        .with_context(|| format!("Failed to create data directory: {:?}", data_dir))?;

    SignUpContext::new(&data_dir).context("Failed to initialize sign-up context")
}
