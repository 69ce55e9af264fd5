//! Request command - run a JSON request document through the controller

use std::io::Read;
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use signup_core::{HttpRequest, SignUpBody};

use super::get_context;
use crate::output;

fn read_document(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read request file: {}", path.display())),
        None => {
            let mut content = String::new();
            std::io::stdin()
                .read_to_string(&mut content)
                .context("Failed to read request from stdin")?;
            Ok(content)
        }
    }
}

pub async fn run(file: Option<&Path>, json: bool) -> Result<ExitCode> {
    let content = read_document(file)?;
    let request: HttpRequest<SignUpBody> =
        serde_json::from_str(&content).context("Invalid request document")?;

    let ctx = get_context()?;
    let response = ctx.sign_up(request.body).await;

    output::print_response(&response, json)
}
