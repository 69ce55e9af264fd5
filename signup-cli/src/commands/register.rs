//! Register command - sign up a new account from flags

use std::process::ExitCode;

use anyhow::Result;
use dialoguer::Password;
use signup_core::SignUpBody;

use super::get_context;
use crate::output;

/// Prompt for a secret when it was not given and stdin is interactive
///
/// Off a terminal the value stays missing and the controller reports it.
fn prompt_if_missing(value: Option<String>, prompt: &str) -> Result<Option<String>> {
    if value.is_some() || !atty::is(atty::Stream::Stdin) {
        return Ok(value);
    }
    let entered = Password::new()
        .with_prompt(prompt)
        .allow_empty_password(true)
        .interact()?;
    Ok(Some(entered))
}

pub async fn run(
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    password_confirmation: Option<String>,
    json: bool,
) -> Result<ExitCode> {
    let password = prompt_if_missing(password, "Password")?;
    let password_confirmation = prompt_if_missing(password_confirmation, "Confirm password")?;

    let ctx = get_context()?;
    let response = ctx
        .sign_up(SignUpBody {
            name,
            email,
            password,
            password_confirmation,
        })
        .await;

    output::print_response(&response, json)
}
