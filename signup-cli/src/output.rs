//! Output formatting utilities

use std::process::ExitCode;

use anyhow::Result;
use colored::Colorize;
use comfy_table::{presets::UTF8_FULL_CONDENSED, ContentArrangement, Table};
use signup_core::{HttpResponse, ResponseBody};

/// Print a success message
pub fn success(msg: &str) {
    println!("{}", msg.green());
}

/// Print an error message
pub fn error(msg: &str) {
    eprintln!("{}", msg.red());
}

/// Create a styled table
pub fn create_table() -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Print a response envelope and map it to the process exit code
///
/// The encoded password is never printed in table form.
pub fn print_response(response: &HttpResponse, json: bool) -> Result<ExitCode> {
    if json {
        println!("{}", serde_json::to_string_pretty(response)?);
    } else {
        match &response.body {
            Some(ResponseBody::Account(account)) => {
                success("Account created");
                let mut table = create_table();
                table.add_row(vec!["ID", &account.id]);
                table.add_row(vec!["Name", &account.name]);
                table.add_row(vec!["Email", &account.email]);
                println!("{}", table);
            }
            Some(ResponseBody::Error(err)) => {
                error(&format!("{} ({}): {}", err.name, response.status_code, err.message));
            }
            None => error(&format!("Empty response ({})", response.status_code)),
        }
    }

    Ok(if response.is_success() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
