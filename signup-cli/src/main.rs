//! Sign-up CLI - register accounts from the terminal

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod output;

use commands::{register, request, status};

/// Register accounts through the sign-up pipeline
#[derive(Parser)]
#[command(name = "signup", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a new account
    Register {
        /// Display name
        #[arg(long)]
        name: Option<String>,
        /// Email address
        #[arg(long)]
        email: Option<String>,
        /// Password (prompted when omitted on a terminal)
        #[arg(long, env = "SIGNUP_PASSWORD", hide_env_values = true)]
        password: Option<String>,
        /// Password confirmation (prompted when omitted on a terminal)
        #[arg(long)]
        password_confirmation: Option<String>,
        /// Output the response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Handle a JSON request document ({"body": {...}})
    Request {
        /// Path to the request document (reads stdin when omitted)
        file: Option<PathBuf>,
        /// Output the response envelope as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show database status
    Status {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Install the tracing subscriber; `RUST_LOG` controls verbosity (default: warn)
fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> ExitCode {
    setup_tracing();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            output::error(&format!("{:#}", e));
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode> {
    match cli.command {
        Commands::Register {
            name,
            email,
            password,
            password_confirmation,
            json,
        } => register::run(name, email, password, password_confirmation, json).await,
        Commands::Request { file, json } => request::run(file.as_deref(), json).await,
        Commands::Status { json } => status::run(json).map(|()| ExitCode::SUCCESS),
    }
}
