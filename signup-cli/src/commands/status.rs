//! Status command - show where accounts are stored and how many exist

use anyhow::Result;
use colored::Colorize;
use serde_json::json;

use super::get_context;
use crate::output;

pub fn run(json: bool) -> Result<()> {
    let ctx = get_context()?;
    let migrations = ctx.repository.applied_migrations()?;
    let pending = ctx.repository.pending_migrations()?;
    let accounts = ctx.repository.count_accounts()?;
    let db_path = ctx.config.db_path(&ctx.data_dir);

    if json {
        let status = json!({
            "dataDir": ctx.data_dir,
            "database": db_path,
            "accounts": accounts,
            "migrations": migrations,
            "pendingMigrations": pending,
        });
        println!("{}", serde_json::to_string_pretty(&status)?);
        return Ok(());
    }

    println!("{}", "Sign-up Status".bold());
    println!();

    let mut table = output::create_table();
    table.add_row(vec!["Data directory", &ctx.data_dir.display().to_string()]);
    table.add_row(vec!["Database", &db_path.display().to_string()]);
    table.add_row(vec!["Accounts", &accounts.to_string()]);
    table.add_row(vec!["Migrations", &migrations.join(", ")]);
    if !pending.is_empty() {
        table.add_row(vec!["Pending", &pending.join(", ").yellow().to_string()]);
    }
    println!("{}", table);

    Ok(())
}
