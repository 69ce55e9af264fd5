//! Database migrations - embedded SQL files
//!
//! Migrations are compiled into the binary at build time using include_str!.
//! Each migration is a tuple of (name, sql_content), applied in order.

/// All migrations, embedded at compile time.
///
/// New migrations get the next NNN_ prefix and are appended here.
pub const MIGRATIONS: &[(&str, &str)] = &[
    ("000_migrations.sql", include_str!("000_migrations.sql")),
    ("001_accounts.sql", include_str!("001_accounts.sql")),
];

/// Name of the bootstrap migration that creates `sys_migrations`
pub const BOOTSTRAP_MIGRATION: &str = "000_migrations.sql";
