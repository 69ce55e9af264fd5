//! Adapter implementations
//!
//! Adapters implement the port traits with concrete technologies:
//! - DuckDB for the account store
//! - Argon2id for the credential encoder
//! - A regular expression for the email checker

pub mod argon2;
pub mod duckdb;
pub mod email;
