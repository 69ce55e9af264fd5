//! DuckDB account store

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::thread;
use std::time::Duration;

use async_trait::async_trait;
use duckdb::{params, Connection};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{Account, AddAccountModel};
use crate::ports::AddAccountRepository;
use crate::services::{MigrationResult, MigrationService};

/// Maximum number of attempts when the database file is locked
const MAX_RETRIES: u32 = 5;

/// Initial retry delay in milliseconds (doubles each retry: 50, 100, 200, 400ms)
const INITIAL_RETRY_DELAY_MS: u64 = 50;

/// Check if an error message indicates a file locking issue that should be retried
fn is_retryable_error(err_msg: &str) -> bool {
    let lower = err_msg.to_lowercase();
    // Windows
    lower.contains("being used by another process")
        || lower.contains("cannot access the file")
        // Unix/macOS
        || lower.contains("resource temporarily unavailable")
        || lower.contains("database is locked")
        || lower.contains("file is already open")
}

/// Account store backed by a DuckDB connection it owns
///
/// Statements are serialized through the connection mutex. The lock is only
/// held while a statement runs.
pub struct DuckDbAccountRepository {
    conn: Mutex<Connection>,
    db_path: Option<PathBuf>,
}

impl DuckDbAccountRepository {
    /// Open (or create) the database file at `db_path`
    ///
    /// Retries with exponential backoff when the file is locked by another
    /// process, which happens when several CLI invocations start together.
    pub fn new(db_path: &Path) -> Result<Self> {
        let mut attempt = 0;
        loop {
            match Self::try_open_connection(db_path) {
                Ok(conn) => {
                    return Ok(Self {
                        conn: Mutex::new(conn),
                        db_path: Some(db_path.to_path_buf()),
                    });
                }
                Err(e) => {
                    let err_msg = e.to_string();
                    attempt += 1;
                    if !is_retryable_error(&err_msg) || attempt >= MAX_RETRIES {
                        return Err(Error::database(err_msg));
                    }
                    let delay =
                        Duration::from_millis(INITIAL_RETRY_DELAY_MS * 2u64.pow(attempt - 1));
                    warn!(
                        attempt,
                        max = MAX_RETRIES,
                        delay_ms = delay.as_millis() as u64,
                        error = %err_msg,
                        "Database busy, retrying"
                    );
                    thread::sleep(delay);
                }
            }
        }
    }

    /// Wrap an already opened connection
    pub fn with_connection(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
            db_path: None,
        }
    }

    /// Open a private in-memory database
    pub fn in_memory() -> Result<Self> {
        Ok(Self::with_connection(Connection::open_in_memory()?))
    }

    fn try_open_connection(db_path: &Path) -> duckdb::Result<Connection> {
        // Core SQL only, no extension autoloading
        let config = duckdb::Config::default().enable_autoload_extension(false)?;
        Connection::open_with_flags(db_path, config)
    }

    fn lock(&self) -> Result<MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| Error::database(format!("Lock poisoned: {}", e)))
    }

    /// Path of the database file, `None` for in-memory or wrapped connections
    pub fn db_path(&self) -> Option<&Path> {
        self.db_path.as_deref()
    }

    /// Run pending migrations
    pub fn run_migrations(&self) -> Result<MigrationResult> {
        let conn = self.lock()?;
        MigrationService::new(&conn).run_pending()
    }

    /// Ensure database schema exists (runs pending migrations)
    pub fn ensure_schema(&self) -> Result<()> {
        let result = self.run_migrations()?;
        if !result.applied.is_empty() {
            debug!(applied = ?result.applied, "Schema upgraded");
        }
        Ok(())
    }

    /// Names of the migrations recorded in the database
    pub fn applied_migrations(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        MigrationService::new(&conn).get_applied()
    }

    /// Names of the embedded migrations not yet applied
    pub fn pending_migrations(&self) -> Result<Vec<String>> {
        let conn = self.lock()?;
        MigrationService::new(&conn).get_pending()
    }

    pub fn get_account_by_id(&self, id: &str) -> Result<Option<Account>> {
        let conn = self.lock()?;
        let mut stmt = conn.prepare(
            "SELECT account_id, name, email, password FROM accounts WHERE account_id = ?",
        )?;
        let mut rows = stmt.query_map([id], |row| {
            Ok(Account {
                id: row.get(0)?,
                name: row.get(1)?,
                email: row.get(2)?,
                password: row.get(3)?,
            })
        })?;

        let account = rows.next().transpose()?;
        Ok(account)
    }

    pub fn count_accounts(&self) -> Result<i64> {
        let conn = self.lock()?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM accounts", [], |row| row.get(0))?;
        Ok(count)
    }
}

#[async_trait]
impl AddAccountRepository for DuckDbAccountRepository {
    async fn add(&self, account: AddAccountModel) -> Result<Account> {
        let id = Uuid::new_v4().to_string();

        {
            let conn = self.lock()?;
            conn.execute(
                "INSERT INTO accounts (account_id, name, email, password) VALUES (?, ?, ?, ?)",
                params![id, account.name, account.email, account.password],
            )?;
        }
        debug!(account_id = %id, "Inserted account");

        Ok(Account {
            id,
            name: account.name,
            email: account.email,
            password: account.password,
        })
    }
}
