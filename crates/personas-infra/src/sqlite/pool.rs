//! Database pool with split reader/writer connections in WAL mode.
//!
//! SQLite allows only one writer at a time. This module provides a `DatabasePool`
//! with a multi-connection reader pool for concurrent reads and a single-connection
//! writer pool for serialized writes.

use std::path::Path;
use std::str::FromStr;

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePool, SqlitePoolOptions};

/// Split read/write pool for SQLite with WAL mode.
///
/// - `reader`: Multi-connection pool (up to 8) for concurrent SELECT queries.
/// - `writer`: Single-connection pool for serialized INSERTs.
#[derive(Clone)]
pub struct DatabasePool {
    pub reader: SqlitePool,
    pub writer: SqlitePool,
}

impl DatabasePool {
    /// Open (creating if missing) the database and ensure the schema exists.
    ///
    /// Both pools use WAL journal mode and a 5-second busy timeout. Foreign key
    /// enforcement is off: persona and message references are not checked,
    /// even in databases whose tables were declared with FOREIGN KEY clauses.
    pub async fn new(database_url: &str) -> Result<Self, sqlx::Error> {
        let base_opts = SqliteConnectOptions::from_str(database_url)?
            .journal_mode(SqliteJournalMode::Wal)
            .foreign_keys(false)
            .busy_timeout(std::time::Duration::from_secs(5))
            .create_if_missing(true);

        let read_opts = base_opts.clone().read_only(true);
        let write_opts = base_opts;

        let writer = SqlitePoolOptions::new()
            .max_connections(1)
            .connect_with(write_opts)
            .await?;

        // Schema must exist before the read-only pool opens
        ensure_schema(&writer).await?;

        let reader = SqlitePoolOptions::new()
            .max_connections(8)
            .connect_with(read_opts)
            .await?;

        tracing::debug!(url = %database_url, "database pool ready");
        Ok(Self { reader, writer })
    }
}

/// Create the companies, personas and messages tables if they do not exist.
///
/// Idempotent: every statement is `CREATE ... IF NOT EXISTS`, and sqlx records
/// the applied script so later calls skip it.
pub async fn ensure_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("../../migrations").run(pool).await?;
    Ok(())
}

/// sqlx URL for a database file, creating it on first open.
pub fn database_url_for(path: &Path) -> String {
    format!("sqlite://{}?mode=rwc", path.display())
}
