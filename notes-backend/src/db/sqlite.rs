//! SQLite database handle backed by an r2d2 connection pool.
//!
//! Table-specific operations live in `db::tables` as `impl Database` blocks.

use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::{Connection, Result as SqliteResult};
use std::path::Path;
use std::time::Duration;

/// A pooled connection checked out from the database
pub type DbConn = PooledConnection<SqliteConnectionManager>;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);
const CHECKOUT_TIMEOUT: Duration = Duration::from_secs(10);

pub struct Database {
    pool: Pool<SqliteConnectionManager>,
}

impl Database {
    /// Open (or create) the database at `database_url` and make sure the schema exists
    pub fn new(database_url: &str, pool_size: u32) -> SqliteResult<Self> {
        if let Some(parent) = Path::new(database_url).parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    log::error!("[DB] Failed to create directory {:?}: {}", parent, e);
                    cannot_open(format!("failed to create {}: {}", parent.display(), e))
                })?;
            }
        }

        let manager = SqliteConnectionManager::file(database_url).with_init(configure_connection);
        let pool = Pool::builder()
            .max_size(pool_size)
            .connection_timeout(CHECKOUT_TIMEOUT)
            .build(manager)
            .map_err(pool_error)?;

        let db = Self { pool };
        db.init_tables()?;

        log::info!("[DB] Opened {} (pool size {})", database_url, pool_size);
        Ok(db)
    }

    /// Check out a pooled connection
    pub fn conn(&self) -> SqliteResult<DbConn> {
        self.pool.get().map_err(pool_error)
    }

    fn init_tables(&self) -> SqliteResult<()> {
        let conn = self.conn()?;
        conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS notes (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT,
                content TEXT,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );",
        )?;
        Ok(())
    }
}

fn configure_connection(conn: &mut Connection) -> SqliteResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    let mode: String =
        conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
    log::debug!("[DB] journal_mode={}", mode);
    Ok(())
}

fn pool_error(e: r2d2::Error) -> rusqlite::Error {
    log::error!("[DB] Connection pool error: {}", e);
    rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_BUSY),
        Some(format!("connection pool: {}", e)),
    )
}

fn cannot_open(message: String) -> rusqlite::Error {
    rusqlite::Error::SqliteFailure(
        rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_CANTOPEN),
        Some(message),
    )
}
