//! Database connection pool management.

use std::time::Duration;

use r2d2_sqlite::SqliteConnectionManager;
use tracing::{error, info};

use crate::config::{DatabaseConfig, FaultSwitches};

/// Shared connection pool type
pub type ConnectionPool = r2d2::Pool<SqliteConnectionManager>;

/// A single pooled connection
pub type PooledConnection = r2d2::PooledConnection<SqliteConnectionManager>;

/// Errors that can occur during database operations
#[derive(Debug, thiserror::Error)]
pub enum DatabaseError {
    /// Connection pool error
    #[error("connection pool error: {0}")]
    Pool(#[from] r2d2::Error),

    /// SQLite error
    #[error("database error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    /// The database is unavailable (connection refused)
    #[error("could not connect to database at '{path}'")]
    Unavailable {
        /// Configured database path
        path: String,
    },

    /// Migration failure
    #[error("migration failed: {0}")]
    Migration(String),
}

/// Create a connection pool for the configured SQLite database
///
/// With the `db_failure` switch enabled, the pool is never opened: the
/// function logs a connection-refused error and fails as though the
/// database host were down.
pub fn create_pool(
    config: &DatabaseConfig,
    faults: &FaultSwitches,
) -> Result<ConnectionPool, DatabaseError> {
    if faults.db_failure {
        error!(
            path = %config.path,
            "Database connection failed: could not connect to server: Connection refused"
        );
        return Err(DatabaseError::Unavailable {
            path: config.path.clone(),
        });
    }

    let manager = SqliteConnectionManager::file(&config.path).with_init(|conn| {
        conn.execute_batch(
            "PRAGMA foreign_keys = ON;
             PRAGMA journal_mode = WAL;
             PRAGMA busy_timeout = 5000;",
        )
    });

    let pool = r2d2::Pool::builder()
        .max_size(config.max_connections)
        .connection_timeout(Duration::from_secs(5))
        .build(manager)?;

    info!(path = %config.path, "Database pool ready");
    Ok(pool)
}

/// Create an in-memory pool for tests
///
/// Capped at one connection because each in-memory SQLite connection is its
/// own database.
#[must_use]
pub fn create_memory_pool() -> ConnectionPool {
    let manager = SqliteConnectionManager::memory().with_init(|conn| {
        conn.execute_batch("PRAGMA foreign_keys = ON;")
    });
    r2d2::Pool::builder()
        .max_size(1)
        .build(manager)
        .unwrap_or_else(|e| panic!("failed to build in-memory pool: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn db_failure_switch_refuses_to_open_pool() {
        let config = DatabaseConfig::default();
        let faults = FaultSwitches {
            db_failure: true,
            ..FaultSwitches::default()
        };
        let result = create_pool(&config, &faults);
        assert!(matches!(result, Err(DatabaseError::Unavailable { .. })));
    }

    #[test]
    fn pool_opens_file_database() {
        let dir = tempfile::tempdir().unwrap();
        let config = DatabaseConfig {
            path: dir.path().join("test.db").to_string_lossy().into_owned(),
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config, &FaultSwitches::default()).unwrap();
        let conn = pool.get().unwrap();
        let n: i64 = conn.query_row("SELECT 1", [], |row| row.get(0)).unwrap();
        assert_eq!(n, 1);
    }

    #[test]
    fn memory_pool_enforces_foreign_keys() {
        let pool = create_memory_pool();
        let conn = pool.get().unwrap();
        let enabled: i64 = conn
            .query_row("PRAGMA foreign_keys", [], |row| row.get(0))
            .unwrap();
        assert_eq!(enabled, 1);
    }
}
