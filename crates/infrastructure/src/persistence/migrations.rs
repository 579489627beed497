//! Database schema migrations.
//!
//! Versioned, forward-only migrations tracked in a `schema_version` table.
//! Each migration runs in its own transaction together with the version
//! bump, so a failure leaves the schema at the previous version.

use rusqlite::Connection;
use tracing::info;

use super::connection::{ConnectionPool, DatabaseError};

/// Current schema version
const SCHEMA_VERSION: i64 = 1;

/// Run all pending migrations
pub fn run_migrations(pool: &ConnectionPool) -> Result<(), DatabaseError> {
    let mut conn = pool.get()?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS schema_version (
            version INTEGER PRIMARY KEY,
            applied_at TEXT NOT NULL DEFAULT (datetime('now'))
        )",
        [],
    )?;

    let current: i64 = conn
        .query_row(
            "SELECT COALESCE(MAX(version), 0) FROM schema_version",
            [],
            |row| row.get(0),
        )
        .unwrap_or(0);

    if current >= SCHEMA_VERSION {
        return Ok(());
    }

    for version in (current + 1)..=SCHEMA_VERSION {
        let tx = conn.transaction()?;
        apply_migration(&tx, version)
            .map_err(|e| DatabaseError::Migration(format!("migration {version} failed: {e}")))?;
        tx.execute("INSERT INTO schema_version (version) VALUES (?1)", [version])?;
        tx.commit()?;
        info!(version, "Applied database migration");
    }

    Ok(())
}

fn apply_migration(conn: &Connection, version: i64) -> Result<(), rusqlite::Error> {
    match version {
        1 => migrate_v1(conn),
        _ => Ok(()),
    }
}

/// v1: users, sessions, and orders
fn migrate_v1(conn: &Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            email TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            created_at TEXT NOT NULL
        );

        CREATE TABLE sessions (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            token TEXT UNIQUE NOT NULL,
            expires_at TEXT NOT NULL
        );

        CREATE INDEX idx_sessions_user_id ON sessions(user_id);
        CREATE INDEX idx_sessions_expires_at ON sessions(expires_at);

        CREATE TABLE orders (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL REFERENCES users(id) ON DELETE CASCADE,
            product_name TEXT NOT NULL,
            amount REAL NOT NULL,
            status TEXT NOT NULL DEFAULT 'pending',
            created_at TEXT NOT NULL
        );

        CREATE INDEX idx_orders_user_id ON orders(user_id);",
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::persistence::create_memory_pool;

    #[test]
    fn migrations_create_all_tables() {
        let pool = create_memory_pool();
        run_migrations(&pool).unwrap();

        let conn = pool.get().unwrap();
        for table in ["users", "sessions", "orders", "schema_version"] {
            let count: i64 = conn
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1",
                    [table],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[test]
    fn migrations_are_idempotent() {
        let pool = create_memory_pool();
        run_migrations(&pool).unwrap();
        run_migrations(&pool).unwrap();

        let conn = pool.get().unwrap();
        let version: i64 = conn
            .query_row("SELECT MAX(version) FROM schema_version", [], |row| {
                row.get(0)
            })
            .unwrap();
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn username_uniqueness_is_enforced() {
        let pool = create_memory_pool();
        run_migrations(&pool).unwrap();

        let conn = pool.get().unwrap();
        conn.execute(
            "INSERT INTO users (username, email, password_hash, created_at)
             VALUES ('alice', 'a@example.com', 'h', '2025-01-01T00:00:00Z')",
            [],
        )
        .unwrap();
        let dup = conn.execute(
            "INSERT INTO users (username, email, password_hash, created_at)
             VALUES ('alice', 'b@example.com', 'h', '2025-01-01T00:00:00Z')",
            [],
        );
        assert!(dup.is_err());
    }
}
