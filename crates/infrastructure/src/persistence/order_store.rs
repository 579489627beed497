//! SQLite-backed order store.
//!
//! Orders are inserted with status `pending` and never updated afterwards.

use application::ApplicationError;
use application::ports::OrderStore;
use async_trait::async_trait;
use chrono::Utc;
use domain::entities::{NewOrder, OrderStatus};
use rusqlite::params;
use tokio::task;

use super::connection::ConnectionPool;

/// SQLite implementation of [`OrderStore`]
#[derive(Clone)]
pub struct SqliteOrderStore {
    pool: ConnectionPool,
}

impl std::fmt::Debug for SqliteOrderStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteOrderStore").finish_non_exhaustive()
    }
}

impl SqliteOrderStore {
    /// Create a new store backed by the given pool
    #[must_use]
    pub const fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl OrderStore for SqliteOrderStore {
    async fn insert(&self, order: NewOrder) -> Result<i64, ApplicationError> {
        let pool = self.pool.clone();
        task::spawn_blocking(move || {
            let conn = pool
                .get()
                .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            conn.execute(
                "INSERT INTO orders (user_id, product_name, amount, status, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![
                    order.user_id,
                    order.product_name,
                    order.amount,
                    OrderStatus::Pending.as_str(),
                    Utc::now().to_rfc3339()
                ],
            )
            .map_err(|e| ApplicationError::Internal(e.to_string()))?;
            Ok(conn.last_insert_rowid())
        })
        .await
        .map_err(|e| ApplicationError::Internal(e.to_string()))?
    }
}
