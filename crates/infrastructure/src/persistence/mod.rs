//! SQLite persistence layer
//!
//! A pooled rusqlite connection behind r2d2; all query work runs on the
//! blocking thread pool via `tokio::task::spawn_blocking`, keeping the async
//! executor free of file I/O.

mod connection;
mod migrations;
mod order_store;
mod session_store;
mod user_store;

pub use connection::{
    ConnectionPool, DatabaseError, PooledConnection, create_memory_pool, create_pool,
};
pub use migrations::run_migrations;
pub use order_store::SqliteOrderStore;
pub use session_store::SqliteSessionStore;
pub use user_store::SqliteUserStore;
