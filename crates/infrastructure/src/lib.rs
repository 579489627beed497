//! Infrastructure layer for FaultMart
//!
//! Concrete adapters behind the application ports: SQLite persistence,
//! Argon2 password hashing, JWT token signing, and the reqwest clients for
//! the (intentionally unreachable) payment and event-bus endpoints.
//! Configuration - including the fault-injection switches - lives here too.

pub mod auth;
pub mod config;
pub mod gateways;
pub mod persistence;

pub use auth::{Argon2PasswordHasher, JwtTokenSigner};
pub use config::{AppConfig, FaultSwitches};
pub use gateways::{HttpEventBus, HttpPaymentGateway};
pub use persistence::{
    ConnectionPool, DatabaseError, SqliteOrderStore, SqliteSessionStore, SqliteUserStore,
    create_pool, run_migrations,
};
