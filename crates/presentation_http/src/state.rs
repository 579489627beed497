//! Application state shared across handlers

use std::sync::Arc;

use application::{AccountService, NotificationService, OrderService};
use infrastructure::{ConnectionPool, FaultSwitches};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Account lifecycle service (register, login, logout)
    pub accounts: Arc<AccountService>,
    /// Order placement service
    pub orders: Arc<OrderService>,
    /// Simulated email notification service
    pub notifications: NotificationService,
    /// Database pool, used by the health check
    pub pool: ConnectionPool,
    /// Fault-injection switches
    pub faults: FaultSwitches,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("faults", &self.faults)
            .finish_non_exhaustive()
    }
}
