//! Application services

mod account_service;
mod notification_service;
mod order_service;

pub use account_service::{AccountService, LoginOutcome};
pub use notification_service::NotificationService;
pub use order_service::{OrderOutcome, OrderService};
