//! Application layer for FaultMart
//!
//! Defines the ports the infrastructure must implement and the services that
//! orchestrate registration, login, ordering, and the simulated notification
//! path. Fault switches are injected as plain values at construction so the
//! services stay testable without environment mutation.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use services::{
    AccountService, LoginOutcome, NotificationService, OrderOutcome, OrderService,
};
