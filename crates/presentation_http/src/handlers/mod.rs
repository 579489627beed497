//! HTTP request handlers

pub mod accounts;
pub mod health;
pub mod notifications;
pub mod orders;
