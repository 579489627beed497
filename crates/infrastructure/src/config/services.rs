//! External service endpoint configuration.

use serde::{Deserialize, Serialize};

/// Base URLs for the downstream services
///
/// The defaults point at internal hostnames that do not resolve outside a
/// production-like network, which is exactly what the failure drills need:
/// the payment call either times out or fails fast depending on the switch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalServicesConfig {
    /// Payment service base URL
    #[serde(default = "default_payment_url")]
    pub payment_url: String,

    /// Email/notification service base URL
    ///
    /// Carried for parity with the other service endpoints; notification
    /// delivery is simulated and never contacts it.
    #[serde(default = "default_email_url")]
    pub email_url: String,

    /// Event bus base URL (logout events)
    #[serde(default = "default_event_bus_url")]
    pub event_bus_url: String,

    /// Payment request timeout in seconds
    #[serde(default = "default_payment_timeout_secs")]
    pub payment_timeout_secs: u64,

    /// Event bus request timeout in seconds
    #[serde(default = "default_event_bus_timeout_secs")]
    pub event_bus_timeout_secs: u64,
}

fn default_payment_url() -> String {
    "https://api.payments.internal/v1".to_string()
}

fn default_email_url() -> String {
    "https://api.notifications.internal/v1".to_string()
}

fn default_event_bus_url() -> String {
    "https://events.internal/api".to_string()
}

const fn default_payment_timeout_secs() -> u64 {
    5
}

const fn default_event_bus_timeout_secs() -> u64 {
    2
}

impl Default for ExternalServicesConfig {
    fn default() -> Self {
        Self {
            payment_url: default_payment_url(),
            email_url: default_email_url(),
            event_bus_url: default_event_bus_url(),
            payment_timeout_secs: default_payment_timeout_secs(),
            event_bus_timeout_secs: default_event_bus_timeout_secs(),
        }
    }
}
