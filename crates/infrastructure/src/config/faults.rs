//! Fault-injection switches.
//!
//! Each switch turns on one rehearsed failure mode. All of them default to
//! off, so an unconfigured instance behaves like a plain (if tiny) shop
//! backend.

use serde::{Deserialize, Serialize};

/// Fault-injection switches, one per failure drill
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FaultSwitches {
    /// Refuse to open the database pool at startup
    #[serde(default)]
    pub db_failure: bool,

    /// Make every payment call hang past its deadline
    #[serde(default)]
    pub payment_timeout: bool,

    /// Reject every bearer token as invalid
    #[serde(default)]
    pub auth_failure: bool,

    /// Make notification delivery fail with an SMTP timeout
    #[serde(default)]
    pub email_failure: bool,

    /// Emit high-memory warnings on health checks
    #[serde(default)]
    pub memory_pressure: bool,

    /// Abort startup before the listener binds
    #[serde(default)]
    pub critical_failure: bool,
}

impl FaultSwitches {
    /// Names of the switches currently enabled, for startup logging
    #[must_use]
    pub fn enabled_switches(&self) -> Vec<&'static str> {
        let mut enabled = Vec::new();
        if self.db_failure {
            enabled.push("db_failure");
        }
        if self.payment_timeout {
            enabled.push("payment_timeout");
        }
        if self.auth_failure {
            enabled.push("auth_failure");
        }
        if self.email_failure {
            enabled.push("email_failure");
        }
        if self.memory_pressure {
            enabled.push("memory_pressure");
        }
        if self.critical_failure {
            enabled.push("critical_failure");
        }
        enabled
    }

    /// Whether any switch is enabled
    #[must_use]
    pub fn any_enabled(&self) -> bool {
        self.db_failure
            || self.payment_timeout
            || self.auth_failure
            || self.email_failure
            || self.memory_pressure
            || self.critical_failure
    }
}
