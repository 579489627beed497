//! Application configuration
//!
//! Split into focused sub-modules by domain:
//! - `server`: HTTP server settings
//! - `database`: SQLite database settings
//! - `auth`: token signing secret and lifetime
//! - `services`: external service base URLs (never genuinely reachable)
//! - `faults`: the fault-injection switches
//!
//! Configuration is read once at startup and treated as immutable for the
//! process lifetime; there is no runtime reconfiguration.

mod auth;
mod database;
mod faults;
mod server;
mod services;

use serde::Deserialize;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use faults::FaultSwitches;
pub use server::ServerConfig;
pub use services::ExternalServicesConfig;

/// Shared default for boolean `true` fields across config structs
pub(crate) const fn default_true() -> bool {
    true
}

/// Main application configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Token signing configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// External service endpoints
    #[serde(default)]
    pub services: ExternalServicesConfig,

    /// Fault-injection switches
    #[serde(default)]
    pub faults: FaultSwitches,
}

impl AppConfig {
    /// Load configuration from defaults, an optional `config.toml`, and the
    /// environment
    ///
    /// Environment variables use the `FAULTMART` prefix with a `__`
    /// separator (e.g. `FAULTMART__FAULTS__PAYMENT_TIMEOUT=true`); the
    /// double underscore keeps switch names containing underscores
    /// unambiguous.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .add_source(config::File::with_name("config").required(false))
            .add_source(
                config::Environment::with_prefix("FAULTMART")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_no_faults_enabled() {
        let config = AppConfig::default();
        assert!(!config.faults.db_failure);
        assert!(!config.faults.payment_timeout);
        assert!(!config.faults.auth_failure);
        assert!(!config.faults.email_failure);
        assert!(!config.faults.memory_pressure);
        assert!(!config.faults.critical_failure);
    }

    #[test]
    fn config_deserializes_partial_input() {
        let json = r#"{"faults":{"payment_timeout":true}}"#;
        let config: AppConfig = serde_json::from_str(json).unwrap();
        assert!(config.faults.payment_timeout);
        assert!(!config.faults.db_failure);
        assert_eq!(config.server.port, 8000);
    }
}
