//! Token signing configuration.

use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Token signing configuration
///
/// The default secret is deliberately weak; a real deployment would set
/// `FAULTMART__AUTH__JWT_SECRET` and never ship the fallback.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    /// HMAC secret used to sign bearer tokens
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: SecretString,

    /// Token lifetime in hours
    #[serde(default = "default_token_ttl_hours")]
    pub token_ttl_hours: i64,
}

fn default_jwt_secret() -> SecretString {
    SecretString::from("your-secret-key")
}

const fn default_token_ttl_hours() -> i64 {
    24
}

impl AuthConfig {
    /// Whether the signing secret is still the built-in fallback
    #[must_use]
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret.expose_secret() == "your-secret-key"
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            token_ttl_hours: default_token_ttl_hours(),
        }
    }
}
