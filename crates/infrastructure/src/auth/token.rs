//! JWT bearer token signing and verification.
//!
//! HS256 tokens carrying the user id in `sub`. Expiry is enforced by the
//! library during verification; no session lookup is involved.

use application::ApplicationError;
use application::ports::{TokenError, TokenSignerPort};
use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// JWT claims
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User id, as a string per JWT convention
    sub: String,
    /// Issued-at (seconds since epoch)
    iat: i64,
    /// Expiry (seconds since epoch)
    exp: i64,
}

/// HS256 token signer
pub struct JwtTokenSigner {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl: Duration,
}

impl std::fmt::Debug for JwtTokenSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtTokenSigner")
            .field("ttl", &self.ttl)
            .finish_non_exhaustive()
    }
}

impl JwtTokenSigner {
    /// Create a signer with the given secret and token lifetime in hours
    #[must_use]
    pub fn new(secret: &SecretString, ttl_hours: i64) -> Self {
        let bytes = secret.expose_secret().as_bytes();
        Self {
            encoding_key: EncodingKey::from_secret(bytes),
            decoding_key: DecodingKey::from_secret(bytes),
            ttl: Duration::hours(ttl_hours),
        }
    }
}

impl TokenSignerPort for JwtTokenSigner {
    fn issue(&self, user_id: i64) -> Result<String, ApplicationError> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + self.ttl).timestamp(),
        };
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| ApplicationError::Internal(format!("token signing failed: {e}")))
    }

    fn verify(&self, token: &str) -> Result<i64, TokenError> {
        let validation = Validation::new(Algorithm::HS256);
        let data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e.to_string()),
            }
        })?;
        data.claims
            .sub
            .parse()
            .map_err(|_| TokenError::Invalid("subject is not a user id".to_string()))
    }
}
