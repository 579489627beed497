//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// A required request field was absent
    #[error("Missing required field: {0}")]
    MissingField(String),

    /// Username or email collides with an existing user
    #[error("Username or email already exists")]
    DuplicateIdentity,

    /// Entity not found
    #[error("{entity_type} not found: {id}")]
    NotFound { entity_type: String, id: String },

    /// Validation failed
    #[error("Validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    /// Create a missing-field error
    pub fn missing_field(name: impl Into<String>) -> Self {
        Self::MissingField(name.into())
    }

    /// Create a not found error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_message() {
        let err = DomainError::missing_field("username");
        assert_eq!(err.to_string(), "Missing required field: username");
    }

    #[test]
    fn duplicate_identity_message() {
        let err = DomainError::DuplicateIdentity;
        assert_eq!(err.to_string(), "Username or email already exists");
    }

    #[test]
    fn not_found_message() {
        let err = DomainError::not_found("Order", "42");
        assert_eq!(err.to_string(), "Order not found: 42");
    }

    #[test]
    fn validation_message() {
        let err = DomainError::Validation("amount must be positive".to_string());
        assert_eq!(err.to_string(), "Validation failed: amount must be positive");
    }
}
