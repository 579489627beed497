//! Password hashing port

use crate::error::ApplicationError;

/// Port for salted password hashing and verification
pub trait PasswordHasherPort: Send + Sync {
    /// Hash a plaintext password into a self-describing PHC string
    fn hash(&self, password: &str) -> Result<String, ApplicationError>;

    /// Verify a plaintext password against a stored hash
    fn verify(&self, password: &str, hash: &str) -> Result<bool, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn PasswordHasherPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn PasswordHasherPort>();
    }
}
