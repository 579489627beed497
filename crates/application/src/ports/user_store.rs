//! User storage port

use async_trait::async_trait;
use domain::entities::{NewUser, User};

use crate::error::ApplicationError;

/// Port for user persistence
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new user and return the assigned id
    ///
    /// Returns `ApplicationError::Conflict` when the username or email is
    /// already taken.
    async fn insert(&self, user: NewUser) -> Result<i64, ApplicationError>;

    /// Look up a user by username
    async fn find_by_username(&self, username: &str) -> Result<Option<User>, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn UserStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn UserStore>();
    }
}
