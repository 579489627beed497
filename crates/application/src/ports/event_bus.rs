//! Event bus port

use async_trait::async_trait;

use crate::error::ApplicationError;

/// Port for publishing lifecycle events to an external bus
///
/// Publishing is best-effort everywhere it is used; bus availability never
/// blocks the calling operation.
#[async_trait]
pub trait EventBusPort: Send + Sync {
    /// Publish a `user_logout` event for the given user
    async fn publish_logout(&self, user_id: i64) -> Result<(), ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn EventBusPort) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn EventBusPort>();
    }
}
