//! Order storage port

use async_trait::async_trait;
use domain::entities::NewOrder;

use crate::error::ApplicationError;

/// Port for order persistence
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert a new order with status `pending` and return the assigned id
    async fn insert(&self, order: NewOrder) -> Result<i64, ApplicationError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn _assert_object_safe(_: &dyn OrderStore) {}

    #[test]
    fn trait_is_send_sync() {
        fn assert_send_sync<T: Send + Sync + ?Sized>() {}
        assert_send_sync::<dyn OrderStore>();
    }
}
