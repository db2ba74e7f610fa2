//! # Ordering Handle
//!
//! Provides a high-level API for interacting with the running ordering view.
//! It wraps a [`ViewHandle<OrderingView>`] and exposes domain-specific
//! methods instead of raw event dispatch.

use tracing::{debug, instrument};
use view_runtime::{RuntimeError, ViewHandle};

use crate::model::FoodItem;
use crate::ordering_view::{OrderingEvent, OrderingSnapshot, OrderingView};

/// Handle for interacting with the ordering view.
#[derive(Clone)]
pub struct OrderingHandle {
    inner: ViewHandle<OrderingView>,
}

impl OrderingHandle {
    pub fn new(inner: ViewHandle<OrderingView>) -> Self {
        Self { inner }
    }

    /// Append one item to the cart.
    #[instrument(skip(self, item), fields(item_id = %item.id))]
    pub async fn add_to_cart(&self, item: FoodItem) -> Result<(), RuntimeError> {
        debug!("Sending request");
        self.inner.dispatch(OrderingEvent::AddToCart(item)).await
    }

    /// Submit the current cart as an order.
    ///
    /// The outcome lands in the view's status message; this method only
    /// fails when the view task itself is gone.
    #[instrument(skip(self))]
    pub async fn place_order(&self) -> Result<(), RuntimeError> {
        debug!("Sending request");
        self.inner.dispatch(OrderingEvent::PlaceOrder).await
    }

    /// Read the view's current menu, cart, and status.
    #[instrument(skip(self))]
    pub async fn snapshot(&self) -> Result<OrderingSnapshot, RuntimeError> {
        self.inner.snapshot().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use view_runtime::mock::{create_mock_handle, expect_dispatch, MockHandle};

    #[tokio::test]
    async fn test_add_to_cart_dispatches_item() {
        let (handle, mut receiver) = create_mock_handle::<OrderingView>(10);
        let ordering = OrderingHandle::new(handle);

        let item = FoodItem::new("1", "Pizza", 5.5);
        let add_task = tokio::spawn(async move { ordering.add_to_cart(item).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        match event {
            OrderingEvent::AddToCart(item) => assert_eq!(item.name, "Pizza"),
            _ => panic!("Expected AddToCart event"),
        }
        responder.send(Ok(())).unwrap();

        let result = add_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_place_order_dispatches_event() {
        let (handle, mut receiver) = create_mock_handle::<OrderingView>(10);
        let ordering = OrderingHandle::new(handle);

        let order_task = tokio::spawn(async move { ordering.place_order().await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert!(matches!(event, OrderingEvent::PlaceOrder));
        responder.send(Ok(())).unwrap();

        let result = order_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_snapshot_surfaces_runtime_errors() {
        let mut mock = MockHandle::<OrderingView>::new();
        mock.expect_snapshot().return_err(RuntimeError::ViewClosed);

        let ordering = OrderingHandle::new(mock.handle());
        let result = ordering.snapshot().await;
        assert!(matches!(result, Err(RuntimeError::ViewClosed)));

        mock.verify();
    }
}
