//! The ordering view's state and behavior.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, info, warn};
use view_runtime::ViewComponent;

use super::events::{OrderingEvent, EMPTY_CART_NOTICE, ORDER_FAILURE_NOTICE};
use crate::gateway::Gateway;
use crate::model::{FoodItem, OrderRequest};

/// The ordering view: menu, cart, and an optional status message.
///
/// State lives exclusively inside the component task; callers observe it
/// through [`OrderingSnapshot`]s and mutate it by dispatching
/// [`OrderingEvent`]s.
#[derive(Default)]
pub struct OrderingView {
    menu: Vec<FoodItem>,
    cart: Vec<FoodItem>,
    status: Option<String>,
}

/// Cloned-out visible state of the ordering view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct OrderingSnapshot {
    pub menu: Vec<FoodItem>,
    pub cart: Vec<FoodItem>,
    pub status: Option<String>,
}

impl OrderingView {
    async fn place_order(&mut self, gateway: &Arc<dyn Gateway>) {
        if self.cart.is_empty() {
            self.status = Some(EMPTY_CART_NOTICE.to_string());
            return;
        }

        let request = OrderRequest::from_cart(&self.cart);
        match gateway.place_order(&request).await {
            Ok(order) => {
                info!(order_id = %order.id, "Order placed");
                self.status = Some(format!("Order {} placed successfully!", order.id));
                self.cart.clear();
            }
            Err(error) => {
                warn!(error = %error, "Order placement failed");
                // Cart stays as-is so the user can retry.
                self.status = Some(ORDER_FAILURE_NOTICE.to_string());
            }
        }
    }
}

#[async_trait]
impl ViewComponent for OrderingView {
    type Event = OrderingEvent;
    type Snapshot = OrderingSnapshot;
    type Context = Arc<dyn Gateway>;

    async fn on_mount(&mut self, gateway: &Arc<dyn Gateway>) {
        match gateway.fetch_items().await {
            Ok(items) => {
                info!(count = items.len(), "Catalog loaded");
                self.menu = items;
            }
            // The menu keeps its prior value and nothing is surfaced to the user.
            Err(error) => warn!(error = %error, "Catalog fetch failed"),
        }
    }

    async fn on_event(&mut self, event: OrderingEvent, gateway: &Arc<dyn Gateway>) {
        match event {
            OrderingEvent::AddToCart(item) => {
                debug!(item_id = %item.id, "Added to cart");
                self.cart.push(item);
            }
            OrderingEvent::PlaceOrder => self.place_order(gateway).await,
        }
    }

    fn snapshot(&self) -> OrderingSnapshot {
        OrderingSnapshot {
            menu: self.menu.clone(),
            cart: self.cart.clone(),
            status: self.status.clone(),
        }
    }
}
