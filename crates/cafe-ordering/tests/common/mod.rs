//! Shared test support: an in-memory gateway with scripted outcomes.

// Not every test binary uses every helper in this shared module.
#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use cafe_ordering::gateway::{Gateway, GatewayError};
use cafe_ordering::model::{FoodItem, ItemId, Order, OrderId, OrderRequest};

/// In-memory gateway: serves a fixed catalog, records order requests, and
/// can be scripted to fail either call.
pub struct StubGateway {
    items: Vec<FoodItem>,
    fail_catalog: bool,
    fail_order: bool,
    order_id: String,
    order_calls: AtomicUsize,
    last_request: Mutex<Option<OrderRequest>>,
}

impl StubGateway {
    pub fn with_items(items: Vec<FoodItem>) -> Self {
        Self {
            items,
            fail_catalog: false,
            fail_order: false,
            order_id: "42".to_string(),
            order_calls: AtomicUsize::new(0),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing_catalog() -> Self {
        let mut stub = Self::with_items(vec![]);
        stub.fail_catalog = true;
        stub
    }

    pub fn rejecting_orders(mut self) -> Self {
        self.fail_order = true;
        self
    }

    /// How many times `place_order` reached this gateway.
    pub fn order_calls(&self) -> usize {
        self.order_calls.load(Ordering::SeqCst)
    }

    /// The item ids of the most recent order request, if any.
    pub fn last_item_ids(&self) -> Option<Vec<ItemId>> {
        self.last_request
            .lock()
            .unwrap()
            .as_ref()
            .map(|request| request.item_ids.clone())
    }
}

#[async_trait]
impl Gateway for StubGateway {
    async fn fetch_items(&self) -> Result<Vec<FoodItem>, GatewayError> {
        if self.fail_catalog {
            return Err(GatewayError::Transport("connection refused".to_string()));
        }
        Ok(self.items.clone())
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<Order, GatewayError> {
        self.order_calls.fetch_add(1, Ordering::SeqCst);
        *self.last_request.lock().unwrap() = Some(order.clone());

        if self.fail_order {
            return Err(GatewayError::Status {
                status: 500,
                body: "order-service unavailable".to_string(),
            });
        }
        Ok(Order {
            id: OrderId(self.order_id.clone()),
            item_ids: order.item_ids.clone(),
            status: "PLACED".to_string(),
        })
    }
}
