/// Represents an order exchanged with the order service.
///
/// The outbound [`OrderRequest`] carries only item ids; the inbound [`Order`]
/// echoes them back together with the id and status the service assigned.
use crate::model::{FoodItem, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Type-safe identifier for orders, assigned by the order service.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outbound payload for placing a new order.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    pub item_ids: Vec<ItemId>,
}

impl OrderRequest {
    /// Builds the payload from cart entries.
    ///
    /// The id sequence matches the order of addition, duplicates included:
    /// an item added twice is ordered twice.
    pub fn from_cart(cart: &[FoodItem]) -> Self {
        Self {
            item_ids: cart.iter().map(|item| item.id.clone()).collect(),
        }
    }
}

/// An order as acknowledged by the order service.
///
/// `status` is owned by the service and treated as opaque here.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Order {
    pub id: OrderId,
    pub item_ids: Vec<ItemId>,
    pub status: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cart_preserves_order_and_duplicates() {
        let pizza = FoodItem::new("1", "Pizza", 5.5);
        let cola = FoodItem::new("2", "Cola", 1.5);
        let cart = vec![pizza.clone(), cola, pizza];

        let request = OrderRequest::from_cart(&cart);
        assert_eq!(
            request.item_ids,
            vec![ItemId::from("1"), ItemId::from("2"), ItemId::from("1")]
        );
    }

    #[test]
    fn test_order_request_wire_shape() {
        let cart = vec![FoodItem::new("1", "Pizza", 5.5), FoodItem::new("1", "Pizza", 5.5)];
        let request = OrderRequest::from_cart(&cart);

        let body = serde_json::to_value(&request).unwrap();
        assert_eq!(body, serde_json::json!({ "item_ids": ["1", "1"] }));
    }
}
