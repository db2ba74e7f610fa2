//! Events the ordering view reacts to, plus its fixed user-facing notices.

use crate::model::FoodItem;

/// Notice shown when the user places an order with an empty cart.
pub const EMPTY_CART_NOTICE: &str = "Your cart is empty!";

/// Notice shown when order placement fails.
pub const ORDER_FAILURE_NOTICE: &str = "Failed to place order.";

/// User interactions on the ordering view.
#[derive(Debug)]
pub enum OrderingEvent {
    /// Append one item to the end of the cart.
    AddToCart(FoodItem),
    /// Submit the current cart as an order.
    PlaceOrder,
}
