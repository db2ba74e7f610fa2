//! Text rendering of the ordering view.
//!
//! Pure formatting: a snapshot goes in, text comes out. Keeping this outside
//! the component means render output can be asserted without a running task.

use crate::model::FoodItem;
use crate::ordering_view::OrderingSnapshot;

/// One line per menu entry, e.g. `Pizza - $5.50`.
pub fn menu_lines(items: &[FoodItem]) -> Vec<String> {
    items
        .iter()
        .map(|item| format!("{} - ${:.2}", item.name, item.price))
        .collect()
}

/// One line per cart entry. Duplicates appear once per addition.
pub fn cart_lines(cart: &[FoodItem]) -> Vec<String> {
    cart.iter().map(|item| item.name.clone()).collect()
}

/// The full screen: header, menu, cart, and the status line when present.
pub fn screen(snapshot: &OrderingSnapshot) -> String {
    let mut out = String::from("Student Cafe\n\nMenu\n");
    for line in menu_lines(&snapshot.menu) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    out.push_str("\nYour Cart\n");
    for line in cart_lines(&snapshot.cart) {
        out.push_str("  ");
        out.push_str(&line);
        out.push('\n');
    }
    if let Some(status) = &snapshot.status {
        out.push('\n');
        out.push_str(status);
        out.push('\n');
    }
    out
}
