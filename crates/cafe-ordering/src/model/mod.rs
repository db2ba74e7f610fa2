//! Domain models shared by the ordering view and the gateway adapter.

pub mod food_item;
pub mod order;

pub use food_item::*;
pub use order::*;
