//! # Ordering View
//!
//! This module implements the cafe's ordering view: the menu, the cart, and
//! the status line, driven by a [`ComponentActor`](view_runtime::ComponentActor).
//!
//! ## Overview
//!
//! The view holds three pieces of state and reacts to two user events. On
//! mount it loads the catalog through its injected [`Gateway`](crate::gateway::Gateway);
//! on [`OrderingEvent::PlaceOrder`] it submits the cart and interprets the
//! outcome. All failure handling stays inside the view: a failed catalog load
//! is logged and swallowed, a failed order becomes a status message.
//!
//! ## Structure
//!
//! - [`component`] - [`ViewComponent`](view_runtime::ViewComponent) implementation for [`OrderingView`]
//! - [`events`] - [`OrderingEvent`] plus the fixed user-facing notices
//! - [`new()`] - Factory function that creates the view and its handle
//!
//! ## Usage
//!
//! ```rust,ignore
//! let (actor, handle) = ordering_view::new();
//! tokio::spawn(actor.run(gateway));
//!
//! handle.dispatch(OrderingEvent::AddToCart(item)).await?;
//! handle.dispatch(OrderingEvent::PlaceOrder).await?;
//! ```
//!
//! ## Key Behaviors
//!
//! - **Mount-once catalog load**: the menu is replaced wholesale on success,
//!   left untouched on failure
//! - **Append-only cart**: no deduplication, no quantity aggregation
//! - **Retry-friendly failures**: a failed order leaves the cart intact

pub mod component;
pub mod events;

pub use component::*;
pub use events::*;

use view_runtime::{ComponentActor, ViewHandle};

/// Creates the ordering view in its initial empty state, plus its handle.
pub fn new() -> (ComponentActor<OrderingView>, ViewHandle<OrderingView>) {
    ComponentActor::new(OrderingView::default(), 32)
}
