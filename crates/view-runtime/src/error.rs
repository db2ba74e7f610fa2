//! # Runtime Errors
//!
//! This module defines the errors the runtime itself can produce. Component
//! failures never surface here; a [`ViewComponent`](crate::ViewComponent)
//! absorbs its own failures into state or logs. These variants only appear
//! when the component task is no longer reachable.

/// Errors that can occur within the view runtime itself.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("view task stopped")]
    ViewClosed,
    #[error("view dropped response channel")]
    ViewDropped,
}
