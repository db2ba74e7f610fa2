//! # Runtime Messages
//!
//! This module defines the message type exchanged between a
//! [`ViewHandle`](crate::ViewHandle) and its [`ComponentActor`](crate::ComponentActor).
//!
//! # The Two Operations
//! A view's surface is deliberately small. Everything a caller can do maps to
//! one of two requests:
//!
//! - **Dispatch**: deliver one [`ViewComponent::Event`](crate::ViewComponent::Event)
//!   to the component. The response acknowledges that the event has been
//!   fully processed, so a caller that awaits it observes the resulting state
//!   on its next snapshot.
//! - **Snapshot**: read a clone of the component's visible state.
//!
//! Because both travel through the same queue, state reads and writes are
//! serialized in arrival order. There is no way to observe a half-applied
//! update.

use crate::component::ViewComponent;
use crate::error::RuntimeError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by the component task.
pub type Response<T> = oneshot::Sender<Result<T, RuntimeError>>;

/// Internal request type sent to the component task.
#[derive(Debug)]
pub enum ViewRequest<C: ViewComponent> {
    Dispatch {
        event: C::Event,
        respond_to: Response<()>,
    },
    Snapshot {
        respond_to: Response<C::Snapshot>,
    },
}
