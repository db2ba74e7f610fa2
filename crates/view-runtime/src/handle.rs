//! # View Handle
//!
//! This module defines the handle used to communicate with a running
//! component from the outside.

use crate::component::ViewComponent;
use crate::error::RuntimeError;
use crate::message::ViewRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for interacting with a [`ComponentActor`](crate::ComponentActor).
///
/// The handle forwards requests over a Tokio mpsc channel and receives
/// results via oneshot channels. It holds only a sender, so cloning is cheap
/// and clones can be moved freely across tasks. When every handle has been
/// dropped, the component task observes the closed channel and unmounts.
pub struct ViewHandle<C: ViewComponent> {
    sender: mpsc::Sender<ViewRequest<C>>,
}

// Manual impl: a derived Clone would require C: Clone, which components
// never need to be.
impl<C: ViewComponent> Clone for ViewHandle<C> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<C: ViewComponent> ViewHandle<C> {
    pub fn new(sender: mpsc::Sender<ViewRequest<C>>) -> Self {
        Self { sender }
    }

    /// Deliver one event to the component and wait until it has been
    /// processed.
    pub async fn dispatch(&self, event: C::Event) -> Result<(), RuntimeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Dispatch { event, respond_to })
            .await
            .map_err(|_| RuntimeError::ViewClosed)?;
        response.await.map_err(|_| RuntimeError::ViewDropped)?
    }

    /// Read a clone of the component's current visible state.
    pub async fn snapshot(&self) -> Result<C::Snapshot, RuntimeError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(ViewRequest::Snapshot { respond_to })
            .await
            .map_err(|_| RuntimeError::ViewClosed)?;
        response.await.map_err(|_| RuntimeError::ViewDropped)?
    }
}
