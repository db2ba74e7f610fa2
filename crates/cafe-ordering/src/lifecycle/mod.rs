//! # Application Lifecycle
//!
//! This module wires the application together: it mounts the ordering view
//! with its gateway dependency and manages graceful shutdown.
//!
//! ## The Orchestration Pattern
//!
//! The view itself knows nothing about where its gateway comes from; the
//! dependency is injected when its task starts. [`CafeApp`] is the conductor:
//!
//! 1. **Creation** - instantiate the view and its handle
//! 2. **Dependency Injection** - pass the gateway into `run()`
//! 3. **Lifecycle Management** - spawn the view task
//! 4. **Graceful Shutdown** - drop the handle, await the task
//!
//! ## Graceful Shutdown
//!
//! Shutdown follows the runtime's channel-closure convention:
//!
//! 1. **Drop the handle** - closes the sender side of the view's channel
//! 2. **The view detects closure** - `recv()` returns `None`
//! 3. **Await completion** - the view task logs its unmount and finishes
//!
//! In-flight gateway requests are never aborted; an unmount simply stops new
//! events from arriving.

use std::sync::Arc;

use crate::gateway::Gateway;
use crate::handle::OrderingHandle;
use crate::ordering_view;

/// The running application: the ordering view plus its task handle.
pub struct CafeApp {
    /// Handle for interacting with the ordering view.
    pub ordering: OrderingHandle,

    /// Task handle for the view's run loop (used for graceful shutdown).
    task: tokio::task::JoinHandle<()>,
}

impl CafeApp {
    /// Mounts the ordering view against the given gateway.
    pub fn new(gateway: Arc<dyn Gateway>) -> Self {
        let (actor, handle) = ordering_view::new();
        let task = tokio::spawn(actor.run(gateway));

        Self {
            ordering: OrderingHandle::new(handle),
            task,
        }
    }

    /// Shuts the application down gracefully.
    pub async fn shutdown(self) -> Result<(), String> {
        drop(self.ordering);
        self.task.await.map_err(|e| e.to_string())
    }
}
