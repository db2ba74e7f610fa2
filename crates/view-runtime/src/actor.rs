//! # Component Actor
//!
//! This module defines the `ComponentActor`, the task that owns a view's
//! state and drives its lifecycle. It is the "server" half of the runtime:
//! the [`ViewHandle`](crate::ViewHandle) is the interface, this is the loop
//! behind it.

use crate::component::ViewComponent;
use crate::handle::ViewHandle;
use crate::message::ViewRequest;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// The task that owns a [`ViewComponent`] and processes its requests.
///
/// # Concurrency Model
/// The actor owns the component exclusively and processes requests one at a
/// time in a loop. No `Mutex` or `RwLock` guards the state: handles may be
/// cloned across many tasks, but their requests interleave at the queue and
/// never inside an update. This is the single-threaded update model of a UI
/// runtime, expressed as an actor task.
///
/// # Lifecycle
/// `run()` mounts the component exactly once, then serves requests until
/// every handle has been dropped, then unmounts. Because the mount hook runs
/// before the first queued request is taken, a caller's first `snapshot()`
/// always observes post-mount state.
///
/// # Usage Pattern
///
/// 1. **Create**: call [`ComponentActor::new`] to get the actor and its handle.
/// 2. **Wire**: pass the component's dependencies into `actor.run(context)`.
/// 3. **Run**: spawn the run loop in a background task.
///
/// ```rust
/// use view_runtime::{ComponentActor, ViewComponent};
/// use async_trait::async_trait;
///
/// #[derive(Debug)]
/// enum CounterEvent {
///     Increment,
/// }
///
/// #[derive(Default)]
/// struct Counter {
///     value: u32,
/// }
///
/// #[async_trait]
/// impl ViewComponent for Counter {
///     type Event = CounterEvent;
///     type Snapshot = u32;
///     type Context = ();
///
///     async fn on_event(&mut self, event: CounterEvent, _ctx: &()) {
///         match event {
///             CounterEvent::Increment => self.value += 1,
///         }
///     }
///
///     fn snapshot(&self) -> u32 {
///         self.value
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     // 1. Create
///     let (actor, handle) = ComponentActor::new(Counter::default(), 8);
///
///     // 2. Wire & Run
///     tokio::spawn(actor.run(()));
///
///     // 3. Use
///     handle.dispatch(CounterEvent::Increment).await.unwrap();
///     assert_eq!(handle.snapshot().await.unwrap(), 1);
/// }
/// ```
pub struct ComponentActor<C: ViewComponent> {
    receiver: mpsc::Receiver<ViewRequest<C>>,
    component: C,
}

impl<C: ViewComponent> ComponentActor<C> {
    /// Creates a new `ComponentActor` around a component, plus its handle.
    ///
    /// # Arguments
    ///
    /// * `component` - The component in its initial (pre-mount) state.
    /// * `buffer_size` - Capacity of the mpsc channel. If the channel is
    ///   full, calls on the handle wait until there is space.
    pub fn new(component: C, buffer_size: usize) -> (Self, ViewHandle<C>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            component,
        };
        let handle = ViewHandle::new(sender);
        (actor, handle)
    }

    /// Runs the component's lifecycle: mount once, process requests until the
    /// channel closes, unmount.
    ///
    /// # Context Injection
    /// The `context` argument is injected into every component hook. This
    /// allows components to reach external dependencies (like remote service
    /// clients) that were created *after* the actor was instantiated but
    /// *before* the loop started.
    pub async fn run(mut self, context: C::Context) {
        // Extract just the type name (e.g. "OrderingView" instead of the full path)
        let component_type = std::any::type_name::<C>()
            .split("::")
            .last()
            .unwrap_or("Unknown");
        info!(component_type, "View mounting");

        self.component.on_mount(&context).await;
        info!(component_type, "View mounted");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                ViewRequest::Dispatch { event, respond_to } => {
                    debug!(component_type, ?event, "Event");
                    self.component.on_event(event, &context).await;
                    let _ = respond_to.send(Ok(()));
                }
                ViewRequest::Snapshot { respond_to } => {
                    debug!(component_type, "Snapshot");
                    let _ = respond_to.send(Ok(self.component.snapshot()));
                }
            }
        }

        info!(component_type, "View unmounted");
    }
}
