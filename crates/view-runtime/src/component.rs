//! # ViewComponent Trait
//!
//! The `ViewComponent` trait is the contract a stateful view must implement to
//! be driven by a [`ComponentActor`](crate::ComponentActor). It defines the
//! component's event type, the snapshot it exposes for rendering, and the
//! context (dependencies) injected at mount time.
//!
//! # Architecture Note
//! Why a trait? The runtime logic (channel plumbing, sequential processing,
//! shutdown on handle drop) is identical for every view. By defining a
//! contract here, we write that loop *once* and reuse it for any component.
//!
//! Associated types keep the API type-safe: a component only ever receives its
//! own `Event` type, and callers only ever see its own `Snapshot`. Sending the
//! wrong event to a view is a compile error, not a runtime surprise.
//!
//! # Provided Methods (Hooks)
//! [`ViewComponent::on_mount`] has a default no-op implementation; implement
//! it only when the component does work on first render (e.g. loading data
//! from a remote service).

use async_trait::async_trait;
use std::fmt::Debug;

/// Contract for a stateful view driven by a [`ComponentActor`](crate::ComponentActor).
///
/// # Failure Model
/// Hooks return `()` rather than `Result`. A view recovers from its own
/// failures locally: it updates its state (e.g. a status message) or logs a
/// diagnostic, but never propagates an error through the runtime. The only
/// errors callers observe are channel-level [`RuntimeError`](crate::RuntimeError)s
/// when the component task itself is gone.
///
/// # Async & Context
/// The trait is `#[async_trait]` so hooks can await network calls. The
/// `Context` type carries the component's dependencies and is injected into
/// every hook by `run()`, not at construction time. This "late binding" keeps
/// component construction trivial and lets tests swap in stub dependencies.
#[async_trait]
pub trait ViewComponent: Send + 'static {
    /// User interactions and other inputs the component reacts to.
    type Event: Send + Debug;

    /// Cloned-out copy of the component's visible state, used for rendering
    /// and for assertions in tests.
    type Snapshot: Clone + Send + Debug;

    /// The runtime dependencies injected into the component.
    /// Use `()` if no dependencies are needed.
    type Context: Send + Sync + 'static;

    /// Called exactly once, when the component task starts and before any
    /// event is processed.
    async fn on_mount(&mut self, _ctx: &Self::Context) {}

    /// Handle a single event. Events are processed strictly one at a time,
    /// so `&mut self` access here is never contended.
    async fn on_event(&mut self, event: Self::Event, ctx: &Self::Context);

    /// Produce the current visible state.
    fn snapshot(&self) -> Self::Snapshot;
}
