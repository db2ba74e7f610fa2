//! # View Runtime
//!
//! This crate provides the building blocks for driving a stateful view
//! component with a sequential event loop, the way a single-threaded UI
//! runtime would, but expressed as a Tokio actor task.
//!
//! ## Why a Component + Actor?
//!
//! A view holds a handful of pieces of local state and reacts to two kinds of
//! input: user events and the completions of asynchronous calls it makes. The
//! classic UI guarantee is that state updates never race each other. The
//! Actor Model gives Rust the same guarantee without locks:
//!
//! - The component's state lives inside one task, owned exclusively.
//! - Every interaction arrives as a message and is processed sequentially.
//! - Callers hold a cheap, cloneable handle rather than the state itself.
//!
//! **Further Reading**:
//! - [Actors with Tokio](https://ryhl.io/blog/actors-with-tokio/) - the
//!   channel-and-task pattern this runtime is built on
//!
//! ## Architecture Overview
//!
//! The runtime separates concerns into three layers:
//!
//! 1. **Component Layer** ([`ViewComponent`]) - your state and behavior
//! 2. **Runtime Layer** ([`ComponentActor`]) - mounting, message processing, shutdown
//! 3. **Interface Layer** ([`ViewHandle`]) - type-safe communication
//!
//! You write the component's behavior once in the trait impl; the runtime
//! handles the async plumbing.
//!
//! ## Core Abstractions
//!
//! ### [`ViewComponent`] - the behavior
//!
//! ```rust
//! use view_runtime::{ComponentActor, ViewComponent};
//! use async_trait::async_trait;
//!
//! #[derive(Clone, Debug)]
//! struct Greeting {
//!     text: Option<String>,
//! }
//!
//! #[derive(Debug)]
//! enum GreetingEvent {
//!     Greet(String),
//! }
//!
//! #[async_trait]
//! impl ViewComponent for Greeting {
//!     type Event = GreetingEvent;
//!     type Snapshot = Option<String>;
//!     type Context = ();
//!
//!     async fn on_event(&mut self, event: GreetingEvent, _ctx: &()) {
//!         match event {
//!             GreetingEvent::Greet(name) => self.text = Some(format!("Hello, {name}!")),
//!         }
//!     }
//!
//!     fn snapshot(&self) -> Option<String> {
//!         self.text.clone()
//!     }
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let (actor, handle) = ComponentActor::new(Greeting { text: None }, 8);
//!     tokio::spawn(actor.run(()));
//!
//!     handle.dispatch(GreetingEvent::Greet("Alice".into())).await.unwrap();
//!     assert_eq!(handle.snapshot().await.unwrap().as_deref(), Some("Hello, Alice!"));
//! }
//! ```
//!
//! ## Context Injection Pattern
//!
//! Dependencies are injected at **runtime** via `run()`, not at construction
//! time. A component that talks to remote services declares them as its
//! `Context` type; production wires in a real client, tests wire in a stub.
//! The component itself never knows the difference.
//!
//! ## Concurrency Model
//!
//! - The component runs in its own Tokio task
//! - Messages are processed **sequentially** (no locks needed!)
//! - Handles can be cloned and shared across tasks
//! - Dropping every handle closes the channel and unmounts the component
//!
//! ## Testing
//!
//! The runtime provides a [`mock`] module with a scripted [`mock::MockHandle`]
//! and channel-level request helpers, so logic built around a [`ViewHandle`]
//! can be tested without any live component. See the [`mock`] module for the
//! full API and usage patterns.

pub mod actor;
pub mod component;
pub mod error;
pub mod handle;
pub mod message;
pub mod mock;
pub mod tracing;

// Re-export core types for convenience
pub use actor::ComponentActor;
pub use component::ViewComponent;
pub use error::RuntimeError;
pub use handle::ViewHandle;
pub use message::{Response, ViewRequest};
