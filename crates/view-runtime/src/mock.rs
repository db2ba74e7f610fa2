//! # Mock Runtime & Testing Guide
//!
//! The [`MockHandle`] type stands in for a running component: it serves the
//! same [`ViewHandle`] API but answers from scripted expectations instead of
//! real component state. It lets you unit test logic built *around* a handle
//! (e.g. a typed wrapper) without spawning any task that owns state.
//!
//! ## When to use Mocks vs a Real Component
//!
//! | Feature | MockHandle | Real Component |
//! |---------|------------|----------------|
//! | **Speed** | Instant (in-memory) | Fast (but involves tokio spawn) |
//! | **Determinism** | 100% deterministic | Subject to scheduler |
//! | **State** | No real state (expectations) | Real state management |
//! | **Use Case** | Wrapper logic around the handle | The component itself or full flows |
//! | **Error Injection** | Easy (`return_err`) | Hard (requires killing the task) |
//!
//! ## Testing Strategies
//!
//! Three patterns cover this runtime:
//!
//! 1. **Wrapper logic (pure mock)**: script a [`MockHandle`], hand its
//!    [`ViewHandle`] to the wrapper under test, assert on what comes back.
//! 2. **Component logic (real actor, stub context)**: spawn the real
//!    component with an in-memory implementation of its context and drive it
//!    through a real handle. This is the sweet spot for view behavior.
//! 3. **Request-level assertions (channel helpers)**: use
//!    [`create_mock_handle`] plus [`expect_dispatch`]/[`expect_snapshot`] when
//!    a test needs to inspect the raw request before answering it.
//!
//! ## Testing Failure Scenarios
//!
//! The main advantage of `MockHandle` is simulating runtime failures that a
//! healthy component never produces:
//!
//! ```rust
//! use view_runtime::mock::MockHandle;
//! use view_runtime::{RuntimeError, ViewComponent};
//! use async_trait::async_trait;
//!
//! #[derive(Debug)]
//! enum PingEvent { Ping }
//!
//! struct Ping;
//!
//! #[async_trait]
//! impl ViewComponent for Ping {
//!     type Event = PingEvent;
//!     type Snapshot = ();
//!     type Context = ();
//!     async fn on_event(&mut self, _: PingEvent, _: &()) {}
//!     fn snapshot(&self) {}
//! }
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut mock = MockHandle::<Ping>::new();
//!     let handle = mock.handle();
//!
//!     // Simulate the component task having died
//!     mock.expect_dispatch().return_err(RuntimeError::ViewClosed);
//!
//!     // Verify the caller sees the failure gracefully
//!     let result = handle.dispatch(PingEvent::Ping).await;
//!     assert!(matches!(result, Err(RuntimeError::ViewClosed)));
//! }
//! ```

use crate::component::ViewComponent;
use crate::error::RuntimeError;
use crate::handle::ViewHandle;
use crate::message::ViewRequest;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc;

// =============================================================================
// EXPECTATION BUILDER API
// =============================================================================

/// Represents an expected request to the mock handle.
enum Expectation<C: ViewComponent> {
    Dispatch {
        response: Result<(), RuntimeError>,
    },
    Snapshot {
        response: Result<C::Snapshot, RuntimeError>,
    },
}

/// A mock handle with expectation tracking for fluent testing.
///
/// # Example
/// ```ignore
/// let mut mock = MockHandle::<OrderingView>::new();
/// mock.expect_dispatch().return_ok(());
/// mock.expect_snapshot().return_ok(snapshot);
///
/// let handle = mock.handle();
/// // Use handle in tests...
/// mock.verify(); // Ensures all expectations were met
/// ```
pub struct MockHandle<C: ViewComponent> {
    handle: ViewHandle<C>,
    expectations: Arc<Mutex<VecDeque<Expectation<C>>>>,
    _task: tokio::task::JoinHandle<()>,
}

impl<C: ViewComponent> Default for MockHandle<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ViewComponent> MockHandle<C> {
    /// Creates a new mock handle with no expectations.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<ViewRequest<C>>(100);
        let expectations = Arc::new(Mutex::new(VecDeque::new()));
        let expectations_clone = expectations.clone();

        // Background task answers each request from the scripted queue.
        let task = tokio::spawn(async move {
            while let Some(request) = receiver.recv().await {
                let expectation = {
                    let mut exps = expectations_clone.lock().unwrap();
                    exps.pop_front()
                };

                match (request, expectation) {
                    (
                        ViewRequest::Dispatch {
                            event: _,
                            respond_to,
                        },
                        Some(Expectation::Dispatch { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    (
                        ViewRequest::Snapshot { respond_to },
                        Some(Expectation::Snapshot { response }),
                    ) => {
                        let _ = respond_to.send(response);
                    }
                    _ => {
                        panic!("Unexpected request or expectation mismatch");
                    }
                }
            }
        });

        Self {
            handle: ViewHandle::new(sender),
            expectations,
            _task: task,
        }
    }

    /// Returns the handle for use in tests.
    pub fn handle(&self) -> ViewHandle<C> {
        self.handle.clone()
    }

    /// Expects a `dispatch` operation.
    pub fn expect_dispatch(&mut self) -> DispatchExpectationBuilder<C> {
        DispatchExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Expects a `snapshot` operation.
    pub fn expect_snapshot(&mut self) -> SnapshotExpectationBuilder<C> {
        SnapshotExpectationBuilder {
            expectations: self.expectations.clone(),
        }
    }

    /// Verifies that all expectations were met.
    pub fn verify(&self) {
        let exps = self.expectations.lock().unwrap();
        if !exps.is_empty() {
            panic!("Not all expectations were met. {} remaining", exps.len());
        }
    }
}

/// Builder for `dispatch` expectations.
pub struct DispatchExpectationBuilder<C: ViewComponent> {
    expectations: Arc<Mutex<VecDeque<Expectation<C>>>>,
}

impl<C: ViewComponent> DispatchExpectationBuilder<C> {
    /// Sets the expectation to acknowledge the event.
    pub fn return_ok(self) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch { response: Ok(()) });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RuntimeError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Dispatch {
            response: Err(error),
        });
    }
}

/// Builder for `snapshot` expectations.
pub struct SnapshotExpectationBuilder<C: ViewComponent> {
    expectations: Arc<Mutex<VecDeque<Expectation<C>>>>,
}

impl<C: ViewComponent> SnapshotExpectationBuilder<C> {
    /// Sets the expectation to return the given snapshot.
    pub fn return_ok(self, snapshot: C::Snapshot) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Ok(snapshot),
        });
    }

    /// Sets the expectation to return an error.
    pub fn return_err(self, error: RuntimeError) {
        let mut exps = self.expectations.lock().unwrap();
        exps.push_back(Expectation::Snapshot {
            response: Err(error),
        });
    }
}

// =============================================================================
// CHANNEL-LEVEL HELPERS
// =============================================================================

/// Creates a mock handle and a receiver for asserting raw requests.
///
/// # Testing Strategy
/// Where [`MockHandle`] answers blindly from a script, this variant hands the
/// test the receiving end of the channel. The test can inspect the actual
/// request (e.g. which event a wrapper dispatched) before answering through
/// the captured responder.
pub fn create_mock_handle<C: ViewComponent>(
    buffer_size: usize,
) -> (ViewHandle<C>, mpsc::Receiver<ViewRequest<C>>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ViewHandle::new(sender), receiver)
}

/// Helper to verify that the next request is a Dispatch.
pub async fn expect_dispatch<C: ViewComponent>(
    receiver: &mut mpsc::Receiver<ViewRequest<C>>,
) -> Option<(
    C::Event,
    tokio::sync::oneshot::Sender<Result<(), RuntimeError>>,
)> {
    match receiver.recv().await {
        Some(ViewRequest::Dispatch { event, respond_to }) => Some((event, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next request is a Snapshot.
pub async fn expect_snapshot<C: ViewComponent>(
    receiver: &mut mpsc::Receiver<ViewRequest<C>>,
) -> Option<tokio::sync::oneshot::Sender<Result<C::Snapshot, RuntimeError>>> {
    match receiver.recv().await {
        Some(ViewRequest::Snapshot { respond_to }) => Some(respond_to),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;

    #[derive(Debug, PartialEq)]
    enum CounterEvent {
        Increment,
    }

    #[derive(Default)]
    struct Counter {
        value: u32,
    }

    #[async_trait]
    impl ViewComponent for Counter {
        type Event = CounterEvent;
        type Snapshot = u32;
        type Context = ();

        async fn on_event(&mut self, event: CounterEvent, _ctx: &()) {
            match event {
                CounterEvent::Increment => self.value += 1,
            }
        }

        fn snapshot(&self) -> u32 {
            self.value
        }
    }

    #[tokio::test]
    async fn test_mock_handle_channel_helpers() {
        let (handle, mut receiver) = create_mock_handle::<Counter>(10);

        let dispatch_task =
            tokio::spawn(async move { handle.dispatch(CounterEvent::Increment).await });

        let (event, responder) = expect_dispatch(&mut receiver)
            .await
            .expect("Expected Dispatch request");
        assert_eq!(event, CounterEvent::Increment);
        responder.send(Ok(())).unwrap();

        let result = dispatch_task.await.unwrap();
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_mock_handle_with_expectations() {
        let mut mock = MockHandle::<Counter>::new();

        mock.expect_dispatch().return_ok();
        mock.expect_snapshot().return_ok(7);

        let handle = mock.handle();

        handle.dispatch(CounterEvent::Increment).await.unwrap();
        let value = handle.snapshot().await.unwrap();
        assert_eq!(value, 7);

        mock.verify();
    }

    #[tokio::test]
    async fn test_mock_handle_error_injection() {
        let mut mock = MockHandle::<Counter>::new();
        mock.expect_snapshot().return_err(RuntimeError::ViewClosed);

        let handle = mock.handle();
        let result = handle.snapshot().await;
        assert!(matches!(result, Err(RuntimeError::ViewClosed)));

        mock.verify();
    }
}
