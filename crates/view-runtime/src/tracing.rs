//! # Observability & Tracing
//!
//! This module provides the tracing setup shared by every binary and test
//! harness built on the runtime.
//!
//! ## Configuration
//!
//! [`setup_tracing`] installs a compact `tracing-subscriber` format that
//! hides the crate/module prefix (`with_target(false)`); log lines carry a
//! `component_type` field instead, which keeps them short while still
//! structured.
//!
//! Log levels come from the `RUST_LOG` environment variable:
//!
//! ```bash
//! RUST_LOG=info cargo run      # lifecycle and outcomes
//! RUST_LOG=debug cargo run     # every event and snapshot
//! ```
//!
//! ## What Gets Traced
//!
//! - **Component lifecycle**: mount, unmount
//! - **Requests**: each dispatched event (with its `Debug` payload at debug
//!   level) and each snapshot read
//! - **Failures**: remote-call diagnostics logged by components, with error
//!   context

/// Initializes the global tracing subscriber. Call once, at process start.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false) // Don't show module paths - we use component_type instead
        .compact()
        .init();
}
