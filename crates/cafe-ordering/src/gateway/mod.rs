//! # Gateway Port
//!
//! The catalog and order services sit behind an API gateway and are reached
//! over HTTP; everything past the `/api/...` route prefix is opaque to this
//! application. This module defines the port the ordering view talks to and
//! the error type both operations share.
//!
//! The trait exists so the view never depends on transport details: the
//! production adapter is the reqwest-backed [`HttpGateway`], tests inject
//! in-memory stubs.

use crate::model::{FoodItem, Order, OrderRequest};
use async_trait::async_trait;

pub mod http;

pub use http::HttpGateway;

/// Errors produced by gateway calls.
///
/// The distinction only matters for diagnostics; callers treat every variant
/// as the same outcome (the call failed).
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("unexpected status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("invalid response body: {0}")]
    Decode(String),
}

/// Remote catalog and order services, reached through the API gateway.
#[async_trait]
pub trait Gateway: Send + Sync {
    /// Fetch the full food catalog.
    async fn fetch_items(&self) -> Result<Vec<FoodItem>, GatewayError>;

    /// Submit an order for the given item ids.
    async fn place_order(&self, order: &OrderRequest) -> Result<Order, GatewayError>;
}
