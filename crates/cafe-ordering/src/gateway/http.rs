//! Reqwest-backed gateway adapter.
//!
//! This adapter owns transport details only: request serialisation, HTTP
//! error mapping, and JSON decoding into domain models.

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use serde::de::DeserializeOwned;

use super::{Gateway, GatewayError};
use crate::model::{FoodItem, Order, OrderRequest};

const CATALOG_ITEMS_PATH: &str = "/api/catalog/items";
const ORDERS_PATH: &str = "/api/orders/orders";

/// Gateway adapter that issues HTTP requests against one base URL.
///
/// Requests carry no timeout: a call resolves, fails, or waits as long as the
/// remote side does.
pub struct HttpGateway {
    client: Client,
    base: Url,
}

impl HttpGateway {
    /// Build an adapter for the given gateway base URL.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(base: Url) -> Result<Self, reqwest::Error> {
        let client = Client::builder().build()?;
        Ok(Self { client, base })
    }

    fn endpoint(&self, path: &str) -> Result<Url, GatewayError> {
        self.base
            .join(path)
            .map_err(|error| GatewayError::Transport(error.to_string()))
    }
}

#[async_trait]
impl Gateway for HttpGateway {
    async fn fetch_items(&self) -> Result<Vec<FoodItem>, GatewayError> {
        let response = self
            .client
            .get(self.endpoint(CATALOG_ITEMS_PATH)?)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }

    async fn place_order(&self, order: &OrderRequest) -> Result<Order, GatewayError> {
        // .json() also sets the Content-Type: application/json header.
        let response = self
            .client
            .post(self.endpoint(ORDERS_PATH)?)
            .json(order)
            .send()
            .await
            .map_err(map_transport_error)?;
        decode_response(response).await
    }
}

async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, GatewayError> {
    let status = response.status();
    let body = response.bytes().await.map_err(map_transport_error)?;
    if !status.is_success() {
        return Err(map_status_error(status, body.as_ref()));
    }
    decode_body(body.as_ref())
}

fn decode_body<T: DeserializeOwned>(body: &[u8]) -> Result<T, GatewayError> {
    serde_json::from_slice(body)
        .map_err(|error| GatewayError::Decode(format!("invalid gateway JSON payload: {error}")))
}

fn map_transport_error(error: reqwest::Error) -> GatewayError {
    GatewayError::Transport(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> GatewayError {
    GatewayError::Status {
        status: status.as_u16(),
        body: body_preview(body),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
