//! HTTP client for the Yobraf backend REST API.
//!
//! # Architecture
//!
//! - The backend is the source of truth - no local persistence, direct
//!   API calls with a per-user bearer credential
//! - Response-shape differences between deployments are normalized in
//!   one place ([`payload`]) instead of at every call site
//! - No retry or backoff: every operation is a single request, and the
//!   caller decides what a failure means for the page
//!
//! # Example
//!
//! ```rust,ignore
//! use yobraf_storefront::api::BackendClient;
//! use yobraf_storefront::auth::AuthContext;
//! use yobraf_storefront::config::StorefrontConfig;
//!
//! let config = StorefrontConfig::from_env()?;
//! let client = BackendClient::new(&config, AuthContext::with_token(token))?;
//!
//! let items = client.get_cart().await?;
//! client.add_to_cart(product_id, 1).await?;
//! ```

mod payload;
pub mod types;

pub use types::{CheckoutSubmission, LineItem, Order, OrderItem, OrderItemInput, ProductSnapshot};

use std::sync::Arc;

use serde_json::Value;
use thiserror::Error;
use tracing::instrument;
use url::Url;

use yobraf_core::ProductId;

use crate::auth::AuthContext;
use crate::config::StorefrontConfig;

/// Errors that can occur when talking to the backend API.
#[derive(Debug, Error)]
pub enum BackendError {
    /// HTTP transport failed (connection refused, timeout, ...).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Backend returned {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// An endpoint path could not be joined onto the base URL.
    #[error("Invalid endpoint URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Client for the Yobraf backend REST API.
///
/// Cheaply cloneable; the underlying connection pool and auth context
/// are shared via `Arc`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    inner: Arc<BackendClientInner>,
}

#[derive(Debug)]
struct BackendClientInner {
    client: reqwest::Client,
    base_url: Url,
    auth: AuthContext,
}

impl BackendClient {
    /// Create a new backend client.
    ///
    /// The auth context is passed in explicitly so callers (and tests)
    /// never depend on ambient global state for the token.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(config: &StorefrontConfig, auth: AuthContext) -> Result<Self, BackendError> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .build()?;

        Ok(Self {
            inner: Arc::new(BackendClientInner {
                client,
                base_url: config.api_base_url.clone(),
                auth,
            }),
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, BackendError> {
        Ok(self.inner.base_url.join(path)?)
    }

    /// Issue a GET and return the response body as raw JSON.
    async fn get_json(&self, path: &str) -> Result<Value, BackendError> {
        let url = self.endpoint(path)?;
        let response = self
            .inner
            .client
            .get(url)
            .header("Authorization", self.inner.auth.header_value())
            .header("Content-Type", "application/json")
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(BackendError::Status {
                status,
                body: text.chars().take(200).collect(),
            });
        }

        Ok(serde_json::from_str(&text)?)
    }

    /// Issue a POST with a JSON body, discarding any success payload.
    async fn post_json(&self, path: &str, body: &Value) -> Result<(), BackendError> {
        let url = self.endpoint(path)?;
        let response = self
            .inner
            .client
            .post(url)
            .header("Authorization", self.inner.auth.header_value())
            .json(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status,
                body: text.chars().take(200).collect(),
            });
        }

        Ok(())
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the signed-in user's cart rows.
    ///
    /// Normalizes the two payload shapes seen in the wild (bare list and
    /// `{"data": [...]}`); malformed rows are dropped, not fatal.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with
    /// a non-success status.
    #[instrument(skip(self))]
    pub async fn get_cart(&self) -> Result<Vec<LineItem>, BackendError> {
        let payload = self.get_json("/api/get_cart/").await?;
        Ok(payload::cart_items_from_payload(payload))
    }

    /// Fetch the cart item count for the header badge.
    ///
    /// Accepts the `{"count": n}` shape as well as a plain row list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with
    /// a non-success status.
    #[instrument(skip(self))]
    pub async fn cart_count(&self) -> Result<u32, BackendError> {
        let payload = self.get_json("/api/get_cart/").await?;
        Ok(payload::badge_count_from_payload(&payload))
    }

    /// Add a product to the server-side cart.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend rejects it
    /// (e.g. the visitor is not signed in).
    #[instrument(skip(self), fields(product_id = %product_id))]
    pub async fn add_to_cart(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<(), BackendError> {
        let body = serde_json::json!({
            "product_id": product_id,
            "quantity": quantity,
        });
        self.post_json("/api/add_to_cart/", &body).await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order from a checkout submission.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the backend answers with
    /// a non-success status; the caller keeps the checkout dialog open so
    /// the user can retry manually.
    #[instrument(skip_all)]
    pub async fn create_order(&self, submission: &CheckoutSubmission) -> Result<(), BackendError> {
        let body = serde_json::to_value(submission)?;
        self.post_json("/api/create_order/", &body).await
    }

    /// Fetch the user's order history, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails, the backend answers with a
    /// non-success status, or the payload does not parse.
    #[instrument(skip(self))]
    pub async fn get_orders(&self) -> Result<Vec<Order>, BackendError> {
        let payload = self.get_json("/api/getOrders/").await?;
        let mut orders: Vec<Order> = serde_json::from_value(payload)?;
        payload::sort_newest_first(&mut orders);
        Ok(orders)
    }
}
