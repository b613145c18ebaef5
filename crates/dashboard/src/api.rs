//! HTTP client for the upstream products REST API.
//!
//! Thin typed wrapper over `reqwest` for the five collection operations:
//! list, get-by-id, create, update, delete. Owns no state; each call is a
//! single request with the transport/HTTP failure propagated unchanged (no
//! retries, no caching).

use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;
use tracing::instrument;

use stockdesk_core::Product;

/// Errors that can occur when talking to the products API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The requested id does not exist.
    #[error("Product not found: {0}")]
    NotFound(String),

    /// Non-2xx response that is not a not-found.
    #[error("HTTP {status}: {body}")]
    Upstream { status: StatusCode, body: String },
}

/// Client for the products REST API.
///
/// Cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct ProductsApi {
    inner: Arc<ProductsApiInner>,
}

struct ProductsApiInner {
    client: reqwest::Client,
    base_url: String,
}

impl ProductsApi {
    /// Create a new products API client for the given base URL.
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            inner: Arc::new(ProductsApiInner {
                client: reqwest::Client::new(),
                base_url: base_url.trim_end_matches('/').to_string(),
            }),
        }
    }

    fn collection_url(&self) -> String {
        format!("{}/products", self.inner.base_url)
    }

    fn record_url(&self, id: &str) -> String {
        format!("{}/products/{id}", self.inner.base_url)
    }

    /// Fetch the full product list.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not parse.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Product>, ApiError> {
        let response = self.inner.client.get(self.collection_url()).send().await?;
        read_json(response, None).await
    }

    /// Fetch a single product by id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id does not exist.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn get(&self, id: &str) -> Result<Product, ApiError> {
        let response = self.inner.client.get(self.record_url(id)).send().await?;
        read_json(response, Some(id)).await
    }

    /// Create a product from a full draft record.
    ///
    /// The record carries a client-chosen placeholder id; the server
    /// discards it and returns the confirmed record with the permanent id.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response does not parse.
    #[instrument(skip(self, record), fields(name = %record.name))]
    pub async fn create(&self, record: &Product) -> Result<Product, ApiError> {
        let response = self
            .inner
            .client
            .post(self.collection_url())
            .json(record)
            .send()
            .await?;
        read_json(response, None).await
    }

    /// Replace a product with a full record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id does not exist.
    #[instrument(skip(self, record), fields(id = %id))]
    pub async fn update(&self, id: &str, record: &Product) -> Result<Product, ApiError> {
        let response = self
            .inner
            .client
            .put(self.record_url(id))
            .json(record)
            .send()
            .await?;
        read_json(response, Some(id)).await
    }

    /// Delete a product. The server returns no body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotFound`] if the id does not exist.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), ApiError> {
        let response = self.inner.client.delete(self.record_url(id)).send().await?;
        let status = response.status();

        if status == StatusCode::NOT_FOUND {
            return Err(ApiError::NotFound(id.to_string()));
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                status = %status,
                body = %truncate(&body, 500),
                "Products API returned non-success status"
            );
            return Err(ApiError::Upstream {
                status,
                body: truncate(&body, 200),
            });
        }

        Ok(())
    }
}

/// Read a response body as JSON, mapping 404 and other non-success statuses
/// to their error variants. `not_found_id` names the record a 404 refers
/// to, where one applies.
async fn read_json<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
    not_found_id: Option<&str>,
) -> Result<T, ApiError> {
    let status = response.status();

    if status == StatusCode::NOT_FOUND
        && let Some(id) = not_found_id
    {
        return Err(ApiError::NotFound(id.to_string()));
    }

    // Get the body as text first for better error diagnostics
    let body = response.text().await?;

    if !status.is_success() {
        tracing::error!(
            status = %status,
            body = %truncate(&body, 500),
            "Products API returned non-success status"
        );
        return Err(ApiError::Upstream {
            status,
            body: truncate(&body, 200),
        });
    }

    match serde_json::from_str(&body) {
        Ok(value) => Ok(value),
        Err(e) => {
            tracing::error!(
                error = %e,
                body = %truncate(&body, 500),
                "Failed to parse products API response"
            );
            Err(ApiError::Parse(e))
        }
    }
}

fn truncate(body: &str, limit: usize) -> String {
    body.chars().take(limit).collect()
}
