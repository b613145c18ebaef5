//! Integration tests for Stockdesk.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p stockdesk-integration-tests
//! ```
//!
//! No live services are required: each test starts an in-process `httpmock`
//! server standing in for the upstream products API and drives the dashboard
//! router directly with `tower::ServiceExt::oneshot`.
//!
//! # Test Categories
//!
//! - `dashboard_pages` - Dashboard rendering states (loading, error, empty, table)
//! - `product_crud` - Create/read/update/delete flows through the pages
//! - `search_sort` - Search and sort behavior over a seeded catalog

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use tower::ServiceExt;
use url::Url;

use stockdesk_dashboard::config::DashboardConfig;
use stockdesk_dashboard::routes;
use stockdesk_dashboard::state::AppState;

// =============================================================================
// Application Setup
// =============================================================================

/// Build a dashboard config pointing at a mock upstream API.
#[must_use]
pub fn test_config(products_api_url: &str) -> DashboardConfig {
    DashboardConfig {
        products_api_url: Url::parse(products_api_url).expect("Invalid products API URL"),
        host: "127.0.0.1".parse().expect("Invalid host"),
        port: 0,
        sentry_dsn: None,
        sentry_environment: None,
    }
}

/// Build a state whose store has already settled its first load.
pub async fn ready_state(products_api_url: &str) -> AppState {
    let state = AppState::new(test_config(products_api_url));
    state.store().initialize().await;
    state
}

/// Build the page router backed by `state`.
#[must_use]
pub fn app(state: &AppState) -> Router {
    routes::routes().with_state(state.clone())
}

// =============================================================================
// Request Helpers
// =============================================================================

/// A collected page response with the pieces tests assert on.
pub struct PageResponse {
    pub status: StatusCode,
    /// Value of the `Location` header, if the response was a redirect.
    pub location: Option<String>,
    pub body: String,
}

impl PageResponse {
    /// Assert the body contains `needle`, with a readable failure message.
    ///
    /// # Panics
    ///
    /// Panics if the needle is absent.
    pub fn assert_contains(&self, needle: &str) {
        assert!(
            self.body.contains(needle),
            "expected page to contain {needle:?}"
        );
    }
}

/// Send a GET request to the router and collect the response.
pub async fn get_page(app: &Router, uri: &str) -> PageResponse {
    let request = Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request");
    send(app, request).await
}

/// Send a URL-encoded form POST to the router and collect the response.
pub async fn post_form(app: &Router, uri: &str, body: &str) -> PageResponse {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request");
    send(app, request).await
}

async fn send(app: &Router, request: Request<Body>) -> PageResponse {
    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Router request failed");
    let status = response.status();
    let location = response
        .headers()
        .get(header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .map(ToString::to_string);
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read response body");

    PageResponse {
        status,
        location,
        body: String::from_utf8_lossy(&bytes).into_owned(),
    }
}

// =============================================================================
// Upstream Wire Fixtures
// =============================================================================

fn record(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    stock: u32,
    description: &str,
    image: &str,
    created_at: &str,
) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "name": name,
        "category": category,
        "price": price,
        "stock": stock,
        "description": description,
        "image": image,
        "status": "active",
        "createdAt": created_at,
        "updatedAt": created_at,
    })
}

/// A minimal product record as the upstream REST API returns it.
///
/// Description and image are empty; tests that care set them on the returned
/// value directly.
#[must_use]
pub fn wire_product(
    id: &str,
    name: &str,
    category: &str,
    price: f64,
    stock: u32,
) -> serde_json::Value {
    record(id, name, category, price, stock, "", "", "2024-01-15T10:00:00.000Z")
}

/// The three-product sample catalog used by the page tests.
///
/// Mirrors the `sd-cli seed` fixtures so rendered pages show realistic data.
#[must_use]
pub fn seed_catalog() -> serde_json::Value {
    serde_json::json!([
        record(
            "1",
            "Wireless Bluetooth Headphones",
            "Electronics",
            79.99,
            25,
            "High-quality wireless headphones with noise cancellation and 30-hour battery life. \
             Perfect for music lovers and professionals.",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
            "2024-01-15T10:00:00.000Z",
        ),
        record(
            "2",
            "Organic Cotton T-Shirt",
            "Clothing",
            24.99,
            50,
            "Comfortable and sustainable organic cotton t-shirt available in multiple colors. \
             Made with eco-friendly materials.",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
            "2024-01-14T09:30:00.000Z",
        ),
        record(
            "3",
            "Smart Home Security Camera",
            "Electronics",
            149.99,
            8,
            "1080p HD security camera with night vision, motion detection, and mobile app \
             integration. Easy installation and setup.",
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=400",
            "2024-01-13T14:20:00.000Z",
        ),
    ])
}
