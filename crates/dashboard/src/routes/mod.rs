//! HTTP route handlers for the dashboard.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Product dashboard (search + sort via query params)
//! POST /refresh                - Reload the product list from the API
//! GET  /health                 - Health check
//!
//! # Products
//! GET  /products/new           - New product form
//! POST /products               - Create product
//! GET  /products/{id}          - Product detail
//! POST /products/{id}          - Update product
//! GET  /products/{id}/edit     - Edit product form
//! POST /products/{id}/delete   - Delete product
//! ```

pub mod dashboard;
pub mod products;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the product routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(products::create))
        .route("/new", get(products::new_product))
        .route("/{id}", get(products::show).post(products::update))
        .route("/{id}/edit", get(products::edit))
        .route("/{id}/delete", post(products::destroy))
}

/// Create the main application router (without middleware layers).
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(dashboard::index))
        .route("/refresh", post(dashboard::refresh))
        .nest("/products", product_routes())
}

/// Redirect to `path` with a flash message in the query string.
///
/// The dashboard page picks the message up and renders it as a banner.
fn flash_redirect(path: &str, message: &str, severity: &str) -> Redirect {
    let url = format!(
        "{path}?message={}&severity={}",
        urlencoding::encode(message),
        urlencoding::encode(severity)
    );
    Redirect::to(&url)
}
