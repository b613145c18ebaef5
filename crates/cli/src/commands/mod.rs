//! CLI command implementations.

pub mod purge;
pub mod seed;

use stockdesk_dashboard::api::ProductsApi;

/// Build a products API client from `PRODUCTS_API_URL`.
///
/// # Errors
///
/// Returns an error if the environment variable is not set.
pub fn api_from_env() -> Result<ProductsApi, Box<dyn std::error::Error>> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let base_url = std::env::var("PRODUCTS_API_URL").map_err(|_| "PRODUCTS_API_URL not set")?;

    Ok(ProductsApi::new(&base_url))
}
