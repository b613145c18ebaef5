//! Delete all products from the products API.

use tracing::info;

use stockdesk_dashboard::api::ProductsApi;

use super::api_from_env;

/// Delete every product. Requires explicit confirmation via `--yes`.
///
/// # Errors
///
/// Returns an error without deleting anything unless `yes` is set, or if
/// any API call fails.
pub async fn run(yes: bool) -> Result<(), Box<dyn std::error::Error>> {
    if !yes {
        return Err("purge deletes every product; pass --yes to confirm".into());
    }

    let api = api_from_env()?;
    clear_all(&api).await
}

/// Delete every product behind `api`.
///
/// # Errors
///
/// Returns an error if listing or any delete fails. Products already
/// deleted stay deleted.
pub async fn clear_all(api: &ProductsApi) -> Result<(), Box<dyn std::error::Error>> {
    let products = api.list().await?;
    info!(count = products.len(), "Deleting products");

    for product in &products {
        api.delete(&product.id).await?;
        info!(id = %product.id, name = %product.name, "Deleted product");
    }

    info!("Purge complete!");
    Ok(())
}
