//! Seed the products API with the sample catalog.
//!
//! Goes through the same validation and temp-id path as the dashboard's
//! create form, so seeded records look exactly like user-created ones.

use tracing::info;

use stockdesk_core::{ProductDraft, generate_temp_id, product_from_create};

use super::{api_from_env, purge};

fn draft(
    name: &str,
    category: &str,
    price: &str,
    stock: &str,
    description: &str,
    image: &str,
) -> ProductDraft {
    ProductDraft {
        name: name.to_string(),
        category: category.to_string(),
        price: price.to_string(),
        stock: stock.to_string(),
        description: description.to_string(),
        image: image.to_string(),
        status: "active".to_string(),
    }
}

/// The sample catalog loaded by `sd-cli seed`.
fn sample_catalog() -> Vec<ProductDraft> {
    vec![
        draft(
            "Wireless Bluetooth Headphones",
            "Electronics",
            "79.99",
            "25",
            "High-quality wireless headphones with noise cancellation and 30-hour battery life. \
             Perfect for music lovers and professionals.",
            "https://images.unsplash.com/photo-1505740420928-5e560c06d30e?w=400",
        ),
        draft(
            "Organic Cotton T-Shirt",
            "Clothing",
            "24.99",
            "50",
            "Comfortable and sustainable organic cotton t-shirt available in multiple colors. \
             Made with eco-friendly materials.",
            "https://images.unsplash.com/photo-1521572163474-6864f9cf17ab?w=400",
        ),
        draft(
            "Smart Home Security Camera",
            "Electronics",
            "149.99",
            "8",
            "1080p HD security camera with night vision, motion detection, and mobile app \
             integration. Easy installation and setup.",
            "https://images.unsplash.com/photo-1558002038-1055907df827?w=400",
        ),
    ]
}

/// Seed the products API with the sample catalog.
///
/// # Arguments
///
/// * `fresh` - If true, delete existing products first
///
/// # Errors
///
/// Returns an error if `PRODUCTS_API_URL` is missing, a draft fails
/// validation, or an API call fails.
pub async fn run(fresh: bool) -> Result<(), Box<dyn std::error::Error>> {
    let api = api_from_env()?;

    if fresh {
        purge::clear_all(&api).await?;
    }

    let catalog = sample_catalog();
    info!(count = catalog.len(), "Seeding sample catalog");

    let mut created = 0_usize;
    for item in &catalog {
        let record = product_from_create(item, generate_temp_id())?;
        let product = api.create(&record).await?;
        info!(id = %product.id, name = %product.name, "Created product");
        created += 1;
    }

    info!("Seeding complete!");
    info!("  Products created: {created}");

    Ok(())
}
