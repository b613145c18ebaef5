//! Draft validation, numeric coercion, and timestamp stamping.
//!
//! Converts raw create/update form input into a fully-formed [`Product`]
//! record. Validation failures are wrapped with a prefix identifying the
//! mapping path, but the original message always survives as a substring so
//! callers can match on fragments like `"Invalid category"`.

use chrono::{DateTime, Utc};
use rand::Rng;
use rust_decimal::Decimal;
use thiserror::Error;

use crate::product::{Category, Product, ProductDraft, Status};

/// Field-level validation failure inside the mapper.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error(
        "Invalid category: {0}. Valid categories are: Kitchen, Electronics, Garden, Construction, Sports, Clothing"
    )]
    Category(String),

    #[error("Invalid status: {0}. Valid statuses are: active, inactive")]
    Status(String),

    /// Price did not parse as a non-negative decimal.
    #[error("Invalid price: {0}")]
    Price(String),

    /// Stock did not parse as a non-negative integer.
    #[error("Invalid stock: {0}")]
    Stock(String),
}

/// Error mapping a draft into a product record.
///
/// The variant records which mapping path failed; the inner
/// [`ValidationError`] message is preserved verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapperError {
    #[error("Error mapping product data: {0}")]
    Create(ValidationError),

    #[error("Error mapping update product data: {0}")]
    Update(ValidationError),
}

/// Build a full product record from a create draft.
///
/// Trims `name`/`description`/`image`, validates the enumerated fields,
/// coerces `price`/`stock`, and stamps both timestamps to now (so
/// `created_at == updated_at` on a fresh record). The caller supplies the
/// id, normally a placeholder from [`generate_temp_id`] that the server
/// replaces.
///
/// # Errors
///
/// Returns [`MapperError::Create`] wrapping the field that failed
/// validation.
pub fn product_from_create(
    draft: &ProductDraft,
    id: impl Into<String>,
) -> Result<Product, MapperError> {
    map_draft(draft, id.into(), None).map_err(MapperError::Create)
}

/// Build a full product record from an update draft.
///
/// Same validation and trimming as the create path. `created_at` carries
/// the original creation time forward; pass `None` when it is unknown and
/// the record is stamped as created now. `updated_at` is always stamped to
/// now.
///
/// # Errors
///
/// Returns [`MapperError::Update`] wrapping the field that failed
/// validation.
pub fn product_from_update(
    draft: &ProductDraft,
    id: impl Into<String>,
    created_at: Option<DateTime<Utc>>,
) -> Result<Product, MapperError> {
    map_draft(draft, id.into(), created_at).map_err(MapperError::Update)
}

fn map_draft(
    draft: &ProductDraft,
    id: String,
    created_at: Option<DateTime<Utc>>,
) -> Result<Product, ValidationError> {
    let category = draft
        .category
        .parse::<Category>()
        .map_err(|_| ValidationError::Category(draft.category.clone()))?;
    let status = draft
        .status
        .parse::<Status>()
        .map_err(|_| ValidationError::Status(draft.status.clone()))?;
    let price = parse_price(&draft.price)?;
    let stock = parse_stock(&draft.stock)?;

    let now = Utc::now();

    Ok(Product {
        id,
        name: draft.name.trim().to_string(),
        category,
        price,
        stock,
        description: draft.description.trim().to_string(),
        image: draft.image.trim().to_string(),
        status,
        created_at: created_at.unwrap_or(now),
        updated_at: now,
    })
}

fn parse_price(value: &str) -> Result<Decimal, ValidationError> {
    let price = value
        .trim()
        .parse::<Decimal>()
        .map_err(|_| ValidationError::Price(value.to_string()))?;
    if price.is_sign_negative() {
        return Err(ValidationError::Price(value.to_string()));
    }
    Ok(price)
}

fn parse_stock(value: &str) -> Result<u32, ValidationError> {
    value
        .trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::Stock(value.to_string()))
}

/// Generate a placeholder id for a record the server has not confirmed yet.
///
/// Combines the current epoch millis with a 9-character random base36
/// suffix, which keeps collisions unlikely without coordination. The server
/// discards the placeholder and assigns the permanent id.
#[must_use]
pub fn generate_temp_id() -> String {
    let mut rng = rand::rng();
    let suffix: String = (0..9)
        .filter_map(|_| char::from_digit(rng.random_range(0..36), 36))
        .collect();
    format!("temp_{}_{suffix}", Utc::now().timestamp_millis())
}
