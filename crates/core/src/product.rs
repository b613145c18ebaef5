//! The product record and its enumerated fields.
//!
//! Wire format matches the upstream products API: single-word fields are
//! lowercase, timestamps are camelCase ISO-8601 strings, and prices travel
//! as JSON numbers.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Product category.
///
/// Serialized with capitalized names (`"Kitchen"`, `"Electronics"`, ...),
/// matching the upstream API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Kitchen,
    Electronics,
    Garden,
    Construction,
    Sports,
    Clothing,
}

impl Category {
    /// All categories, in display order.
    pub const ALL: [Self; 6] = [
        Self::Kitchen,
        Self::Electronics,
        Self::Garden,
        Self::Construction,
        Self::Sports,
        Self::Clothing,
    ];

    /// The wire/display name, e.g. `"Electronics"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Kitchen => "Kitchen",
            Self::Electronics => "Electronics",
            Self::Garden => "Garden",
            Self::Construction => "Construction",
            Self::Sports => "Sports",
            Self::Clothing => "Clothing",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Kitchen" => Ok(Self::Kitchen),
            "Electronics" => Ok(Self::Electronics),
            "Garden" => Ok(Self::Garden),
            "Construction" => Ok(Self::Construction),
            "Sports" => Ok(Self::Sports),
            "Clothing" => Ok(Self::Clothing),
            _ => Err(format!("invalid category: {s}")),
        }
    }
}

/// Product availability status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    #[default]
    Active,
    Inactive,
}

impl Status {
    /// All statuses, in display order.
    pub const ALL: [Self; 2] = [Self::Active, Self::Inactive];

    /// The wire name, e.g. `"active"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }

    /// Capitalized label for display, e.g. `"Active"`.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Active => "Active",
            Self::Inactive => "Inactive",
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(Self::Active),
            "inactive" => Ok(Self::Inactive),
            _ => Err(format!("invalid status: {s}")),
        }
    }
}

/// The canonical product record.
///
/// Records are created by the server on a create request or fetched from its
/// list/detail endpoints; the client only invents temporary placeholder ids
/// (see [`crate::mapper::generate_temp_id`]) that the server discards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Opaque identifier, unique, assigned by the server.
    pub id: String,
    /// Display name.
    pub name: String,
    pub category: Category,
    /// Non-negative, currency-agnostic magnitude. A JSON number on the wire.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    pub stock: u32,
    /// Free text, may be empty.
    #[serde(default)]
    pub description: String,
    /// Image URL, may be empty.
    #[serde(default)]
    pub image: String,
    pub status: Status,
    /// Set once at creation, preserved across updates.
    pub created_at: DateTime<Utc>,
    /// Refreshed on every update. Never earlier than `created_at`.
    pub updated_at: DateTime<Utc>,
}

/// Create/update form input, prior to validation and stamping.
///
/// All fields are strings as submitted by the form; the mapper validates the
/// enumerated fields and coerces `price`/`stock` to their numeric types.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub category: String,
    pub price: String,
    pub stock: String,
    pub description: String,
    pub image: String,
    pub status: String,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            category: product.category.as_str().to_string(),
            price: product.price.to_string(),
            stock: product.stock.to_string(),
            description: product.description.clone(),
            image: product.image.clone(),
            status: product.status.as_str().to_string(),
        }
    }
}
