//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use chrono::{DateTime, Utc};

/// Formats a decimal price in euros, e.g. `€79.99`.
///
/// Usage in templates: `{{ product.price|money }}`
#[askama::filter_fn]
pub fn money(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(format!("€{value:.2}"))
}

/// Formats a timestamp for table and detail views, e.g. `2024-01-15 10:00 UTC`.
///
/// Usage in templates: `{{ product.created_at|datetime }}`
#[askama::filter_fn]
pub fn datetime(value: &DateTime<Utc>, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(value.format("%Y-%m-%d %H:%M UTC").to_string())
}

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(Utc::now().year())
}

