//! The derived-view pipeline: search filtering and column sorting.
//!
//! Both stages are pure. The dashboard recomputes the derived view from the
//! store's canonical list on every render; nothing here caches or mutates.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::product::Product;

/// Column a product list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    #[default]
    Name,
    Category,
    Price,
    Stock,
    Status,
}

impl SortField {
    /// The wire name used in query strings, e.g. `"price"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Category => "category",
            Self::Price => "price",
            Self::Stock => "stock",
            Self::Status => "status",
        }
    }
}

impl std::fmt::Display for SortField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(Self::Name),
            "category" => Ok(Self::Category),
            "price" => Ok(Self::Price),
            "stock" => Ok(Self::Stock),
            "status" => Ok(Self::Status),
            _ => Err(format!("invalid sort field: {s}")),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    /// The opposite direction.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// The wire name used in query strings, `"asc"` or `"desc"`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
        }
    }
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "asc" => Ok(Self::Asc),
            "desc" => Ok(Self::Desc),
            _ => Err(format!("invalid sort direction: {s}")),
        }
    }
}

/// Current sort selection, with click-to-toggle semantics.
///
/// Defaults to name ascending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortState {
    /// The state after clicking `field`: clicking the current field flips
    /// the direction, clicking a new field selects it ascending.
    #[must_use]
    pub fn toggle(self, field: SortField) -> Self {
        if self.field == field {
            Self {
                field,
                direction: self.direction.flipped(),
            }
        } else {
            Self {
                field,
                direction: SortDirection::Asc,
            }
        }
    }
}

/// Narrow `products` by a free-text search term.
///
/// The empty term returns the input unchanged. Otherwise a product is kept
/// when its name, category, or description contains the term
/// case-insensitively. Input order is preserved.
#[must_use]
pub fn filter_products<'a>(products: &'a [Product], term: &str) -> Vec<&'a Product> {
    if term.is_empty() {
        return products.iter().collect();
    }

    let needle = term.to_lowercase();
    products
        .iter()
        .filter(|product| {
            product.name.to_lowercase().contains(&needle)
                || product.category.as_str().to_lowercase().contains(&needle)
                || product.description.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Order `products` by the selected field and direction.
///
/// Strings compare case-insensitively, numbers numerically. The sort is
/// stable, so equal keys keep their input order. Returns a new sequence;
/// the input is not mutated.
#[must_use]
pub fn sort_products<'a>(products: &[&'a Product], state: SortState) -> Vec<&'a Product> {
    let mut sorted = products.to_vec();
    sorted.sort_by(|a, b| {
        let ordering = compare_by_field(a, b, state.field);
        match state.direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
    sorted
}

/// Full derivation: filter by `term`, then order by `state`.
#[must_use]
pub fn derive_view<'a>(products: &'a [Product], term: &str, state: SortState) -> Vec<&'a Product> {
    sort_products(&filter_products(products, term), state)
}

/// Typed accessor per sort field, so the comparator never goes through
/// stringly-typed field lookup.
fn compare_by_field(a: &Product, b: &Product, field: SortField) -> Ordering {
    match field {
        SortField::Name => compare_ci(&a.name, &b.name),
        SortField::Category => compare_ci(a.category.as_str(), b.category.as_str()),
        SortField::Price => a.price.cmp(&b.price),
        SortField::Stock => a.stock.cmp(&b.stock),
        SortField::Status => compare_ci(a.status.as_str(), b.status.as_str()),
    }
}

fn compare_ci(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use rust_decimal::Decimal;

    use super::*;
    use crate::product::{Category, Status};

    fn product(name: &str, category: Category, price: Decimal, stock: u32) -> Product {
        Product {
            id: name.to_lowercase().replace(' ', "-"),
            name: name.to_string(),
            category,
            price,
            stock,
            description: String::new(),
            image: String::new(),
            status: Status::Active,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product(
                "Wireless Bluetooth Headphones",
                Category::Electronics,
                Decimal::new(7999, 2),
                25,
            ),
            product(
                "Organic Cotton T-Shirt",
                Category::Clothing,
                Decimal::new(2499, 2),
                50,
            ),
            product(
                "Smart Home Security Camera",
                Category::Electronics,
                Decimal::new(14999, 2),
                8,
            ),
        ]
    }

    #[test]
    fn test_filter_empty_term_is_identity() {
        let products = catalog();
        let filtered = filter_products(&products, "");

        assert_eq!(filtered.len(), products.len());
        for (kept, original) in filtered.iter().zip(products.iter()) {
            assert_eq!(kept.id, original.id);
        }
    }

    #[test]
    fn test_filter_matches_name_case_insensitively() {
        let products = catalog();
        let filtered = filter_products(&products, "WIRELESS");

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered.first().unwrap().name, "Wireless Bluetooth Headphones");
    }

    #[test]
    fn test_filter_matches_category() {
        let products = catalog();
        let filtered = filter_products(&products, "electronics");

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_filter_matches_description() {
        let mut products = catalog();
        if let Some(first) = products.first_mut() {
            first.description = "Noise cancellation built in".to_string();
        }

        let filtered = filter_products(&products, "noise");
        assert_eq!(filtered.len(), 1);
    }

    #[test]
    fn test_filter_preserves_input_order() {
        let products = catalog();
        let filtered = filter_products(&products, "electronics");

        let names: Vec<&str> = filtered.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Wireless Bluetooth Headphones", "Smart Home Security Camera"]
        );
    }

    #[test]
    fn test_filter_no_match_yields_empty() {
        let products = catalog();
        assert!(filter_products(&products, "zzzz").is_empty());
    }

    #[test]
    fn test_sort_by_price_ascending() {
        let products = catalog();
        let view = derive_view(
            &products,
            "",
            SortState {
                field: SortField::Price,
                direction: SortDirection::Asc,
            },
        );

        let prices: Vec<Decimal> = view.iter().map(|p| p.price).collect();
        assert_eq!(
            prices,
            vec![
                Decimal::new(2499, 2),
                Decimal::new(7999, 2),
                Decimal::new(14999, 2)
            ]
        );
    }

    #[test]
    fn test_sort_desc_reverses_asc() {
        let products = catalog();
        let asc = derive_view(
            &products,
            "",
            SortState {
                field: SortField::Stock,
                direction: SortDirection::Asc,
            },
        );
        let desc = derive_view(
            &products,
            "",
            SortState {
                field: SortField::Stock,
                direction: SortDirection::Desc,
            },
        );

        let mut reversed: Vec<&str> = desc.iter().map(|p| p.name.as_str()).collect();
        reversed.reverse();
        let ascending: Vec<&str> = asc.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(ascending, reversed);
    }

    #[test]
    fn test_sort_names_case_insensitively() {
        let products = vec![
            product("zebra mug", Category::Kitchen, Decimal::new(500, 2), 1),
            product("Apple slicer", Category::Kitchen, Decimal::new(500, 2), 1),
        ];

        let view = derive_view(&products, "", SortState::default());
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["Apple slicer", "zebra mug"]);
    }

    #[test]
    fn test_sort_is_a_permutation() {
        let products = catalog();
        let view = derive_view(
            &products,
            "",
            SortState {
                field: SortField::Category,
                direction: SortDirection::Desc,
            },
        );

        assert_eq!(view.len(), products.len());
        for original in &products {
            assert!(view.iter().any(|p| p.id == original.id));
        }
    }

    #[test]
    fn test_sort_equal_keys_keep_input_order() {
        let products = vec![
            product("First", Category::Sports, Decimal::new(1000, 2), 5),
            product("Second", Category::Sports, Decimal::new(1000, 2), 5),
            product("Third", Category::Sports, Decimal::new(1000, 2), 5),
        ];

        let view = derive_view(
            &products,
            "",
            SortState {
                field: SortField::Price,
                direction: SortDirection::Asc,
            },
        );
        let names: Vec<&str> = view.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(names, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_toggle_same_field_flips_direction() {
        let state = SortState::default();
        let toggled = state.toggle(SortField::Name);

        assert_eq!(toggled.field, SortField::Name);
        assert_eq!(toggled.direction, SortDirection::Desc);
    }

    #[test]
    fn test_toggle_twice_restores_direction() {
        let state = SortState {
            field: SortField::Price,
            direction: SortDirection::Asc,
        };
        let twice = state.toggle(SortField::Price).toggle(SortField::Price);

        assert_eq!(twice, state);
    }

    #[test]
    fn test_toggle_new_field_resets_to_ascending() {
        let state = SortState {
            field: SortField::Name,
            direction: SortDirection::Desc,
        };
        let toggled = state.toggle(SortField::Stock);

        assert_eq!(toggled.field, SortField::Stock);
        assert_eq!(toggled.direction, SortDirection::Asc);
    }

    #[test]
    fn test_default_sort_is_name_ascending() {
        let state = SortState::default();
        assert_eq!(state.field, SortField::Name);
        assert_eq!(state.direction, SortDirection::Asc);
    }

    #[test]
    fn test_sort_tokens_round_trip() {
        for field in [
            SortField::Name,
            SortField::Category,
            SortField::Price,
            SortField::Stock,
            SortField::Status,
        ] {
            let parsed: SortField = field.as_str().parse().unwrap();
            assert_eq!(parsed, field);
        }
        for direction in [SortDirection::Asc, SortDirection::Desc] {
            let parsed: SortDirection = direction.as_str().parse().unwrap();
            assert_eq!(parsed, direction);
        }
    }

    #[test]
    fn test_sort_tokens_reject_unknown_values() {
        assert!("priciest".parse::<SortField>().is_err());
        assert!("Name".parse::<SortField>().is_err());
        assert!("sideways".parse::<SortDirection>().is_err());
    }
}
