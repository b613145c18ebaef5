//! Dashboard page handler.
//!
//! The dashboard is a single server-rendered page. Search and sort state
//! live in the query string, so every view of the list is a bookmarkable
//! URL and the column links just point at the next state.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::Redirect,
};
use serde::Deserialize;
use tracing::instrument;

use stockdesk_core::{Product, SortDirection, SortField, SortState, derive_view};

use crate::filters;
use crate::state::AppState;

/// Dashboard query parameters.
///
/// `sort` and `dir` stay raw strings here so a stale or hand-edited URL
/// falls back to the default view instead of a 400 rejection.
#[derive(Debug, Deserialize)]
pub struct DashboardQuery {
    /// Search term, matched against name, category and description.
    pub q: Option<String>,
    pub sort: Option<String>,
    pub dir: Option<String>,
    /// One-shot flash message carried over a redirect.
    pub message: Option<String>,
    pub severity: Option<String>,
}

/// Flash banner data.
pub struct Flash {
    pub message: String,
    pub severity: &'static str,
}

/// Sortable column header data.
pub struct ColumnHeader {
    pub label: &'static str,
    pub href: String,
    pub indicator: &'static str,
}

/// Dashboard page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
pub struct DashboardTemplate {
    pub is_initial_loading: bool,
    pub is_loading: bool,
    pub store_error: Option<String>,
    pub flash: Option<Flash>,
    pub search_term: String,
    pub sort: SortState,
    pub columns: Vec<ColumnHeader>,
    pub products: Vec<Product>,
    pub total_count: usize,
}

const COLUMNS: [(SortField, &str); 5] = [
    (SortField::Name, "Product Name"),
    (SortField::Category, "Category"),
    (SortField::Stock, "Stock Levels"),
    (SortField::Price, "Price"),
    (SortField::Status, "Status"),
];

fn build_columns(search_term: &str, current: SortState) -> Vec<ColumnHeader> {
    COLUMNS
        .iter()
        .map(|&(field, label)| {
            let next = current.toggle(field);
            let mut href = format!("/?sort={}&dir={}", field.as_str(), next.direction.as_str());
            if !search_term.is_empty() {
                href.push_str("&q=");
                href.push_str(&urlencoding::encode(search_term));
            }
            let indicator = if current.field == field {
                match current.direction {
                    SortDirection::Asc => "\u{2191}",
                    SortDirection::Desc => "\u{2193}",
                }
            } else {
                ""
            };
            ColumnHeader {
                label,
                href,
                indicator,
            }
        })
        .collect()
}

fn flash_from(message: Option<String>, severity: Option<&str>) -> Option<Flash> {
    // Severity is attacker-controlled query input; only known values pass
    // through to the template as a CSS class.
    message.map(|message| Flash {
        message,
        severity: if severity == Some("error") {
            "error"
        } else {
            "success"
        },
    })
}

/// Dashboard page handler.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> DashboardTemplate {
    let store = state.store();
    let all_products = store.products().await;

    let search_term = query.q.unwrap_or_default();
    let sort = SortState {
        field: query.sort.and_then(|f| f.parse().ok()).unwrap_or_default(),
        direction: query.dir.and_then(|d| d.parse().ok()).unwrap_or_default(),
    };

    let products: Vec<Product> = derive_view(&all_products, &search_term, sort)
        .into_iter()
        .cloned()
        .collect();
    let columns = build_columns(&search_term, sort);

    DashboardTemplate {
        is_initial_loading: store.is_initial_loading(),
        is_loading: store.is_loading(),
        store_error: store.error().await,
        flash: flash_from(query.message, query.severity.as_deref()),
        search_term,
        sort,
        columns,
        products,
        total_count: all_products.len(),
    }
}

/// Reload the product list from the API, then return to the dashboard.
#[instrument(skip(state))]
pub async fn refresh(State(state): State<AppState>) -> Redirect {
    state.store().refetch().await;
    Redirect::to("/")
}
