//! Search and sort behavior over a seeded catalog.
//!
//! The catalog has three products (two Electronics, one Clothing) with
//! distinct prices and stock levels, so each test can tell filtering,
//! ordering, and tie-breaking apart by row positions in the rendered table.

use axum::http::StatusCode;
use httpmock::prelude::*;

use stockdesk_dashboard::state::AppState;
use stockdesk_integration_tests::{app, get_page, ready_state, seed_catalog};

const HEADPHONES: &str = "Wireless Bluetooth Headphones";
const TSHIRT: &str = "Organic Cotton T-Shirt";
const CAMERA: &str = "Smart Home Security Camera";

async fn seeded_state(server: &MockServer) -> AppState {
    server.mock(|when, then| {
        when.method(GET).path("/products");
        then.status(200).json_body(seed_catalog());
    });
    ready_state(&server.base_url()).await
}

fn position(body: &str, needle: &str) -> usize {
    body.find(needle)
        .unwrap_or_else(|| panic!("expected page to contain {needle:?}"))
}

// =============================================================================
// Search
// =============================================================================

#[tokio::test]
async fn test_search_matches_name_case_insensitively() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/?q=WIRELESS").await;

    page.assert_contains(HEADPHONES);
    assert!(!page.body.contains(TSHIRT));
    assert!(!page.body.contains(CAMERA));
    page.assert_contains("1 of 3 products");
}

#[tokio::test]
async fn test_search_matches_category_and_description() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;
    let router = app(&state);

    // Category match.
    let page = get_page(&router, "/?q=electronics").await;
    page.assert_contains(HEADPHONES);
    page.assert_contains(CAMERA);
    assert!(!page.body.contains(TSHIRT));
    page.assert_contains("2 of 3 products");

    // Description match ("eco-friendly" only appears in the t-shirt copy).
    let page = get_page(&router, "/?q=eco-friendly").await;
    page.assert_contains(TSHIRT);
    assert!(!page.body.contains(HEADPHONES));
    page.assert_contains("1 of 3 products");
}

#[tokio::test]
async fn test_search_without_match_shows_empty_state() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/?q=zzz").await;

    page.assert_contains("No matching products");
    page.assert_contains("No products match &quot;zzz&quot;.");
    page.assert_contains("0 of 3 products");
    assert!(!page.body.contains("<tbody>"));
}

// =============================================================================
// Sort
// =============================================================================

#[tokio::test]
async fn test_default_sort_is_name_ascending() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/").await;

    let organic = position(&page.body, TSHIRT);
    let smart = position(&page.body, CAMERA);
    let wireless = position(&page.body, HEADPHONES);
    assert!(organic < smart && smart < wireless);

    // The active column flips on the next click; the others reset to asc.
    page.assert_contains(r#"href="/?sort=name&amp;dir=desc""#);
    page.assert_contains(r#"href="/?sort=price&amp;dir=asc""#);
    page.assert_contains(r#"Product Name <span class="sort-indicator">↑</span>"#);
}

#[tokio::test]
async fn test_unknown_sort_tokens_fall_back_to_default_view() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    // Stale bookmarks and hand-edited URLs render the default view, not a 400.
    let page = get_page(&app(&state), "/?sort=priciest&dir=sideways").await;

    assert_eq!(page.status, StatusCode::OK);
    page.assert_contains("3 of 3 products");
    let organic = position(&page.body, TSHIRT);
    let smart = position(&page.body, CAMERA);
    let wireless = position(&page.body, HEADPHONES);
    assert!(organic < smart && smart < wireless);
    page.assert_contains(r#"Product Name <span class="sort-indicator">↑</span>"#);
}

#[tokio::test]
async fn test_sort_by_price_ascending_and_descending() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;
    let router = app(&state);

    let page = get_page(&router, "/?sort=price&dir=asc").await;
    let tshirt = position(&page.body, TSHIRT);
    let headphones = position(&page.body, HEADPHONES);
    let camera = position(&page.body, CAMERA);
    assert!(tshirt < headphones && headphones < camera);
    page.assert_contains(r#"Price <span class="sort-indicator">↑</span>"#);
    page.assert_contains(r#"href="/?sort=price&amp;dir=desc""#);

    let page = get_page(&router, "/?sort=price&dir=desc").await;
    let tshirt = position(&page.body, TSHIRT);
    let headphones = position(&page.body, HEADPHONES);
    let camera = position(&page.body, CAMERA);
    assert!(camera < headphones && headphones < tshirt);
    page.assert_contains(r#"Price <span class="sort-indicator">↓</span>"#);
    page.assert_contains(r#"href="/?sort=price&amp;dir=asc""#);
}

#[tokio::test]
async fn test_sort_by_stock_compares_numerically() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    // Stocks are 8, 25, 50; a lexicographic sort would put 8 last.
    let page = get_page(&app(&state), "/?sort=stock&dir=asc").await;

    let camera = position(&page.body, CAMERA);
    let headphones = position(&page.body, HEADPHONES);
    let tshirt = position(&page.body, TSHIRT);
    assert!(camera < headphones && headphones < tshirt);
}

#[tokio::test]
async fn test_sort_by_category_keeps_tied_rows_in_input_order() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/?sort=category&dir=asc").await;

    // Clothing first, then the two Electronics rows in catalog order.
    let tshirt = position(&page.body, TSHIRT);
    let headphones = position(&page.body, HEADPHONES);
    let camera = position(&page.body, CAMERA);
    assert!(tshirt < headphones && headphones < camera);
}

// =============================================================================
// Combined
// =============================================================================

#[tokio::test]
async fn test_search_and_sort_combine() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/?q=electronics&sort=price&dir=desc").await;

    page.assert_contains("2 of 3 products");
    assert!(!page.body.contains(TSHIRT));
    let camera = position(&page.body, CAMERA);
    let headphones = position(&page.body, HEADPHONES);
    assert!(camera < headphones);
}

#[tokio::test]
async fn test_seeded_catalog_walkthrough() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;
    let router = app(&state);

    // Searching "wireless" yields exactly the headphones.
    let page = get_page(&router, "/?q=wireless").await;
    page.assert_contains("1 of 3 products");
    page.assert_contains(HEADPHONES);

    // Sorting by price ascending puts the price cells in order.
    let page = get_page(&router, "/?sort=price&dir=asc").await;
    let cheap = position(&page.body, "€24.99");
    let mid = position(&page.body, "€79.99");
    let dear = position(&page.body, "€149.99");
    assert!(cheap < mid && mid < dear);

    // Clicking the name header while already on name/asc flips to
    // descending, which starts with the headphones.
    let page = get_page(&router, "/").await;
    page.assert_contains(r#"href="/?sort=name&amp;dir=desc""#);
    let page = get_page(&router, "/?sort=name&dir=desc").await;
    let wireless = position(&page.body, HEADPHONES);
    let smart = position(&page.body, CAMERA);
    let organic = position(&page.body, TSHIRT);
    assert!(wireless < smart && smart < organic);
}

#[tokio::test]
async fn test_search_term_propagates_into_sort_links_and_form() {
    let server = MockServer::start();
    let state = seeded_state(&server).await;

    let page = get_page(&app(&state), "/?q=camera&sort=price&dir=asc").await;

    page.assert_contains(r#"href="/?sort=price&amp;dir=desc&amp;q=camera""#);
    page.assert_contains(r#"href="/?sort=name&amp;dir=asc&amp;q=camera""#);
    // The search form carries the current sort in hidden fields.
    page.assert_contains(r#"name="sort" value="price""#);
    page.assert_contains(r#"name="dir" value="asc""#);
    page.assert_contains(r#"value="camera""#);
}
