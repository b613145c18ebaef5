//! Product form and detail route handlers.
//!
//! Create and update failures re-render the form with the message inline,
//! so typed input survives a rejected submit. Successful mutations redirect
//! to the dashboard with a flash message.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use tracing::instrument;

use stockdesk_core::{Category, Product, ProductDraft, Status};

use crate::api::ApiError;
use crate::error::{AppError, Result};
use crate::filters;
use crate::state::AppState;
use crate::store::StoreError;

use super::flash_redirect;

/// Status select option data.
pub struct StatusOption {
    pub value: String,
    pub label: String,
}

fn category_options() -> Vec<String> {
    Category::ALL.iter().map(|c| c.as_str().to_string()).collect()
}

fn status_options() -> Vec<StatusOption> {
    Status::ALL
        .iter()
        .map(|s| StatusOption {
            value: s.as_str().to_string(),
            label: s.label().to_string(),
        })
        .collect()
}

/// New product form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/new.html")]
pub struct NewProductTemplate {
    pub draft: ProductDraft,
    pub error: Option<String>,
    pub categories: Vec<String>,
    pub statuses: Vec<StatusOption>,
    pub form_action: String,
    pub submit_label: &'static str,
}

/// Edit product form template.
#[derive(Template, WebTemplate)]
#[template(path = "products/edit.html")]
pub struct EditProductTemplate {
    pub id: String,
    pub draft: ProductDraft,
    pub error: Option<String>,
    pub categories: Vec<String>,
    pub statuses: Vec<StatusOption>,
    pub form_action: String,
    pub submit_label: &'static str,
}

/// Product detail page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/show.html")]
pub struct ProductShowTemplate {
    pub product: Product,
}

/// Unknown product page template.
#[derive(Template, WebTemplate)]
#[template(path = "products/not_found.html")]
pub struct ProductNotFoundTemplate {
    pub id: String,
}

fn new_form(draft: ProductDraft, error: Option<String>) -> NewProductTemplate {
    NewProductTemplate {
        draft,
        error,
        categories: category_options(),
        statuses: status_options(),
        form_action: "/products".to_string(),
        submit_label: "Create product",
    }
}

fn edit_form(id: String, draft: ProductDraft, error: Option<String>) -> EditProductTemplate {
    EditProductTemplate {
        form_action: format!("/products/{id}"),
        id,
        draft,
        error,
        categories: category_options(),
        statuses: status_options(),
        submit_label: "Save changes",
    }
}

fn not_found_page(id: String) -> Response {
    (StatusCode::NOT_FOUND, ProductNotFoundTemplate { id }).into_response()
}

/// New product form handler.
#[instrument(skip(_state))]
pub async fn new_product(State(_state): State<AppState>) -> NewProductTemplate {
    let draft = ProductDraft {
        status: Status::Active.as_str().to_string(),
        ..ProductDraft::default()
    };
    new_form(draft, None)
}

/// Create product handler.
///
/// POST /products
#[instrument(skip(state, draft), fields(name = %draft.name))]
pub async fn create(
    State(state): State<AppState>,
    Form(draft): Form<ProductDraft>,
) -> Response {
    match state.store().create(&draft).await {
        Ok(product) => {
            tracing::info!(id = %product.id, "Created product");
            flash_redirect("/", "Product created successfully!", "success").into_response()
        }
        Err(e) => {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                new_form(draft, Some(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Product detail page handler.
///
/// GET /products/{id}
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    match state.api().get(&id).await {
        Ok(product) => Ok(ProductShowTemplate { product }.into_response()),
        Err(ApiError::NotFound(_)) => Ok(not_found_page(id)),
        Err(e) => Err(AppError::Api(e)),
    }
}

/// Edit product form handler.
///
/// GET /products/{id}/edit
#[instrument(skip(state))]
pub async fn edit(State(state): State<AppState>, Path(id): Path<String>) -> Result<Response> {
    match state.api().get(&id).await {
        Ok(product) => {
            let draft = ProductDraft::from(&product);
            Ok(edit_form(id, draft, None).into_response())
        }
        Err(ApiError::NotFound(_)) => Ok(not_found_page(id)),
        Err(e) => Err(AppError::Api(e)),
    }
}

/// Update product handler.
///
/// POST /products/{id}
#[instrument(skip(state, draft), fields(id = %id))]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Form(draft): Form<ProductDraft>,
) -> Response {
    match state.store().update(&id, &draft).await {
        Ok(product) => {
            tracing::info!(id = %product.id, "Updated product");
            flash_redirect("/", "Product updated successfully!", "success").into_response()
        }
        Err(StoreError::Api(ApiError::NotFound(_))) => not_found_page(id),
        Err(e) => {
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                edit_form(id, draft, Some(e.to_string())),
            )
                .into_response()
        }
    }
}

/// Delete product handler.
///
/// POST /products/{id}/delete
#[instrument(skip(state))]
pub async fn destroy(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    match state.store().delete(&id).await {
        Ok(()) => {
            tracing::info!(id = %id, "Deleted product");
            flash_redirect("/", "Product deleted successfully", "success")
        }
        // The dashboard renders the recorded store error as a banner.
        Err(_) => Redirect::to("/"),
    }
}
