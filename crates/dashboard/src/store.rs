//! Canonical in-memory product list shared by all request handlers.
//!
//! The store owns the product snapshot plus the loading/error flags the
//! pages render from. Every mutation goes through the upstream API first
//! and touches the local list only after the server confirms, so the
//! snapshot never shows state the server has not accepted.
//!
//! Load failures are recorded on the store and swallowed (pages render the
//! error banner over the last good list). Mutation failures are recorded
//! AND returned, so forms can re-render inline with the message.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::instrument;

use stockdesk_core::{Product, ProductDraft, generate_temp_id, product_from_create, product_from_update};

use crate::api::{ApiError, ProductsApi};

/// Errors surfaced by store mutations.
///
/// Both variants are transparent so the recorded message is the underlying
/// one, e.g. `Error mapping product data: Invalid category: ...`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Mapper(#[from] stockdesk_core::MapperError),

    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Shared product store.
///
/// Cheaply cloneable via `Arc`; handlers and background tasks all see the
/// same list and flags.
#[derive(Clone)]
pub struct ProductStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    api: ProductsApi,
    products: RwLock<Vec<Product>>,
    error: RwLock<Option<String>>,
    is_initial_loading: AtomicBool,
    is_loading: AtomicBool,
}

impl ProductStore {
    /// Create an empty store backed by the given API client.
    ///
    /// Starts in the initial-loading state until [`initialize`](Self::initialize)
    /// completes.
    #[must_use]
    pub fn new(api: ProductsApi) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                api,
                products: RwLock::new(Vec::new()),
                error: RwLock::new(None),
                is_initial_loading: AtomicBool::new(true),
                is_loading: AtomicBool::new(false),
            }),
        }
    }

    /// First load of the product list. Clears the initial-loading flag once
    /// the fetch settles, whether it succeeded or not.
    #[instrument(skip(self))]
    pub async fn initialize(&self) {
        self.fetch_list().await;
        self.inner.is_initial_loading.store(false, Ordering::SeqCst);
    }

    /// Reload the product list. Does not re-enter the initial-loading state,
    /// so pages keep rendering the current list while the fetch runs.
    #[instrument(skip(self))]
    pub async fn refetch(&self) {
        self.fetch_list().await;
    }

    async fn fetch_list(&self) {
        *self.inner.error.write().await = None;

        match self.inner.api.list().await {
            Ok(products) => {
                tracing::debug!(count = products.len(), "Loaded product list");
                *self.inner.products.write().await = products;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load products");
                *self.inner.error.write().await = Some(e.to_string());
            }
        }
    }

    /// Validate a draft, create the product upstream, and append the
    /// confirmed record to the list.
    ///
    /// # Errors
    ///
    /// Returns the validation or API error after recording it on the store.
    #[instrument(skip(self, draft), fields(name = %draft.name))]
    pub async fn create(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        self.begin().await;
        let result = self.try_create(draft).await;
        self.finish(&result).await;
        result
    }

    async fn try_create(&self, draft: &ProductDraft) -> Result<Product, StoreError> {
        let record = product_from_create(draft, generate_temp_id())?;
        let created = self.inner.api.create(&record).await?;
        self.inner.products.write().await.push(created.clone());
        Ok(created)
    }

    /// Validate a draft, replace the product upstream, and swap the
    /// confirmed record into the list at its current position.
    ///
    /// Fetches the current record first so the original creation timestamp
    /// survives the full-record PUT.
    ///
    /// # Errors
    ///
    /// Returns the validation or API error after recording it on the store.
    #[instrument(skip(self, draft), fields(id = %id))]
    pub async fn update(&self, id: &str, draft: &ProductDraft) -> Result<Product, StoreError> {
        self.begin().await;
        let result = self.try_update(id, draft).await;
        self.finish(&result).await;
        result
    }

    async fn try_update(&self, id: &str, draft: &ProductDraft) -> Result<Product, StoreError> {
        let current = self.inner.api.get(id).await?;
        let record = product_from_update(draft, id, Some(current.created_at))?;
        let updated = self.inner.api.update(id, &record).await?;

        let mut products = self.inner.products.write().await;
        if let Some(slot) = products.iter_mut().find(|p| p.id == id) {
            *slot = updated.clone();
        }
        Ok(updated)
    }

    /// Delete the product upstream and drop it from the list.
    ///
    /// # Errors
    ///
    /// Returns the API error after recording it on the store.
    #[instrument(skip(self), fields(id = %id))]
    pub async fn delete(&self, id: &str) -> Result<(), StoreError> {
        self.begin().await;
        let result = self.try_delete(id).await;
        self.finish(&result).await;
        result
    }

    async fn try_delete(&self, id: &str) -> Result<(), StoreError> {
        self.inner.api.delete(id).await?;
        self.inner.products.write().await.retain(|p| p.id != id);
        Ok(())
    }

    async fn begin(&self) {
        self.inner.is_loading.store(true, Ordering::SeqCst);
        *self.inner.error.write().await = None;
    }

    async fn finish<T>(&self, result: &Result<T, StoreError>) {
        if let Err(e) = result {
            tracing::error!(error = %e, "Product operation failed");
            *self.inner.error.write().await = Some(e.to_string());
        }
        self.inner.is_loading.store(false, Ordering::SeqCst);
    }

    /// Snapshot of the current product list, in server order.
    pub async fn products(&self) -> Vec<Product> {
        self.inner.products.read().await.clone()
    }

    /// The most recent operation error, if the last operation failed.
    pub async fn error(&self) -> Option<String> {
        self.inner.error.read().await.clone()
    }

    /// True until the first [`initialize`](Self::initialize) settles.
    #[must_use]
    pub fn is_initial_loading(&self) -> bool {
        self.inner.is_initial_loading.load(Ordering::SeqCst)
    }

    /// True while a create, update, or delete is in flight. List fetches
    /// never raise this flag; the first one reports through
    /// [`is_initial_loading`](Self::is_initial_loading) instead.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.inner.is_loading.load(Ordering::SeqCst)
    }
}
