//! Application state shared across handlers.

use std::sync::Arc;

use tracing::info;

use crate::api::ProductsApi;
use crate::config::DashboardConfig;
use crate::store::ProductStore;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to
/// shared resources like the products API client and the product store.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: DashboardConfig,
    api: ProductsApi,
    store: ProductStore,
}

impl AppState {
    /// Create a new application state.
    ///
    /// The store starts empty and in the initial-loading state; call
    /// [`start_initial_load`](Self::start_initial_load) once the runtime
    /// is up to populate it.
    #[must_use]
    pub fn new(config: DashboardConfig) -> Self {
        let api = ProductsApi::new(config.products_api_url.as_str());
        let store = ProductStore::new(api.clone());

        Self {
            inner: Arc::new(AppStateInner { config, api, store }),
        }
    }

    /// Get a reference to the dashboard configuration.
    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.inner.config
    }

    /// Get a reference to the products API client.
    #[must_use]
    pub fn api(&self) -> &ProductsApi {
        &self.inner.api
    }

    /// Get a reference to the shared product store.
    #[must_use]
    pub fn store(&self) -> &ProductStore {
        &self.inner.store
    }

    /// Spawn the first product list load in the background.
    ///
    /// Pages render the loading state until it settles, so startup does not
    /// block on the upstream API being reachable.
    pub fn start_initial_load(&self) {
        info!("Spawning initial product load task");
        let store = self.inner.store.clone();
        tokio::spawn(async move {
            store.initialize().await;
            info!("Initial product load settled");
        });
    }
}
