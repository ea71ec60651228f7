//! Shared application state.

use std::sync::Arc;

use tokio::sync::RwLock;

use crate::bakery::BakeryClient;
use crate::config::AdminConfig;
use crate::store::OrderStore;

/// Application state handed to every handler.
///
/// Cheap to clone; all clones share the same store. The store sits behind
/// an async `RwLock`. Pure reads (export) take the read lock and can
/// overlap; everything that mutates store state is serialized through the
/// write lock — which includes grid rendering, because `GET /orders`
/// persists the request's grid parameters as the store's current view.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: AdminConfig,
    store: RwLock<OrderStore<BakeryClient>>,
}

impl AppState {
    /// Build state from configuration, with an empty order collection.
    #[must_use]
    pub fn new(config: AdminConfig) -> Self {
        let client = BakeryClient::new(&config.bakery);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                store: RwLock::new(OrderStore::new(client)),
            }),
        }
    }

    /// Server configuration.
    #[must_use]
    pub fn config(&self) -> &AdminConfig {
        &self.inner.config
    }

    /// The order store behind its lock.
    #[must_use]
    pub fn store(&self) -> &RwLock<OrderStore<BakeryClient>> {
        &self.inner.store
    }
}
