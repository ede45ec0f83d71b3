//! Shared application state for all routes.
//! The store is injected, so each router owns its own registry.

use crate::config::Config;
use crate::store::AccountStore;
use std::sync::Arc;

#[derive(Clone, Default)]
pub struct AppState {
    pub store: AccountStore,
    /// Base URL for `Location` headers; falls back to the request `Host`.
    pub public_url: Option<Arc<str>>,
}

impl AppState {
    pub fn new(store: AccountStore) -> Self {
        AppState {
            store,
            public_url: None,
        }
    }

    pub fn from_config(store: AccountStore, config: &Config) -> Self {
        AppState {
            store,
            public_url: config.public_url.as_deref().map(Arc::from),
        }
    }
}
