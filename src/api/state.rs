//! Application state for the attendance hours engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::ConfigLoader;
use crate::store::MemoryStore;

/// Shared application state.
///
/// Contains resources that are shared across all request handlers: the
/// record store the recompute endpoint runs against and the loaded
/// engine configuration.
#[derive(Clone)]
pub struct AppState {
    /// The backing record store.
    store: Arc<MemoryStore>,
    /// The loaded engine configuration.
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(store: MemoryStore, config: ConfigLoader) -> Self {
        Self {
            store: Arc::new(store),
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the record store.
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }
}
