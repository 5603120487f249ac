//! Shared application state.
//!
//! Everything a handler needs: the injected store, the connection
//! registry, the notification dispatcher, and WebSocket metrics.

use std::sync::Arc;

use crate::store::{MemoryStore, Store};
use crate::ws::{NotificationDispatcher, StreamRegistry, WsMetrics};

/// Application state shared across handlers and connections.
#[derive(Clone)]
pub struct AppState {
    /// Injected record store.
    pub store: Arc<dyn Store>,

    /// WebSocket connection registry.
    pub registry: Arc<StreamRegistry>,

    /// Domain event dispatcher.
    pub dispatcher: Arc<NotificationDispatcher>,

    /// WebSocket metrics.
    pub metrics: Arc<WsMetrics>,
}

impl AppState {
    /// Creates state backed by a fresh in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::with_store(Arc::new(MemoryStore::new()))
    }

    /// Creates state with an injected store.
    #[must_use]
    pub fn with_store(store: Arc<dyn Store>) -> Self {
        let metrics = Arc::new(WsMetrics::new());
        let registry = Arc::new(StreamRegistry::new(Arc::clone(&metrics)));
        let dispatcher = Arc::new(NotificationDispatcher::new(Arc::clone(&registry)));

        Self {
            store,
            registry,
            dispatcher,
            metrics,
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}
