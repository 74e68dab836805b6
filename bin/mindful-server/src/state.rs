//! Shared application state injected into every Axum handler.

use std::fmt;
use std::sync::Arc;

use crate::companion::ChatGenerator;
use crate::config::Config;
use crate::entities::MemoryStore;

/// State shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration (env-derived).
    pub config: Arc<Config>,
    /// Chat sessions and mood entries.
    pub store: Arc<MemoryStore>,
    /// Produces assistant replies for `POST /api/chat`.
    pub generator: Arc<dyn ChatGenerator>,
}

impl AppState {
    pub fn new(config: Config, generator: Arc<dyn ChatGenerator>) -> Self {
        let store = MemoryStore::new(config.demo_user_id.as_str());
        Self {
            config: Arc::new(config),
            store: Arc::new(store),
            generator,
        }
    }

    /// Identity every request acts as.
    pub fn demo_user_id(&self) -> &str {
        &self.config.demo_user_id
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("store", &self.store)
            .finish_non_exhaustive()
    }
}
