use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::config::{Config, FilterMode};
use crate::errors::AppError;
use crate::store::Store;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Store access is synchronous and never held across an `.await`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<Store>>,
    pub config: Config,
}

impl AppState {
    pub fn new(store: Store, config: Config) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            config,
        }
    }

    pub fn filter_mode(&self) -> FilterMode {
        self.config.filter_mode
    }

    /// `public` is the opaque message returned if the store is unusable.
    pub fn read_store(&self, public: &'static str) -> Result<RwLockReadGuard<'_, Store>, AppError> {
        self.store
            .read()
            .map_err(|e| AppError::internal(public, anyhow::anyhow!("store lock poisoned: {e}")))
    }

    pub fn write_store(
        &self,
        public: &'static str,
    ) -> Result<RwLockWriteGuard<'_, Store>, AppError> {
        self.store
            .write()
            .map_err(|e| AppError::internal(public, anyhow::anyhow!("store lock poisoned: {e}")))
    }
}
