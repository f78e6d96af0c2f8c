//! Shared application state.

use std::sync::Arc;

use stockroom_inventory::application::store::InventoryStore;
use tokio::sync::RwLock;

/// Application state shared across all request handlers.
///
/// Mutating handlers hold the write lock for the whole operation, including
/// the snapshot save; listing handlers share the read lock.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The one inventory store of this process.
    pub store: Arc<RwLock<InventoryStore>>,
}

impl AppState {
    /// Create new application state around `store`.
    #[must_use]
    pub fn new(store: InventoryStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
