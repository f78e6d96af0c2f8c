//! Snapshot persistence abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::PersistenceError;
use crate::movement::MovementRecord;
use crate::product::Product;

/// The full durable state of a store: catalog plus journal, saved as one
/// document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Catalog products in insertion order.
    #[serde(default)]
    pub products: Vec<Product>,
    /// Journal records, oldest first.
    #[serde(default)]
    pub history: Vec<MovementRecord>,
}

/// Durable storage for store snapshots.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Reads the last saved snapshot. `Ok(None)` means nothing was saved yet.
    async fn load(&self) -> Result<Option<Snapshot>, PersistenceError>;

    /// Replaces the stored snapshot with `snapshot`.
    async fn save(&self, snapshot: &Snapshot) -> Result<(), PersistenceError>;
}
