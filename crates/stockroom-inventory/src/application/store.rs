//! The inventory store.
//!
//! `InventoryStore` owns the catalog and the journal. Every mutating operation
//! validates first, then mutates, appends to the journal and saves a snapshot
//! before returning. A failed save is logged and does not undo the mutation:
//! the in-memory state stays authoritative and the caller still gets success.

use std::fmt;
use std::sync::Arc;

use stockroom_core::clock::Clock;
use stockroom_core::error::{PersistenceError, StoreError};
use stockroom_core::movement::{Direction, MovementRecord};
use stockroom_core::product::Product;
use stockroom_core::quantity::Quantity;
use stockroom_core::repository::{Snapshot, SnapshotRepository};
use tracing::{error, info, instrument, warn};

use crate::domain::catalog::{Adjustment, Catalog};
use crate::domain::commands::{AddProduct, MoveStock};
use crate::domain::journal::Journal;

/// Single-writer owner of the product catalog and movement journal.
pub struct InventoryStore {
    catalog: Catalog,
    journal: Journal,
    clock: Arc<dyn Clock>,
    repository: Arc<dyn SnapshotRepository>,
}

impl fmt::Debug for InventoryStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InventoryStore")
            .field("products", &self.catalog.len())
            .field("history", &self.journal.len())
            .finish_non_exhaustive()
    }
}

impl InventoryStore {
    /// Opens a store, restoring the last snapshot from `repository`.
    ///
    /// A missing snapshot starts the store empty. An unreadable or invalid
    /// snapshot is logged and also starts the store empty; opening never fails.
    pub async fn open(clock: Arc<dyn Clock>, repository: Arc<dyn SnapshotRepository>) -> Self {
        let (catalog, journal) = match restore(repository.as_ref()).await {
            Ok(Some((catalog, journal))) => {
                info!(
                    products = catalog.len(),
                    history = journal.len(),
                    "restored inventory snapshot"
                );
                (catalog, journal)
            }
            Ok(None) => {
                info!("no inventory snapshot found, starting empty");
                (Catalog::new(), Journal::new())
            }
            Err(err) => {
                error!(error = %err, "failed to load inventory snapshot, starting empty");
                (Catalog::new(), Journal::new())
            }
        };

        Self {
            catalog,
            journal,
            clock,
            repository,
        }
    }

    /// Adds a product and records its initial stock as an `IN` movement.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateId` if the id is already in the catalog.
    #[instrument(skip(self, command), fields(product_id = %command.id))]
    pub async fn add_product(&mut self, command: AddProduct) -> Result<Product, StoreError> {
        let AddProduct {
            id,
            name,
            category,
            quantity,
        } = command;

        let product = self
            .catalog
            .insert(Product {
                id,
                name,
                category,
                quantity: quantity.get(),
            })?
            .clone();
        self.journal
            .append(&product.id, quantity, Direction::In, self.clock.now());

        info!(quantity = product.quantity, "product added");
        self.persist().await;
        Ok(product)
    }

    /// Returns the active products in insertion order.
    #[must_use]
    pub fn products(&self) -> &[Product] {
        self.catalog.products()
    }

    /// Looks up one active product.
    #[must_use]
    pub fn product(&self, id: &str) -> Option<&Product> {
        self.catalog.get(id)
    }

    /// Removes a product from the catalog. Its history is kept.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no product has `id`.
    #[instrument(skip(self))]
    pub async fn remove_product(&mut self, id: &str) -> Result<Product, StoreError> {
        let removed = self.catalog.remove(id)?;
        info!(quantity = removed.quantity, "product removed");
        self.persist().await;
        Ok(removed)
    }

    /// Applies a signed stock change: positive moves stock in, negative out.
    ///
    /// # Errors
    ///
    /// - `StoreError::NotFound` if no product has `id`.
    /// - `StoreError::InvalidQuantity` if `delta` is zero or the new quantity
    ///   would overflow.
    /// - `StoreError::NegativeStock` if the new quantity would be below zero.
    ///
    /// On error nothing is changed and nothing is journaled.
    #[instrument(skip(self))]
    pub async fn adjust_stock(&mut self, id: &str, delta: i64) -> Result<Product, StoreError> {
        let adjustment = self.catalog.adjust(id, delta)?;
        Ok(self.commit(adjustment).await)
    }

    /// Adds `quantity` units to a product.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::adjust_stock`].
    #[instrument(skip(self))]
    pub async fn stock_in(&mut self, id: &str, quantity: Quantity) -> Result<Product, StoreError> {
        let adjustment = self.catalog.shift(id, Direction::In, quantity)?;
        Ok(self.commit(adjustment).await)
    }

    /// Removes `quantity` units from a product.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::adjust_stock`].
    #[instrument(skip(self))]
    pub async fn stock_out(&mut self, id: &str, quantity: Quantity) -> Result<Product, StoreError> {
        let adjustment = self.catalog.shift(id, Direction::Out, quantity)?;
        Ok(self.commit(adjustment).await)
    }

    /// Applies a validated stock-in command.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::adjust_stock`].
    pub async fn receive(&mut self, command: MoveStock) -> Result<Product, StoreError> {
        self.stock_in(&command.id, command.quantity).await
    }

    /// Applies a validated stock-out command.
    ///
    /// # Errors
    ///
    /// See [`InventoryStore::adjust_stock`].
    pub async fn dispatch(&mut self, command: MoveStock) -> Result<Product, StoreError> {
        self.stock_out(&command.id, command.quantity).await
    }

    /// Returns every movement record, oldest first.
    #[must_use]
    pub fn history(&self) -> &[MovementRecord] {
        self.journal.records()
    }

    /// Empties the journal and returns how many records were dropped. The
    /// catalog is untouched.
    #[instrument(skip(self))]
    pub async fn clear_history(&mut self) -> usize {
        let cleared = self.journal.clear();
        info!(cleared, "history cleared");
        self.persist().await;
        cleared
    }

    /// Copies the current state into a snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            products: self.catalog.products().to_vec(),
            history: self.journal.records().to_vec(),
        }
    }

    async fn commit(&mut self, adjustment: Adjustment) -> Product {
        self.journal.append(
            &adjustment.product.id,
            adjustment.change,
            adjustment.direction,
            self.clock.now(),
        );

        info!(
            direction = adjustment.direction.as_str(),
            change = adjustment.change.get(),
            quantity = adjustment.product.quantity,
            "stock adjusted"
        );
        self.persist().await;
        adjustment.product
    }

    async fn persist(&self) {
        if let Err(err) = self.repository.save(&self.snapshot()).await {
            warn!(error = %err, "failed to save inventory snapshot; keeping in-memory state");
        }
    }
}

async fn restore(
    repository: &dyn SnapshotRepository,
) -> Result<Option<(Catalog, Journal)>, PersistenceError> {
    let Some(snapshot) = repository.load().await? else {
        return Ok(None);
    };
    let catalog = Catalog::restore(snapshot.products)?;
    let journal = Journal::restore(snapshot.history)?;
    Ok(Some((catalog, journal)))
}
