//! Store error types.

use std::path::PathBuf;

use thiserror::Error;

use crate::quantity::QuantityError;

/// Every way a store operation can fail.
#[derive(Debug, Error)]
pub enum StoreError {
    /// A required input field was absent or blank.
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// A supplied quantity failed validation.
    #[error("quantity {0}")]
    InvalidQuantity(#[from] QuantityError),

    /// A product with this id is already in the catalog.
    #[error("product with id {0} already exists")]
    DuplicateId(String),

    /// No product with this id is in the catalog.
    #[error("product not found: {0}")]
    NotFound(String),

    /// The adjustment would drive stock below zero.
    #[error(
        "stock cannot go below zero: product {product_id} has {available}, requested {requested}"
    )]
    NegativeStock {
        /// The product being adjusted.
        product_id: String,
        /// Units on hand.
        available: u64,
        /// Units the caller tried to remove.
        requested: u64,
    },

    /// Durable storage failed.
    #[error("persistence error: {0}")]
    Persistence(#[from] PersistenceError),
}

/// Failures reading or writing the snapshot.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// Filesystem failure.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// File or directory involved.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The snapshot could not be serialized.
    #[error("failed to encode snapshot: {0}")]
    Encode(#[source] serde_json::Error),

    /// The stored snapshot is unreadable or violates store invariants.
    #[error("corrupt snapshot: {0}")]
    Corrupt(String),
}
