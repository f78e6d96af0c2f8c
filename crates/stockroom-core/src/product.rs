//! Catalog product records.

use serde::{Deserialize, Serialize};

/// A stock-keeping unit tracked by the catalog.
///
/// Only `quantity` ever changes after creation, and only through the store's
/// adjustment operations. Callers receive clones; the store owns the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Externally supplied identifier, unique within the catalog.
    pub id: String,
    /// Descriptive name.
    pub name: String,
    /// Free-form grouping label.
    pub category: String,
    /// Units currently on hand.
    pub quantity: u64,
}
