//! The stock movement journal.

use chrono::{DateTime, Utc};
use stockroom_core::error::PersistenceError;
use stockroom_core::movement::{Direction, MovementRecord};
use stockroom_core::quantity::Quantity;

/// Append-only history of stock movements, oldest first.
///
/// Timestamps never decrease in insertion order: an entry stamped earlier than
/// its predecessor takes the predecessor's instant instead.
#[derive(Debug, Clone, Default)]
pub struct Journal {
    records: Vec<MovementRecord>,
}

impl Journal {
    /// Creates an empty journal.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuilds a journal from persisted records.
    ///
    /// # Errors
    ///
    /// Returns `PersistenceError::Corrupt` if the records are not in
    /// non-decreasing timestamp order.
    pub fn restore(records: Vec<MovementRecord>) -> Result<Self, PersistenceError> {
        if let Some(index) = records
            .windows(2)
            .position(|pair| pair[1].timestamp < pair[0].timestamp)
        {
            return Err(PersistenceError::Corrupt(format!(
                "history record {} is older than its predecessor",
                index + 1
            )));
        }
        Ok(Self { records })
    }

    /// Returns all records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[MovementRecord] {
        &self.records
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the journal holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records a movement applied at `at`.
    pub(crate) fn append(
        &mut self,
        product_id: &str,
        change: Quantity,
        direction: Direction,
        at: DateTime<Utc>,
    ) -> &MovementRecord {
        let timestamp = self
            .records
            .last()
            .map_or(at, |last| last.timestamp.max(at));
        self.records.push(MovementRecord {
            product_id: product_id.to_owned(),
            change,
            direction,
            timestamp,
        });
        &self.records[self.records.len() - 1]
    }

    /// Drops every record, returning how many there were.
    pub(crate) fn clear(&mut self) -> usize {
        let cleared = self.records.len();
        self.records.clear();
        cleared
    }
}
