//! Stock movement records kept in the journal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quantity::Quantity;

/// Whether a movement added or removed stock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Stock-in.
    #[serde(rename = "IN")]
    In,
    /// Stock-out.
    #[serde(rename = "OUT")]
    Out,
}

impl Direction {
    /// Derives the direction from the sign of a signed delta. Zero has none.
    #[must_use]
    pub fn of_delta(delta: i64) -> Option<Self> {
        match delta {
            d if d > 0 => Some(Self::In),
            d if d < 0 => Some(Self::Out),
            _ => None,
        }
    }

    /// Wire name, as written to the snapshot.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::In => "IN",
            Self::Out => "OUT",
        }
    }
}

/// One immutable entry of the movement journal.
///
/// The `product_id` is a plain reference: the record outlives the product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovementRecord {
    /// Product the movement applied to.
    pub product_id: String,
    /// Magnitude of the adjustment.
    pub change: Quantity,
    /// Stock-in or stock-out.
    #[serde(rename = "type")]
    pub direction: Direction,
    /// When the adjustment was applied.
    pub timestamp: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_direction_follows_sign_of_delta() {
        assert_eq!(Direction::of_delta(3), Some(Direction::In));
        assert_eq!(Direction::of_delta(-3), Some(Direction::Out));
        assert_eq!(Direction::of_delta(0), None);
    }

    #[test]
    fn test_movement_record_serializes_with_wire_field_names() {
        // Arrange
        let record = MovementRecord {
            product_id: "sku-1".to_owned(),
            change: Quantity::new(5).unwrap(),
            direction: Direction::Out,
            timestamp: Utc.with_ymd_and_hms(2026, 1, 15, 10, 0, 0).unwrap(),
        };

        // Act
        let json = serde_json::to_value(&record).unwrap();

        // Assert
        assert_eq!(json["productId"], "sku-1");
        assert_eq!(json["change"], 5);
        assert_eq!(json["type"], "OUT");
        assert_eq!(json["timestamp"], "2026-01-15T10:00:00Z");
        assert!(json.get("direction").is_none());
    }

    #[test]
    fn test_movement_record_with_zero_change_is_rejected_on_read() {
        let raw = serde_json::json!({
            "productId": "sku-1",
            "change": 0,
            "type": "IN",
            "timestamp": "2026-01-15T10:00:00Z"
        });

        let result = serde_json::from_value::<MovementRecord>(raw);

        assert!(result.is_err());
    }
}
