//! Validated stock quantities.
//!
//! Raw quantities arrive as loosely typed JSON (numbers or numeric strings).
//! [`Quantity::parse`] is the single place they are checked; everything past
//! the boundary works with an already valid, strictly positive [`Quantity`].

use std::fmt;
use std::num::NonZeroU64;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Why a raw quantity was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum QuantityError {
    /// Not numeric, or not finite.
    #[error("must be a number")]
    NotANumber,
    /// Zero or negative.
    #[error("must be positive")]
    NotPositive,
    /// Has a fractional part.
    #[error("must be a whole number")]
    NotWholeNumber,
    /// Does not fit the store's quantity range.
    #[error("is too large")]
    TooLarge,
}

/// A strictly positive number of units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u64", into = "u64")]
pub struct Quantity(NonZeroU64);

impl Quantity {
    /// Wraps `value`.
    ///
    /// # Errors
    ///
    /// Returns `QuantityError::NotPositive` if `value` is zero.
    pub fn new(value: u64) -> Result<Self, QuantityError> {
        NonZeroU64::new(value)
            .map(Self)
            .ok_or(QuantityError::NotPositive)
    }

    /// Returns the number of units.
    #[must_use]
    pub fn get(self) -> u64 {
        self.0.get()
    }

    /// Parses a quantity supplied as a JSON number or a numeric string.
    ///
    /// # Errors
    ///
    /// Returns the `QuantityError` describing the first rule `raw` breaks.
    pub fn parse(raw: &Value) -> Result<Self, QuantityError> {
        match raw {
            Value::Number(number) => {
                if let Some(value) = number.as_u64() {
                    return Self::new(value);
                }
                if number.is_i64() {
                    return Err(QuantityError::NotPositive);
                }
                number
                    .as_f64()
                    .map_or(Err(QuantityError::NotANumber), Self::from_f64)
            }
            Value::String(text) => Self::parse_str(text),
            _ => Err(QuantityError::NotANumber),
        }
    }

    /// Parses a quantity from text such as `"12"` or `" 3.0 "`.
    ///
    /// # Errors
    ///
    /// Returns the `QuantityError` describing the first rule `text` breaks.
    pub fn parse_str(text: &str) -> Result<Self, QuantityError> {
        let trimmed = text.trim();
        if let Ok(value) = trimmed.parse::<u64>() {
            return Self::new(value);
        }
        let value: f64 = trimmed.parse().map_err(|_| QuantityError::NotANumber)?;
        Self::from_f64(value)
    }

    #[allow(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss,
        clippy::float_cmp
    )]
    fn from_f64(value: f64) -> Result<Self, QuantityError> {
        if !value.is_finite() {
            return Err(QuantityError::NotANumber);
        }
        if value <= 0.0 {
            return Err(QuantityError::NotPositive);
        }
        if value.trunc() != value {
            return Err(QuantityError::NotWholeNumber);
        }
        // u64::MAX rounds up to 2^64 as f64, so anything at or past it is out of range.
        if value >= u64::MAX as f64 {
            return Err(QuantityError::TooLarge);
        }
        Self::new(value as u64)
    }
}

impl TryFrom<u64> for Quantity {
    type Error = QuantityError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Quantity> for u64 {
    fn from(quantity: Quantity) -> Self {
        quantity.get()
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
