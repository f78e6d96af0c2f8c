//! Stockroom Core — shared domain types and abstractions.
//!
//! Products, movement records, validated quantities, the store error taxonomy
//! and the persistence seam. No I/O lives here.

pub mod clock;
pub mod error;
pub mod movement;
pub mod product;
pub mod quantity;
pub mod repository;
