//! Stockroom — inventory store.
//!
//! Owns the product catalog and the stock movement journal, enforces the
//! catalog invariants (unique ids, no negative stock) and saves a snapshot of
//! both after every mutation.

pub mod application;
pub mod domain;
