//! The inventory store and its operations.

pub mod store;
