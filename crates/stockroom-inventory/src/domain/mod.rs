//! Catalog, journal and command types.

pub mod catalog;
pub mod commands;
pub mod journal;
