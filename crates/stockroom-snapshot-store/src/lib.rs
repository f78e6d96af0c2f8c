//! Durable snapshot storage for the Stockroom inventory service.

pub mod json_file_repository;
