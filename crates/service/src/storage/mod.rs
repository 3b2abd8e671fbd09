//! Storage helpers for the service layer
//!
//! File-backed map used by the JSON file repository.

pub mod json_map_store;
