//! File-backed adapters.

pub mod catalog_json;

pub use catalog_json::JsonCatalog;
