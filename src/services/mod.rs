//! Service layer.
//!
//! Holds the pricing catalog registry that feeds catalog snapshots into
//! estimate calculations.

pub mod catalog_registry;

pub use catalog_registry::CatalogRegistry;
