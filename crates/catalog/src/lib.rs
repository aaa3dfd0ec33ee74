//! Catalog module.
//!
//! The session-scoped, in-memory product catalog: ordered storage plus the
//! clone, decorate and statistics operations the menu drives.

pub mod catalog;
pub mod stats;

pub use catalog::{Catalog, CatalogSnapshot, Decoration, ListingEntry, EMPTY_CATALOG_MESSAGE};
pub use stats::{CatalogStats, Stats};
