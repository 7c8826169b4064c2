//! Storage layer for the item collection.
//!
//! This module owns the item collection and everything computed directly from
//! it: the ordered store, facet catalogs, sort orders and the JSON item-file
//! format used by file-based hosts.
//!
//! # Modules
//!
//! - `store`: Ordered item collection with derived active flags
//! - `catalog`: Distinct facet values and counts over an item subset
//! - `sorter`: Case-insensitive, stable item ordering
//! - `json`: JSON item-file loading

pub mod catalog;
pub mod json;
pub mod sorter;
pub mod store;

pub use catalog::FacetCatalog;
pub use json::{load_items_file, ItemsFile};
pub use sorter::{sort_order, SortDirection, SortKey};
pub use store::ItemStore;
