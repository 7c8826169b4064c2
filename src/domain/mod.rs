//! Domain layer for the pagination engine.
//!
//! This module contains the core domain types, independent of any host or
//! rendering concern: items and facet identifiers, the facet selection, the
//! pagination state and the crate error type.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`item`]: Item model, load records and facet identifiers
//! - [`pagination`]: Page size, page count and current page
//! - [`selection`]: Selected facet values and AND/OR matching
//!
//! # Examples
//!
//! ```
//! use facetpage::domain::{FacetId, Item, ItemRecord, Selection};
//!
//! let item = Item::from_record(ItemRecord::new("a", "Alpha").with_facet("style", "color", "red"), 0);
//! let mut selection = Selection::new();
//! selection.toggle(&FacetId::new("style", "color"), "red");
//! assert!(selection.matches(&item));
//! ```

pub mod error;
pub mod item;
pub mod pagination;
pub mod selection;

pub use error::{PagerError, Result};
pub use item::{FacetId, Item, ItemRecord};
pub use pagination::PaginationState;
pub use selection::Selection;
