//! JSON item-file loading.
//!
//! Hosts that keep their collection on disk describe it in a single JSON
//! document holding the facet schema and the item records:
//!
//! ```json
//! {
//!   "schema": [
//!     { "category": "style", "field": "color" },
//!     { "category": "style", "field": "size" }
//!   ],
//!   "items": [
//!     {
//!       "id": "shirt-1",
//!       "text": "Red shirt",
//!       "facets": { "style": { "color": "red", "size": "M" } }
//!     }
//!   ]
//! }
//! ```

use crate::domain::error::Result;
use crate::domain::{FacetId, ItemRecord};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top-level structure of an item file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemsFile {
    /// Facets the host wants to filter by.
    #[serde(default)]
    pub schema: Vec<FacetId>,

    /// Items in initial display order.
    #[serde(default)]
    pub items: Vec<ItemRecord>,
}

impl ItemsFile {
    /// Parses an item document from a string.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Json`](crate::PagerError::Json) if the document is
    /// not valid JSON or does not match the expected shape.
    pub fn from_json_str(contents: &str) -> Result<Self> {
        let file: Self = serde_json::from_str(contents)?;

        tracing::debug!(
            facet_count = file.schema.len(),
            item_count = file.items.len(),
            "parsed item document"
        );

        Ok(file)
    }
}

/// Reads and parses an item file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or contains invalid JSON.
///
/// # Examples
///
/// ```no_run
/// use facetpage::storage::load_items_file;
///
/// let file = load_items_file("/tmp/items.json")?;
/// println!("{} items", file.items.len());
/// # Ok::<(), facetpage::PagerError>(())
/// ```
pub fn load_items_file<P: AsRef<Path>>(path: P) -> Result<ItemsFile> {
    let path = path.as_ref();
    let _span = tracing::debug_span!("load_items_file", path = ?path).entered();

    let contents = std::fs::read_to_string(path)?;
    ItemsFile::from_json_str(&contents)
}
