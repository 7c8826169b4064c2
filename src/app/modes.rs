//! Filter and search mode types.
//!
//! The session filters items in one of two mutually exclusive modes:
//!
//! - **Facets**: items must satisfy the facet [`Selection`](crate::domain::Selection)
//! - **Text**: items must match the text query
//!
//! Applying a text query clears the facet selection, and any facet command
//! clears the text query.
//!
//! # Example
//!
//! ```rust
//! use facetpage::app::modes::{FilterMode, SearchMode};
//!
//! let mode = FilterMode::Text;
//! assert_ne!(mode, FilterMode::Facets);
//! assert_eq!(SearchMode::default(), SearchMode::Pattern);
//! ```

use serde::{Deserialize, Serialize};

/// Which filter currently determines the active items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FilterMode {
    /// Facet selection (an empty selection keeps every item active).
    #[default]
    Facets,

    /// Text query.
    Text,
}

/// How a text query is matched against item text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchMode {
    /// Case-insensitive regular expression; an invalid expression is matched
    /// as a literal substring.
    #[default]
    Pattern,

    /// Every whitespace-separated token must fuzzy-match the text.
    Fuzzy,
}
