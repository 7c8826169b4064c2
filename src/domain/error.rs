//! Error types for the pagination engine.
//!
//! This module defines the centralized error type [`PagerError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Errors are reserved for caller mistakes (bad configuration, duplicate ids,
//! commands naming undeclared facets). Out-of-range page indices are never an
//! error; they are clamped by the pagination state.

use super::item::FacetId;
use thiserror::Error;

/// The main error type for pagination and filtering operations.
///
/// # Examples
///
/// ```
/// use facetpage::domain::PagerError;
///
/// fn validate_page_size(n: usize) -> Result<(), PagerError> {
///     if n == 0 {
///         return Err(PagerError::Config("items_on_page must be greater than zero".to_string()));
///     }
///     Ok(())
/// }
///
/// assert!(validate_page_size(0).is_err());
/// ```
#[derive(Debug, Error)]
pub enum PagerError {
    /// Configuration is invalid, malformed, or names an unknown option.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Two items in a load request share the same id.
    #[error("Duplicate item id: {0}")]
    DuplicateItemId(String),

    /// A reorder request referenced an id that is not in the store.
    #[error("Unknown item id: {0}")]
    UnknownItem(String),

    /// A reorder request was not a permutation of the stored ids.
    #[error("Reorder error: {0}")]
    Reorder(String),

    /// A facet command named a facet that is not part of the declared schema.
    #[error("Unknown facet: {0}")]
    UnknownFacet(FacetId),

    /// A text search was requested while search is disabled in the configuration.
    #[error("Text search is disabled")]
    SearchDisabled,

    /// Filesystem or I/O operation failed.
    ///
    /// Automatically converts from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A JSON document (item file or command line) could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized `Result` type for pagination operations.
///
/// # Examples
///
/// ```
/// use facetpage::domain::Result;
///
/// fn recompute() -> Result<usize> {
///     Ok(1)
/// }
/// ```
pub type Result<T> = std::result::Result<T, PagerError>;
