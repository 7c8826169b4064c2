//! Facetpage: pagination and faceted filtering for in-memory item collections.
//!
//! Facetpage is a UI-agnostic state engine that provides:
//! - Page partitioning with a sliding window of page buttons, edge buttons
//!   and ellipsis/bridge connectors
//! - Multi-facet filtering (OR within a facet, AND across facets) with value
//!   availability and optional counts
//! - Case-insensitive pattern or fuzzy text search
//! - Stable sorting by text, section or data field
//! - Lifecycle hooks and immutable snapshots for a rendering collaborator

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  JSON-lines host (main.rs)                          │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Command dispatch                                 │
//! │  - Facet filter engine and text search              │
//! │  - Lifecycle hooks                                  │
//! └─────────────────────────────────────────────────────┘
//!         │                                       │
//! ┌───────────────────────┐       ┌───────────────────────┐
//! │ Storage Layer         │       │ UI Layer              │
//! │ (storage/)            │       │ (ui/)                 │
//! │ - Ordered item store  │       │ - Page-button window  │
//! │ - Facet catalogs      │       │ - Snapshot view model │
//! │ - Sorting, JSON input │       │                       │
//! └───────────────────────┘       └───────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Items, facet ids, selection                      │
//! │  - Pagination arithmetic, error types               │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │  ← Optional
//! │  - tracing subscriber on stderr                     │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Session state machine with commands and hooks
//! - [`domain`]: Core domain types (items, selection, pagination, errors)
//! - [`storage`]: Item store, facet catalogs, sorting and JSON item files
//! - [`ui`]: Page buttons and snapshot view models
//! - [`observability`]: Tracing subscriber setup
//!
//! # Configuration
//!
//! Options are enumerated by [`Config`] and can be read from TOML:
//!
//! ```toml
//! items_on_page = 12
//! start_page = 1
//! max_displayed_buttons = 5
//! min_end_buttons = 1
//! first_last_buttons = true
//! show_facet_counts = true
//! search_enabled = true
//! search_mode = "fuzzy"
//! trace_level = "debug"
//!
//! [labels]
//! first = "«"
//! prev = "‹"
//! next = "›"
//! last = "»"
//! ellipsis = "..."
//! ```
//!
//! # Examples
//!
//! ## Basic Usage
//!
//! ```rust
//! use facetpage::domain::{FacetId, ItemRecord};
//! use facetpage::{handle_command, initialize, Command, Config};
//!
//! let color = FacetId::new("style", "color");
//! let items = vec![
//!     ItemRecord::new("a", "Red shirt").with_facet("style", "color", "red"),
//!     ItemRecord::new("b", "Blue shirt").with_facet("style", "color", "blue"),
//! ];
//!
//! let mut session = initialize(Config::default(), vec![color.clone()], items)?;
//!
//! let command = Command::ToggleFacet { facet: color, value: "red".to_string() };
//! let snapshot = handle_command(&mut session, &command)?;
//! assert_eq!(snapshot.visible_items, vec!["a"]);
//! assert!(snapshot.reset_visible);
//! # Ok::<(), facetpage::PagerError>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Explicit Facet Schema
//!
//! Facets are declared up front as `(category, field)` pairs. Items carry a
//! value per facet; an item without a value never matches that facet.
//!
//! ## Snapshots Instead of Callbacks
//!
//! Every command returns an immutable [`Snapshot`](ui::Snapshot). Rendering
//! happens outside the engine, driven by snapshots and observer hooks.
//!
//! ## Clamping, Not Rejecting
//!
//! Page indices are clamped into range. Only malformed configuration and
//! unknown facets are errors.

pub mod app;
pub mod domain;
pub mod storage;

pub mod ui;

pub mod observability;

pub use app::{handle_command, Command, Lifecycle, SearchMode, Session, SessionObserver};
pub use domain::{FacetId, ItemRecord, PagerError, Result};
pub use ui::{ButtonLabels, Snapshot};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Upper bound for `max_displayed_buttons` and `min_end_buttons`.
pub const MAX_NAV_BUTTONS: usize = 1024;

/// Pagination, filtering and search options.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of items on every page. Must be greater than zero. Default: 9
    pub items_on_page: usize,

    /// One-based page selected after loading. Clamped to the page count.
    /// Default: 1
    pub start_page: usize,

    /// Number of buttons in the sliding window, excluding edge buttons.
    /// Must be greater than zero. Default: 3
    pub max_displayed_buttons: usize,

    /// Number of fixed buttons at each end of the navigation bar. Default: 2
    pub min_end_buttons: usize,

    /// Show "first" and "last" buttons. Default: true
    pub first_last_buttons: bool,

    /// Button texts. Prev/next buttons are omitted when their label is unset.
    pub labels: ButtonLabels,

    /// Report per-value occurrence counts for facet options. Default: false
    pub show_facet_counts: bool,

    /// Accept text search commands. Default: false
    pub search_enabled: bool,

    /// How text queries are matched. Default: `pattern`
    pub search_mode: SearchMode,

    /// Tracing level (`trace`, `debug`, `info`, `warn`, `error`).
    /// Default: `"info"` when unset
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            items_on_page: 9,
            start_page: 1,
            max_displayed_buttons: 3,
            min_end_buttons: 2,
            first_last_buttons: true,
            labels: ButtonLabels::default(),
            show_facet_counts: false,
            search_enabled: false,
            search_mode: SearchMode::Pattern,
            trace_level: None,
        }
    }
}

impl Config {
    /// Checks value ranges.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `items_on_page` or
    /// `max_displayed_buttons` is zero, or if `max_displayed_buttons` or
    /// `min_end_buttons` exceeds [`MAX_NAV_BUTTONS`].
    pub fn validate(&self) -> Result<()> {
        if self.items_on_page == 0 {
            return Err(PagerError::Config(
                "items_on_page must be greater than zero".to_string(),
            ));
        }
        if self.max_displayed_buttons == 0 {
            return Err(PagerError::Config(
                "max_displayed_buttons must be greater than zero".to_string(),
            ));
        }
        if self.max_displayed_buttons > MAX_NAV_BUTTONS {
            return Err(PagerError::Config(format!(
                "max_displayed_buttons must be at most {MAX_NAV_BUTTONS}"
            )));
        }
        if self.min_end_buttons > MAX_NAV_BUTTONS {
            return Err(PagerError::Config(format!(
                "min_end_buttons must be at most {MAX_NAV_BUTTONS}"
            )));
        }
        Ok(())
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] for invalid TOML, unknown keys, wrongly
    /// typed values, or values failing [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```rust
    /// use facetpage::Config;
    ///
    /// let config = Config::from_toml_str("items_on_page = 4\nshow_facet_counts = true")?;
    /// assert_eq!(config.items_on_page, 4);
    /// assert!(config.show_facet_counts);
    /// assert_eq!(config.min_end_buttons, 2);
    ///
    /// assert!(Config::from_toml_str("itemsOnPage = 4").is_err());
    /// # Ok::<(), facetpage::PagerError>(())
    /// ```
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| PagerError::Config(format!("failed to parse configuration: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Io`] if the file cannot be read, otherwise the
    /// errors of [`from_toml_str`](Self::from_toml_str).
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a flat string map.
    ///
    /// Label keys are `first_text`, `prev_text`, `next_text`, `last_text` and
    /// `ellipsis_text`; an empty `prev_text`/`next_text` disables the button.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] for unknown keys, unparsable values, or
    /// values failing [`validate`](Self::validate).
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use facetpage::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("items_on_page".to_string(), "5".to_string());
    /// map.insert("prev_text".to_string(), String::new());
    ///
    /// let config = Config::from_map(&map)?;
    /// assert_eq!(config.items_on_page, 5);
    /// assert_eq!(config.labels.prev, None);
    ///
    /// map.insert("colour".to_string(), "red".to_string());
    /// assert!(Config::from_map(&map).is_err());
    /// # Ok::<(), facetpage::PagerError>(())
    /// ```
    pub fn from_map(map: &BTreeMap<String, String>) -> Result<Self> {
        let mut config = Self::default();

        for (key, value) in map {
            let value = value.trim();
            match key.as_str() {
                "items_on_page" => config.items_on_page = parse(key, value)?,
                "start_page" => config.start_page = parse(key, value)?,
                "max_displayed_buttons" => config.max_displayed_buttons = parse(key, value)?,
                "min_end_buttons" => config.min_end_buttons = parse(key, value)?,
                "first_last_buttons" => config.first_last_buttons = parse(key, value)?,
                "show_facet_counts" => config.show_facet_counts = parse(key, value)?,
                "search_enabled" => config.search_enabled = parse(key, value)?,
                "search_mode" => {
                    config.search_mode = match value {
                        "pattern" => SearchMode::Pattern,
                        "fuzzy" => SearchMode::Fuzzy,
                        other => {
                            return Err(PagerError::Config(format!(
                                "invalid value for search_mode: {other}"
                            )))
                        }
                    }
                }
                "trace_level" => config.trace_level = Some(value.to_string()),
                "first_text" => config.labels.first = value.to_string(),
                "last_text" => config.labels.last = value.to_string(),
                "ellipsis_text" => config.labels.ellipsis = value.to_string(),
                "prev_text" => config.labels.prev = non_empty(value),
                "next_text" => config.labels.next = non_empty(value),
                unknown => {
                    return Err(PagerError::Config(format!("unknown option: {unknown}")));
                }
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn parse<T: std::str::FromStr>(key: &str, value: &str) -> Result<T>
where
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e| PagerError::Config(format!("invalid value for {key}: {value} ({e})")))
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// Creates a session and loads the initial items.
///
/// # Errors
///
/// Returns [`PagerError::Config`] if `config` is invalid and
/// [`PagerError::DuplicateItemId`] if two items share an id.
///
/// # Example
///
/// ```rust
/// use facetpage::{initialize, Config, ItemRecord};
///
/// let items = (0..22).map(|i| ItemRecord::new(i.to_string(), "")).collect();
/// let session = initialize(Config::default(), vec![], items)?;
/// assert_eq!(session.total_pages(), 3);
/// assert_eq!(session.current_page(), 1);
/// # Ok::<(), facetpage::PagerError>(())
/// ```
pub fn initialize(config: Config, schema: Vec<FacetId>, items: Vec<ItemRecord>) -> Result<Session> {
    tracing::debug!(
        facets = schema.len(),
        items = items.len(),
        "initializing session"
    );

    let mut session = Session::new(config, schema)?;
    session.load(items)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.items_on_page, 9);
        assert_eq!(config.max_displayed_buttons, 3);
        assert_eq!(config.labels.prev.as_deref(), Some("<"));
    }

    #[test]
    fn zero_sizes_are_rejected() {
        assert!(Config::from_toml_str("items_on_page = 0").is_err());
        assert!(Config::from_toml_str("max_displayed_buttons = 0").is_err());

        let mut map = BTreeMap::new();
        map.insert("items_on_page".to_string(), "0".to_string());
        assert!(matches!(Config::from_map(&map), Err(PagerError::Config(_))));
    }

    #[test]
    fn oversized_button_counts_are_rejected() {
        assert!(Config::from_toml_str("max_displayed_buttons = 4611686018427387903").is_err());
        assert!(Config::from_toml_str("min_end_buttons = 9223372036854775807").is_err());
        assert!(Config::from_toml_str("max_displayed_buttons = 1024\nmin_end_buttons = 1024").is_ok());

        let mut map = BTreeMap::new();
        map.insert("min_end_buttons".to_string(), "1025".to_string());
        assert!(matches!(Config::from_map(&map), Err(PagerError::Config(_))));

        let config = Config {
            max_displayed_buttons: usize::MAX,
            ..Config::default()
        };
        assert!(Session::new(config, vec![]).is_err());
    }

    #[test]
    fn wrongly_typed_values_are_rejected() {
        assert!(Config::from_toml_str("items_on_page = \"nine\"").is_err());
        assert!(Config::from_toml_str("search_mode = \"telepathy\"").is_err());

        let mut map = BTreeMap::new();
        map.insert("search_enabled".to_string(), "yes".to_string());
        assert!(Config::from_map(&map).is_err());
    }

    #[test]
    fn nested_labels_parse_from_toml() {
        let config = Config::from_toml_str(
            r#"
            search_mode = "fuzzy"

            [labels]
            first = "first"
            next = "more"
            "#,
        )
        .unwrap();

        assert_eq!(config.search_mode, SearchMode::Fuzzy);
        assert_eq!(config.labels.first, "first");
        assert_eq!(config.labels.next.as_deref(), Some("more"));
        assert_eq!(config.labels.last, ">>");
    }

    #[test]
    fn initialize_loads_items() {
        let items = vec![ItemRecord::new("a", ""), ItemRecord::new("b", "")];
        let session = initialize(Config::default(), vec![], items).unwrap();
        assert_eq!(session.active_count(), 2);

        let duplicate = vec![ItemRecord::new("a", ""), ItemRecord::new("a", "")];
        assert!(matches!(
            initialize(Config::default(), vec![], duplicate),
            Err(PagerError::DuplicateItemId(_))
        ));
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "items_on_page = 3\nsearch_enabled = true").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.items_on_page, 3);
        assert!(config.search_enabled);
    }
}
