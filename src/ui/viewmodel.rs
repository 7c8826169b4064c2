//! View model types representing renderable pagination state.
//!
//! This module defines the immutable [`Snapshot`] handed to rendering
//! collaborators after every command. Snapshots contain no behavior, only
//! display-ready data: the page buttons, the facet options with their
//! availability, and the ids of the items on the current page.
//!
//! # Example
//!
//! ```rust
//! use facetpage::ui::viewmodel::{ButtonKind, PageButton};
//!
//! let button = PageButton::Page {
//!     page_index: 2,
//!     label: "3".to_string(),
//!     kind: ButtonKind::Number,
//!     is_current: false,
//! };
//! assert!(button.is_interactive());
//! assert_eq!(button.page_index(), Some(2));
//! ```

use crate::domain::FacetId;
use crate::storage::FacetCatalog;
use serde::Serialize;

/// Role of a page button in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    First,
    Prev,
    Number,
    Next,
    Last,
}

/// One entry of the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PageButton {
    /// A button that targets a page.
    ///
    /// When `is_current` is set the button is rendered as a marker rather
    /// than a link.
    Page {
        page_index: usize,
        label: String,
        kind: ButtonKind,
        is_current: bool,
    },

    /// Non-interactive placeholder between edge buttons and the window.
    Ellipsis { label: String },
}

impl PageButton {
    /// Target page, `None` for ellipses.
    #[must_use]
    pub const fn page_index(&self) -> Option<usize> {
        match self {
            Self::Page { page_index, .. } => Some(*page_index),
            Self::Ellipsis { .. } => None,
        }
    }

    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Page { label, .. } | Self::Ellipsis { label } => label,
        }
    }

    /// Whether clicking the button should select a page.
    #[must_use]
    pub const fn is_interactive(&self) -> bool {
        matches!(self, Self::Page { is_current: false, .. })
    }
}

/// Display state of one facet value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetOption {
    pub value: String,

    /// Number of active items carrying the value; present only when facet
    /// counts are enabled, and 0 for unavailable values.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    /// Whether the option can be clicked. Selected values are always available.
    pub available: bool,

    pub selected: bool,
}

/// All options of one facet, in lexical value order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FacetGroup {
    pub facet: FacetId,
    pub options: Vec<FacetOption>,
}

impl FacetGroup {
    #[must_use]
    pub fn option(&self, value: &str) -> Option<&FacetOption> {
        self.options.iter().find(|option| option.value == value)
    }
}

/// Read-only state emitted after every transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Snapshot {
    pub total_pages: usize,

    /// Zero-based current page.
    pub current_page: usize,

    pub active_count: usize,

    /// Facet values present among the active items.
    pub facet_catalog: FacetCatalog,

    pub page_buttons: Vec<PageButton>,

    /// Every facet value of the collection with its availability.
    pub facets: Vec<FacetGroup>,

    /// Ids of the items shown on the current page, in display order.
    pub visible_items: Vec<String>,

    /// Active text query, if the session is in search mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Whether a facet reset control should be shown.
    pub reset_visible: bool,
}

impl Snapshot {
    /// One-based current page, for display.
    #[must_use]
    pub const fn display_page(&self) -> usize {
        self.current_page + 1
    }

    #[must_use]
    pub fn facet(&self, facet: &FacetId) -> Option<&FacetGroup> {
        self.facets.iter().find(|group| &group.facet == facet)
    }
}
