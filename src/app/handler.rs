//! Command dispatch.
//!
//! Hosts drive a [`Session`] either through its methods or by sending
//! [`Command`] values to [`handle_command`]. Commands are serde-tagged so they
//! can arrive as JSON from an event loop, a socket or a test fixture.
//!
//! # Wire Format
//!
//! ```json
//! {"command": "toggle_facet", "facet": {"category": "style", "field": "color"}, "value": "red"}
//! {"command": "select_page", "page": 2}
//! {"command": "sort_by", "key": {"kind": "field", "name": "price"}, "direction": "desc"}
//! ```
//!
//! # Example
//!
//! ```rust
//! use facetpage::app::{handle_command, Command, Session};
//! use facetpage::domain::ItemRecord;
//! use facetpage::Config;
//!
//! let mut session = Session::new(Config::default(), vec![])?;
//! session.load((0..20).map(|i| ItemRecord::new(i.to_string(), "")).collect())?;
//!
//! let command: Command = serde_json::from_str(r#"{"command": "next_page"}"#)?;
//! let snapshot = handle_command(&mut session, &command)?;
//! assert_eq!(snapshot.display_page(), 2);
//! # Ok::<(), facetpage::PagerError>(())
//! ```

use super::state::Session;
use crate::domain::error::Result;
use crate::domain::FacetId;
use crate::storage::{SortDirection, SortKey};
use crate::ui::Snapshot;
use serde::{Deserialize, Serialize};

/// A single state transition requested by the host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum Command {
    /// Jumps to a zero-based page (clamped).
    SelectPage { page: usize },
    NextPage,
    PrevPage,
    SetItemsPerPage { items_on_page: usize },
    ToggleFacet { facet: FacetId, value: String },
    RemoveFacet { facet: FacetId, value: String },
    ResetFacets,
    ApplyTextSearch { pattern: String },
    SortBy {
        key: SortKey,
        #[serde(default)]
        direction: SortDirection,
    },
    /// Recomputes derived state without changing inputs.
    Refresh,
}

/// Applies `command` to `session` and returns the resulting snapshot.
///
/// # Errors
///
/// Propagates the error of the corresponding [`Session`] method: unknown
/// facets, a zero page size, or search while search is disabled. A failed
/// command leaves the session unchanged.
pub fn handle_command(session: &mut Session, command: &Command) -> Result<Snapshot> {
    let _span = tracing::debug_span!("handle_command", command = ?command).entered();

    match command {
        Command::SelectPage { page } => Ok(session.select_page(*page)),
        Command::NextPage => Ok(session.next_page()),
        Command::PrevPage => Ok(session.prev_page()),
        Command::SetItemsPerPage { items_on_page } => session.set_items_per_page(*items_on_page),
        Command::ToggleFacet { facet, value } => session.toggle_facet(facet, value),
        Command::RemoveFacet { facet, value } => session.remove_facet(facet, value),
        Command::ResetFacets => Ok(session.reset_facets()),
        Command::ApplyTextSearch { pattern } => session.apply_text_search(pattern),
        Command::SortBy { key, direction } => session.sort_by(key, *direction),
        Command::Refresh => Ok(session.refresh()),
    }
}
