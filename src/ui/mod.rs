//! Presentation-facing output of the engine.
//!
//! This module turns session state into data a rendering collaborator can
//! draw without further computation. It performs no rendering itself.
//!
//! # Architecture
//!
//! ```text
//! Session → recompute → PaginationState ─→ windower ─→ PageButton list ─┐
//!                     → FacetCatalog ───────────────→ FacetGroup list ──┴→ Snapshot
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: Snapshot, page button and facet option types
//! - [`windower`]: Sliding page-button window with edges and ellipses
//!
//! # Example
//!
//! ```rust
//! use facetpage::domain::PaginationState;
//! use facetpage::ui::{page_buttons, ButtonLabels};
//!
//! let mut state = PaginationState::new(9, 3, 2, true)?;
//! state.recompute(22);
//! let buttons = page_buttons(&state, &ButtonLabels::default());
//! assert_eq!(buttons.iter().filter(|button| button.is_interactive()).count(), 4);
//! # Ok::<(), facetpage::PagerError>(())
//! ```

pub mod viewmodel;
pub mod windower;

pub use viewmodel::{ButtonKind, FacetGroup, FacetOption, PageButton, Snapshot};
pub use windower::{page_buttons, window, ButtonLabels};
