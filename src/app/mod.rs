//! Application layer: the session state machine and its commands.
//!
//! This module sits between the host (an event loop, the bundled binary, or a
//! UI toolkit) and the domain/storage/ui layers. It owns the single mutable
//! [`Session`] and defines how commands change it.
//!
//! # Architecture
//!
//! Commands flow in one direction:
//!
//! ```text
//! Host input → Command → handle_command → Session mutation → recompute → Snapshot
//!                                                                 │
//!                                                    SessionObserver hooks
//! ```
//!
//! # Modules
//!
//! - [`filter`]: Facet selection and availability
//! - [`handler`]: Serializable commands and their dispatcher
//! - [`lifecycle`]: Observer hooks fired after each transition
//! - [`modes`]: Filter and search mode types
//! - [`search`]: Text query matching
//! - [`state`]: The session and its derived state
//!
//! # Example
//!
//! ```rust
//! use facetpage::app::{handle_command, Command, Lifecycle, Session};
//! use facetpage::domain::ItemRecord;
//! use facetpage::ui::Snapshot;
//! use facetpage::Config;
//!
//! let mut session = Session::new(Config::default(), vec![])?;
//! session.subscribe(|event: Lifecycle, snapshot: &Snapshot| {
//!     println!("{event:?}: page {}", snapshot.display_page());
//! });
//! session.load((0..30).map(|i| ItemRecord::new(i.to_string(), "")).collect())?;
//!
//! let snapshot = handle_command(&mut session, &Command::SelectPage { page: 3 })?;
//! assert_eq!(snapshot.current_page, 3);
//! # Ok::<(), facetpage::PagerError>(())
//! ```

pub mod filter;
pub mod handler;
pub mod lifecycle;
pub mod modes;
pub mod search;
pub mod state;

pub use filter::FacetFilterEngine;
pub use handler::{handle_command, Command};
pub use lifecycle::{Lifecycle, SessionObserver};
pub use modes::{FilterMode, SearchMode};
pub use state::Session;
