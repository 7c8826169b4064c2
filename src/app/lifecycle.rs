//! Lifecycle notifications emitted after state transitions.
//!
//! A [`SessionObserver`] is called synchronously once a command has finished
//! and all derived state is consistent. Every hook receives the resulting
//! [`Snapshot`]; all hooks default to doing nothing.
//!
//! | Command                           | Hooks, in order                          |
//! |-----------------------------------|------------------------------------------|
//! | `load`                            | `on_init`                                |
//! | `toggle_facet`, `remove_facet`    | `on_filter_reset` (if emptied), `on_filter_change` |
//! | `reset_facets`                    | `on_filter_reset`                        |
//! | `apply_text_search`               | `on_filter_reset`, `on_update`           |
//! | `sort_by`, `refresh`, `set_items_per_page` | `on_update`                     |
//! | `select_page`, `next_page`, `prev_page` | `on_page_change`                   |
//!
//! # Example
//!
//! ```rust
//! use facetpage::app::SessionObserver;
//! use facetpage::ui::Snapshot;
//!
//! struct PageLogger;
//!
//! impl SessionObserver for PageLogger {
//!     fn on_page_change(&mut self, snapshot: &Snapshot) {
//!         println!("page {} of {}", snapshot.display_page(), snapshot.total_pages);
//!     }
//! }
//! ```

use crate::ui::Snapshot;

/// Kind of transition that produced a snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    Init,
    FilterChange,
    FilterReset,
    Update,
    PageChange,
}

/// Receiver of lifecycle notifications.
pub trait SessionObserver {
    fn on_init(&mut self, _snapshot: &Snapshot) {}
    fn on_filter_change(&mut self, _snapshot: &Snapshot) {}
    fn on_filter_reset(&mut self, _snapshot: &Snapshot) {}
    fn on_update(&mut self, _snapshot: &Snapshot) {}
    fn on_page_change(&mut self, _snapshot: &Snapshot) {}

    /// Dispatches to the hook matching `event`.
    fn notify(&mut self, event: Lifecycle, snapshot: &Snapshot) {
        match event {
            Lifecycle::Init => self.on_init(snapshot),
            Lifecycle::FilterChange => self.on_filter_change(snapshot),
            Lifecycle::FilterReset => self.on_filter_reset(snapshot),
            Lifecycle::Update => self.on_update(snapshot),
            Lifecycle::PageChange => self.on_page_change(snapshot),
        }
    }
}

/// Any `FnMut(Lifecycle, &Snapshot)` closure observes every event.
impl<F> SessionObserver for F
where
    F: FnMut(Lifecycle, &Snapshot),
{
    fn notify(&mut self, event: Lifecycle, snapshot: &Snapshot) {
        self(event, snapshot);
    }
}
