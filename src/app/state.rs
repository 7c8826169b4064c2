//! Session state and command execution.
//!
//! [`Session`] is the single owner of an item collection and everything
//! derived from it: the facet selection, the text query, pagination and the
//! availability catalog. Every command runs to completion, leaves the session
//! consistent, notifies observers and returns the resulting [`Snapshot`].
//!
//! # Derived State
//!
//! After each filtering command the session recomputes, in order:
//!
//! 1. The active flag of every item (text query if one is set, facet
//!    selection otherwise)
//! 2. `total_pages` from the active count, re-clamping the current page
//! 3. The availability catalog over the active items
//!
//! Page navigation only moves the current page.
//!
//! # Example
//!
//! ```rust
//! use facetpage::app::Session;
//! use facetpage::domain::{FacetId, ItemRecord};
//! use facetpage::Config;
//!
//! let color = FacetId::new("style", "color");
//! let mut session = Session::new(Config::default(), vec![color.clone()])?;
//!
//! let records = (0..22)
//!     .map(|i| {
//!         let value = if i % 2 == 0 { "red" } else { "blue" };
//!         ItemRecord::new(format!("item-{i}"), format!("Item {i}")).with_facet("style", "color", value)
//!     })
//!     .collect();
//! let snapshot = session.load(records)?;
//! assert_eq!(snapshot.total_pages, 3);
//!
//! let snapshot = session.select_page(5);
//! assert_eq!(snapshot.current_page, 2);
//!
//! let snapshot = session.toggle_facet(&color, "red")?;
//! assert_eq!(snapshot.active_count, 11);
//! assert_eq!(snapshot.current_page, 0);
//! # Ok::<(), facetpage::PagerError>(())
//! ```

use super::filter::FacetFilterEngine;
use super::lifecycle::{Lifecycle, SessionObserver};
use super::modes::FilterMode;
use super::search::TextMatcher;
use crate::domain::error::{PagerError, Result};
use crate::domain::{FacetId, Item, ItemRecord, PaginationState, Selection};
use crate::storage::{sort_order, FacetCatalog, ItemStore, SortDirection, SortKey};
use crate::ui::viewmodel::{FacetGroup, FacetOption, Snapshot};
use crate::ui::windower::page_buttons;
use crate::Config;
use std::collections::BTreeSet;

/// Paginated, filterable view over one item collection.
pub struct Session {
    config: Config,
    store: ItemStore,
    engine: FacetFilterEngine,
    pagination: PaginationState,
    mode: FilterMode,
    query: Option<String>,
    matcher: Option<TextMatcher>,

    /// Every facet value of the loaded collection.
    listing: FacetCatalog,

    /// Facet values present among the active items.
    availability: FacetCatalog,

    observers: Vec<Box<dyn SessionObserver>>,
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("config", &self.config)
            .field("items", &self.store.len())
            .field("pagination", &self.pagination)
            .field("mode", &self.mode)
            .field("query", &self.query)
            .field("selection", self.engine.selection())
            .field("observers", &self.observers.len())
            .finish_non_exhaustive()
    }
}

impl Session {
    /// Creates an empty session for the given facet schema.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `config` fails validation.
    pub fn new(config: Config, schema: Vec<FacetId>) -> Result<Self> {
        config.validate()?;

        let pagination = PaginationState::new(
            config.items_on_page,
            config.max_displayed_buttons,
            config.min_end_buttons,
            config.first_last_buttons,
        )?;
        let engine = FacetFilterEngine::new(schema);
        let listing = FacetCatalog::compute(std::iter::empty::<&Item>(), engine.schema(), false);
        let availability = FacetCatalog::compute(
            std::iter::empty::<&Item>(),
            engine.schema(),
            config.show_facet_counts,
        );

        Ok(Self {
            config,
            store: ItemStore::new(),
            engine,
            pagination,
            mode: FilterMode::Facets,
            query: None,
            matcher: None,
            listing,
            availability,
            observers: Vec::new(),
        })
    }

    /// Registers an observer for lifecycle notifications.
    pub fn subscribe<O>(&mut self, observer: O)
    where
        O: SessionObserver + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Replaces the item collection and resets all filters.
    ///
    /// The current page starts at the configured `start_page`, clamped to
    /// the page count. Fires `on_init`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::DuplicateItemId`] if two records share an id;
    /// the session is left unchanged.
    pub fn load(&mut self, records: Vec<ItemRecord>) -> Result<Snapshot> {
        let _span = tracing::debug_span!("load", records = records.len()).entered();

        self.store.load(records)?;
        self.listing = FacetCatalog::compute(self.store.items(), self.engine.schema(), false);
        self.engine.reset();
        self.clear_query();
        self.recompute();
        self.pagination
            .select(self.config.start_page.saturating_sub(1));

        Ok(self.emit(&[Lifecycle::Init]))
    }

    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    #[must_use]
    pub const fn store(&self) -> &ItemStore {
        &self.store
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.pagination.total_pages()
    }

    /// One-based current page, for display.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.pagination.current_page() + 1
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.store.active_count()
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        self.engine.selection()
    }

    #[must_use]
    pub fn query(&self) -> Option<&str> {
        self.query.as_deref()
    }

    #[must_use]
    pub const fn filter_mode(&self) -> FilterMode {
        self.mode
    }

    /// Active items on the zero-based `page`; empty past the last page.
    #[must_use]
    pub fn page_items(&self, page: usize) -> Vec<&Item> {
        self.store.page(page, self.pagination.items_on_page())
    }

    /// Builds the read-only view of the current state.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        let selection = self.engine.selection();

        let facets = self
            .engine
            .schema()
            .iter()
            .map(|facet| {
                // selected values stay listed even when no loaded item carries them
                let values: BTreeSet<&str> = self
                    .listing
                    .values(facet)
                    .chain(selection.values(facet).into_iter().flatten().map(String::as_str))
                    .collect();

                FacetGroup {
                    facet: facet.clone(),
                    options: values
                        .into_iter()
                        .map(|value| FacetOption {
                            value: value.to_string(),
                            count: self.availability.count(facet, value),
                            available: self.engine.is_available(&self.availability, facet, value),
                            selected: selection.contains(facet, value),
                        })
                        .collect(),
                }
            })
            .collect();

        let current_page = self.pagination.current_page();

        Snapshot {
            total_pages: self.pagination.total_pages(),
            current_page,
            active_count: self.store.active_count(),
            facet_catalog: self.availability.clone(),
            page_buttons: page_buttons(&self.pagination, &self.config.labels),
            facets,
            visible_items: self
                .page_items(current_page)
                .into_iter()
                .map(|item| item.id.clone())
                .collect(),
            query: self.query.clone(),
            reset_visible: !selection.is_empty(),
        }
    }

    /// Moves to the zero-based `page`, clamped into range. Fires `on_page_change`.
    pub fn select_page(&mut self, page: usize) -> Snapshot {
        let selected = self.pagination.select(page);
        tracing::debug!(requested = page, selected, "page selected");
        self.emit(&[Lifecycle::PageChange])
    }

    /// Moves one page forward; a no-op on the last page.
    pub fn next_page(&mut self) -> Snapshot {
        let current = self.pagination.current_page();
        if current + 1 >= self.pagination.total_pages() {
            return self.snapshot();
        }
        self.select_page(current + 1)
    }

    /// Moves one page back; a no-op on the first page.
    pub fn prev_page(&mut self) -> Snapshot {
        match self.pagination.current_page().checked_sub(1) {
            Some(page) => self.select_page(page),
            None => self.snapshot(),
        }
    }

    /// Changes the page size and returns to the first page. Fires `on_update`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `items_on_page` is zero.
    pub fn set_items_per_page(&mut self, items_on_page: usize) -> Result<Snapshot> {
        self.pagination.set_items_on_page(items_on_page)?;
        self.recompute();
        self.pagination.select(0);
        Ok(self.emit(&[Lifecycle::Update]))
    }

    /// Toggles a facet value, leaving text search mode.
    ///
    /// Fires `on_filter_reset` if the selection became empty, then
    /// `on_filter_change`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::UnknownFacet`] if `facet` is not in the schema.
    pub fn toggle_facet(&mut self, facet: &FacetId, value: &str) -> Result<Snapshot> {
        let selected = self.engine.toggle(facet, value)?;
        tracing::debug!(facet = %facet, value, selected, "facet toggled");
        Ok(self.after_selection_change())
    }

    /// Deselects a facet value; deselecting an unselected value still
    /// recomputes and notifies.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::UnknownFacet`] if `facet` is not in the schema.
    pub fn remove_facet(&mut self, facet: &FacetId, value: &str) -> Result<Snapshot> {
        let removed = self.engine.remove(facet, value)?;
        tracing::debug!(facet = %facet, value, removed, "facet removed");
        Ok(self.after_selection_change())
    }

    /// Clears the selection and the text query. Fires `on_filter_reset`.
    pub fn reset_facets(&mut self) -> Snapshot {
        self.engine.reset();
        self.clear_query();
        self.recompute();
        self.pagination.select(0);
        self.emit(&[Lifecycle::FilterReset])
    }

    /// Filters by item text, clearing the facet selection.
    ///
    /// Patterns of two characters or fewer keep every item active.
    /// Fires `on_filter_reset`, then `on_update`.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::SearchDisabled`] unless search is enabled in
    /// the configuration.
    pub fn apply_text_search(&mut self, pattern: &str) -> Result<Snapshot> {
        if !self.config.search_enabled {
            return Err(PagerError::SearchDisabled);
        }

        tracing::trace!(query = %pattern, "text search updated");

        self.engine.reset();
        self.mode = FilterMode::Text;
        self.query = (!pattern.is_empty()).then(|| pattern.to_string());
        self.matcher = TextMatcher::new(pattern, self.config.search_mode);
        self.recompute();
        self.pagination.select(0);

        Ok(self.emit(&[Lifecycle::FilterReset, Lifecycle::Update]))
    }

    /// Reorders the collection and returns to the first page. Fires `on_update`.
    ///
    /// `SortDirection::Asc` yields a descending order; see
    /// [`sort_order`](crate::storage::sort_order).
    ///
    /// # Errors
    ///
    /// Propagates [`ItemStore::reorder`] failures, which indicate a
    /// corrupted store.
    pub fn sort_by(&mut self, key: &SortKey, direction: SortDirection) -> Result<Snapshot> {
        let order = sort_order(self.store.items(), key, direction);
        self.store.reorder(&order)?;
        self.recompute();
        self.pagination.select(0);
        Ok(self.emit(&[Lifecycle::Update]))
    }

    /// Recomputes all derived state without changing inputs. Fires `on_update`.
    pub fn refresh(&mut self) -> Snapshot {
        self.recompute();
        self.emit(&[Lifecycle::Update])
    }

    fn after_selection_change(&mut self) -> Snapshot {
        self.clear_query();
        self.recompute();
        self.pagination.select(0);

        if self.engine.selection().is_empty() {
            self.emit(&[Lifecycle::FilterReset, Lifecycle::FilterChange])
        } else {
            self.emit(&[Lifecycle::FilterChange])
        }
    }

    fn clear_query(&mut self) {
        self.mode = FilterMode::Facets;
        self.query = None;
        self.matcher = None;
    }

    fn recompute(&mut self) {
        let _span = tracing::debug_span!("recompute", mode = ?self.mode).entered();

        let active_count = match &self.matcher {
            Some(matcher) => self.store.set_active(|item| matcher.matches(item)),
            None => {
                let engine = &self.engine;
                self.store.set_active(|item| engine.matches(item))
            }
        };

        self.pagination.recompute(active_count);
        self.availability = self
            .engine
            .compute_availability(self.store.active_items(), self.config.show_facet_counts);

        tracing::debug!(
            active_count,
            total_pages = self.pagination.total_pages(),
            current_page = self.pagination.current_page(),
            "derived state recomputed"
        );
    }

    fn emit(&mut self, events: &[Lifecycle]) -> Snapshot {
        let snapshot = self.snapshot();
        for event in events {
            for observer in &mut self.observers {
                observer.notify(*event, &snapshot);
            }
        }
        snapshot
    }
}
