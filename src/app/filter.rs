//! Facet filter engine.
//!
//! [`FacetFilterEngine`] owns the facet [`Selection`] and the declared facet
//! schema. It answers two questions for the session: which items are active
//! under the selection, and which facet values remain available among them.

use crate::domain::error::{PagerError, Result};
use crate::domain::{FacetId, Item, Selection};
use crate::storage::FacetCatalog;
use std::collections::BTreeSet;

/// Selection state plus the facet schema it is validated against.
#[derive(Debug, Clone, Default)]
pub struct FacetFilterEngine {
    schema: Vec<FacetId>,
    selection: Selection,
}

impl FacetFilterEngine {
    #[must_use]
    pub fn new(schema: Vec<FacetId>) -> Self {
        Self {
            schema,
            selection: Selection::new(),
        }
    }

    #[must_use]
    pub fn schema(&self) -> &[FacetId] {
        &self.schema
    }

    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    fn check(&self, facet: &FacetId) -> Result<()> {
        if self.schema.contains(facet) {
            Ok(())
        } else {
            Err(PagerError::UnknownFacet(facet.clone()))
        }
    }

    /// Selects `value` if unselected, deselects it otherwise.
    ///
    /// Returns `true` when the value is selected afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::UnknownFacet`] if `facet` is not in the schema.
    pub fn toggle(&mut self, facet: &FacetId, value: &str) -> Result<bool> {
        self.check(facet)?;
        Ok(self.selection.toggle(facet, value))
    }

    /// Deselects `value`; a no-op when it is not selected.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::UnknownFacet`] if `facet` is not in the schema.
    pub fn remove(&mut self, facet: &FacetId, value: &str) -> Result<bool> {
        self.check(facet)?;
        Ok(self.selection.remove(facet, value))
    }

    pub fn reset(&mut self) {
        self.selection.clear();
    }

    /// Whether `item` passes the current selection.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.selection.matches(item)
    }

    /// Ids of the items passing the current selection.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::app::FacetFilterEngine;
    /// use facetpage::domain::{FacetId, Item, ItemRecord};
    ///
    /// let color = FacetId::new("style", "color");
    /// let items = vec![
    ///     Item::from_record(ItemRecord::new("a", "").with_facet("style", "color", "red"), 0),
    ///     Item::from_record(ItemRecord::new("b", "").with_facet("style", "color", "blue"), 1),
    /// ];
    ///
    /// let mut engine = FacetFilterEngine::new(vec![color.clone()]);
    /// engine.toggle(&color, "red")?;
    /// assert_eq!(engine.compute_active(&items).into_iter().collect::<Vec<_>>(), vec!["a"]);
    /// # Ok::<(), facetpage::PagerError>(())
    /// ```
    #[must_use]
    pub fn compute_active(&self, items: &[Item]) -> BTreeSet<String> {
        items
            .iter()
            .filter(|item| self.matches(item))
            .map(|item| item.id.clone())
            .collect()
    }

    /// Catalog of the values still present among `active_items`.
    ///
    /// A value is available iff it appears here. Callers that display
    /// options also treat selected values as available, see
    /// [`is_available`](Self::is_available).
    pub fn compute_availability<'a, I>(&self, active_items: I, count_values: bool) -> FacetCatalog
    where
        I: IntoIterator<Item = &'a Item>,
    {
        FacetCatalog::compute(active_items, &self.schema, count_values)
    }

    /// Whether an option should be clickable given an availability catalog.
    #[must_use]
    pub fn is_available(&self, availability: &FacetCatalog, facet: &FacetId, value: &str) -> bool {
        self.selection.contains(facet, value) || availability.contains(facet, value)
    }
}
