//! Facet value selection.
//!
//! A [`Selection`] maps each filtered facet to the set of values the user has
//! chosen. A facet present in the selection always has at least one value:
//! removing the last value drops the facet entirely.

use super::item::{FacetId, Item};
use std::collections::{BTreeMap, BTreeSet};

/// Currently selected facet values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    values: BTreeMap<FacetId, BTreeSet<String>>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `value` if absent, removes it if present.
    ///
    /// Returns `true` when the value is selected after the call.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::domain::{FacetId, Selection};
    ///
    /// let color = FacetId::new("style", "color");
    /// let mut selection = Selection::new();
    ///
    /// assert!(selection.toggle(&color, "red"));
    /// assert!(!selection.toggle(&color, "red"));
    /// assert!(selection.is_empty());
    /// ```
    pub fn toggle(&mut self, facet: &FacetId, value: &str) -> bool {
        if self.remove(facet, value) {
            false
        } else {
            self.values
                .entry(facet.clone())
                .or_default()
                .insert(value.to_string());
            true
        }
    }

    /// Removes `value` from `facet`. Absent entries are a no-op.
    ///
    /// Returns `true` when something was removed.
    pub fn remove(&mut self, facet: &FacetId, value: &str) -> bool {
        let Some(selected) = self.values.get_mut(facet) else {
            return false;
        };

        let removed = selected.remove(value);
        if selected.is_empty() {
            self.values.remove(facet);
        }
        removed
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[must_use]
    pub fn contains(&self, facet: &FacetId, value: &str) -> bool {
        self.values
            .get(facet)
            .is_some_and(|selected| selected.contains(value))
    }

    /// Values selected for one facet, if any.
    #[must_use]
    pub fn values(&self, facet: &FacetId) -> Option<&BTreeSet<String>> {
        self.values.get(facet)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FacetId, &BTreeSet<String>)> {
        self.values.iter()
    }

    /// Whether an item satisfies the selection.
    ///
    /// Every selected facet must be matched (AND across facets); within a
    /// facet, any selected value matches (OR within a facet). An item without
    /// a value for a selected facet never matches it. An empty selection
    /// matches everything.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        self.values.iter().all(|(facet, selected)| {
            item.facet(facet)
                .is_some_and(|value| selected.contains(value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;

    fn color() -> FacetId {
        FacetId::new("style", "color")
    }

    #[test]
    fn removing_last_value_drops_the_facet() {
        let mut selection = Selection::new();
        selection.toggle(&color(), "red");
        selection.toggle(&color(), "blue");

        assert!(selection.remove(&color(), "red"));
        assert_eq!(selection.values(&color()).map(BTreeSet::len), Some(1));

        assert!(selection.remove(&color(), "blue"));
        assert!(selection.values(&color()).is_none());
        assert!(selection.is_empty());
    }

    #[test]
    fn removing_absent_value_is_a_noop() {
        let mut selection = Selection::new();
        assert!(!selection.remove(&color(), "red"));

        selection.toggle(&color(), "blue");
        assert!(!selection.remove(&color(), "red"));
        assert!(selection.contains(&color(), "blue"));
    }

    #[test]
    fn item_without_facet_value_never_matches_it() {
        let item = Item::from_record(ItemRecord::new("a", "plain"), 0);
        let mut selection = Selection::new();
        assert!(selection.matches(&item));

        selection.toggle(&color(), "red");
        assert!(!selection.matches(&item));
    }
}
