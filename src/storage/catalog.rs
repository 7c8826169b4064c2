//! Distinct facet values over a set of items.
//!
//! A [`FacetCatalog`] records, for each declared facet, which values occur in
//! a given subset of items and how often. The session builds one over the
//! whole collection (the options to render) and one over the active items
//! (the options that are still available).

use crate::domain::{FacetId, Item};
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;

/// Facet values, with occurrence counts when counting is enabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetCatalog {
    counted: bool,
    entries: BTreeMap<FacetId, BTreeMap<String, usize>>,
}

impl FacetCatalog {
    /// Builds a catalog over `items` for the facets in `schema`.
    ///
    /// Items without a value for a facet are left out of that facet's entry.
    /// When `count_values` is false the catalog records presence only and
    /// [`count`](Self::count) returns `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::domain::{FacetId, Item, ItemRecord};
    /// use facetpage::storage::FacetCatalog;
    ///
    /// let color = FacetId::new("style", "color");
    /// let items = vec![
    ///     Item::from_record(ItemRecord::new("a", "").with_facet("style", "color", "red"), 0),
    ///     Item::from_record(ItemRecord::new("b", "").with_facet("style", "color", "red"), 1),
    ///     Item::from_record(ItemRecord::new("c", ""), 2),
    /// ];
    ///
    /// let catalog = FacetCatalog::compute(&items, &[color.clone()], true);
    /// assert_eq!(catalog.count(&color, "red"), Some(2));
    /// assert!(!catalog.contains(&color, "blue"));
    /// ```
    pub fn compute<'a, I>(items: I, schema: &[FacetId], count_values: bool) -> Self
    where
        I: IntoIterator<Item = &'a Item>,
    {
        let mut entries: BTreeMap<FacetId, BTreeMap<String, usize>> = BTreeMap::new();

        for item in items {
            for facet in schema {
                if let Some(value) = item.facet(facet) {
                    *entries
                        .entry(facet.clone())
                        .or_default()
                        .entry(value.to_string())
                        .or_insert(0) += 1;
                }
            }
        }

        Self {
            counted: count_values,
            entries,
        }
    }

    #[must_use]
    pub const fn is_counted(&self) -> bool {
        self.counted
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn contains(&self, facet: &FacetId, value: &str) -> bool {
        self.entries
            .get(facet)
            .is_some_and(|values| values.contains_key(value))
    }

    /// Occurrences of `value`; `Some(0)` when counted but absent, `None` when
    /// the catalog does not count.
    #[must_use]
    pub fn count(&self, facet: &FacetId, value: &str) -> Option<usize> {
        if !self.counted {
            return None;
        }
        Some(
            self.entries
                .get(facet)
                .and_then(|values| values.get(value))
                .copied()
                .unwrap_or(0),
        )
    }

    /// Distinct values of a facet in lexical order.
    pub fn values<'a>(&'a self, facet: &FacetId) -> impl Iterator<Item = &'a str> + 'a {
        self.entries
            .get(facet)
            .into_iter()
            .flat_map(|values| values.keys().map(String::as_str))
    }

    pub fn facets(&self) -> impl Iterator<Item = &FacetId> {
        self.entries.keys()
    }
}

/// Serializes as `{ "category.field": { "value": count | null } }`.
impl Serialize for FacetCatalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (facet, values) in &self.entries {
            let values: BTreeMap<&str, Option<usize>> = values
                .iter()
                .map(|(value, count)| (value.as_str(), self.counted.then_some(*count)))
                .collect();
            map.serialize_entry(&facet.to_string(), &values)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ItemRecord;

    fn items() -> Vec<Item> {
        vec![
            ItemRecord::new("a", "").with_facet("style", "color", "red").with_facet("style", "size", "M"),
            ItemRecord::new("b", "").with_facet("style", "color", "blue").with_facet("style", "size", "M"),
            ItemRecord::new("c", "").with_facet("style", "color", "red").with_facet("extra", "tag", "x"),
        ]
        .into_iter()
        .enumerate()
        .map(|(order, record)| Item::from_record(record, order))
        .collect()
    }

    #[test]
    fn counts_values_per_declared_facet() {
        let color = FacetId::new("style", "color");
        let size = FacetId::new("style", "size");
        let catalog = FacetCatalog::compute(&items(), &[color.clone(), size.clone()], true);

        assert_eq!(catalog.count(&color, "red"), Some(2));
        assert_eq!(catalog.count(&color, "blue"), Some(1));
        assert_eq!(catalog.count(&size, "M"), Some(2));
        assert_eq!(catalog.count(&size, "L"), Some(0));
        assert_eq!(catalog.values(&color).collect::<Vec<_>>(), vec!["blue", "red"]);
    }

    #[test]
    fn undeclared_facets_are_ignored() {
        let tag = FacetId::new("extra", "tag");
        let catalog = FacetCatalog::compute(&items(), &[FacetId::new("style", "color")], false);
        assert!(!catalog.contains(&tag, "x"));
        assert_eq!(catalog.facets().count(), 1);
    }

    #[test]
    fn presence_only_catalog_has_no_counts() {
        let color = FacetId::new("style", "color");
        let catalog = FacetCatalog::compute(&items(), &[color.clone()], false);
        assert!(catalog.contains(&color, "red"));
        assert_eq!(catalog.count(&color, "red"), None);
    }

    #[test]
    fn serializes_with_dotted_facet_keys() {
        let color = FacetId::new("style", "color");
        let counted = FacetCatalog::compute(&items(), &[color.clone()], true);
        let json = serde_json::to_value(&counted).unwrap();
        assert_eq!(json["style.color"]["red"], 2);

        let presence = FacetCatalog::compute(&items(), &[color], false);
        let json = serde_json::to_value(&presence).unwrap();
        assert!(json["style.color"]["red"].is_null());
    }
}
