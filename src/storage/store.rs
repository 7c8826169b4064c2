//! Ordered in-memory item collection.
//!
//! [`ItemStore`] owns the items in display order. An item's position in the
//! store is its `order`, which is what page partitioning follows. The store
//! also carries each item's derived `active` flag, written only by the
//! session when it recomputes the filter.

use crate::domain::error::{PagerError, Result};
use crate::domain::{Item, ItemRecord};
use std::collections::{HashMap, HashSet};

/// Ordered item collection.
#[derive(Debug, Clone, Default)]
pub struct ItemStore {
    items: Vec<Item>,
}

impl ItemStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the collection, assigning `order` by input position and
    /// marking every item active.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::DuplicateItemId`] if two records share an id. The
    /// store is left unchanged in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::domain::ItemRecord;
    /// use facetpage::storage::ItemStore;
    ///
    /// let mut store = ItemStore::new();
    /// store.load(vec![ItemRecord::new("a", "Alpha"), ItemRecord::new("b", "Beta")])?;
    /// assert_eq!(store.active_count(), 2);
    ///
    /// let duplicate = store.load(vec![ItemRecord::new("a", ""), ItemRecord::new("a", "")]);
    /// assert!(duplicate.is_err());
    /// assert_eq!(store.len(), 2);
    /// # Ok::<(), facetpage::PagerError>(())
    /// ```
    pub fn load(&mut self, records: Vec<ItemRecord>) -> Result<()> {
        let _span = tracing::debug_span!("store_load", count = records.len()).entered();

        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id.as_str()) {
                tracing::debug!(item_id = %record.id, "duplicate item id in load");
                return Err(PagerError::DuplicateItemId(record.id.clone()));
            }
        }

        self.items = records
            .into_iter()
            .enumerate()
            .map(|(order, record)| Item::from_record(record, order))
            .collect();

        tracing::debug!(item_count = self.items.len(), "items loaded");
        Ok(())
    }

    /// Items in store order.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Applies a permutation given as the full list of ids in their new order.
    ///
    /// After the call every item's `order` equals its new position.
    ///
    /// # Errors
    ///
    /// - [`PagerError::UnknownItem`] if an id is not in the store
    /// - [`PagerError::Reorder`] if ids are repeated or missing
    pub fn reorder(&mut self, new_order: &[String]) -> Result<()> {
        if new_order.len() != self.items.len() {
            return Err(PagerError::Reorder(format!(
                "expected {} ids, got {}",
                self.items.len(),
                new_order.len()
            )));
        }

        let mut by_id: HashMap<&str, usize> = self
            .items
            .iter()
            .enumerate()
            .map(|(idx, item)| (item.id.as_str(), idx))
            .collect();

        let mut positions = Vec::with_capacity(new_order.len());
        for id in new_order {
            let Some(idx) = by_id.remove(id.as_str()) else {
                return Err(if self.get(id).is_some() {
                    PagerError::Reorder(format!("id listed twice: {id}"))
                } else {
                    PagerError::UnknownItem(id.clone())
                });
            };
            positions.push(idx);
        }

        let mut old: Vec<Option<Item>> = std::mem::take(&mut self.items)
            .into_iter()
            .map(Some)
            .collect();

        self.items = positions
            .into_iter()
            .enumerate()
            .filter_map(|(order, idx)| {
                old[idx].take().map(|mut item| {
                    item.order = order;
                    item
                })
            })
            .collect();

        Ok(())
    }

    /// Recomputes every item's `active` flag. Returns the new active count.
    pub(crate) fn set_active<F>(&mut self, mut predicate: F) -> usize
    where
        F: FnMut(&Item) -> bool,
    {
        let mut count = 0;
        for item in &mut self.items {
            item.active = predicate(item);
            if item.active {
                count += 1;
            }
        }
        count
    }

    /// Active items in store order.
    pub fn active_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|item| item.active)
    }

    #[must_use]
    pub fn active_count(&self) -> usize {
        self.active_items().count()
    }

    /// Active items at offsets `[page * items_on_page, (page + 1) * items_on_page)`.
    #[must_use]
    pub fn page(&self, page: usize, items_on_page: usize) -> Vec<&Item> {
        self.active_items()
            .skip(page.saturating_mul(items_on_page))
            .take(items_on_page)
            .collect()
    }
}
