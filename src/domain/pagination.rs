//! Pagination state and page arithmetic.
//!
//! [`PaginationState`] tracks the page size, the current page and the total
//! page count. It upholds two invariants:
//!
//! - `total_pages == max(1, ceil(active_count / items_on_page))`
//! - `current_page < total_pages` (out-of-range assignments are clamped)
//!
//! Page `p` holds the active items at offsets
//! `[p * items_on_page, (p + 1) * items_on_page)`.

use crate::domain::error::{PagerError, Result};

/// Computes the page count for a number of active items.
///
/// Never returns zero: an empty collection still has one (empty) page.
///
/// # Examples
///
/// ```
/// use facetpage::domain::pagination::total_pages_for;
///
/// assert_eq!(total_pages_for(22, 9), 3);
/// assert_eq!(total_pages_for(0, 9), 1);
/// ```
#[must_use]
pub const fn total_pages_for(active_count: usize, items_on_page: usize) -> usize {
    if items_on_page == 0 {
        return 1;
    }
    let pages = active_count.div_ceil(items_on_page);
    if pages == 0 {
        1
    } else {
        pages
    }
}

/// Paging parameters and position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaginationState {
    items_on_page: usize,
    current_page: usize,
    total_pages: usize,
    pub max_displayed_buttons: usize,
    pub min_end_buttons: usize,
    pub first_last_buttons: bool,
}

impl PaginationState {
    /// Creates a state with a single empty page.
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `items_on_page` is zero.
    pub fn new(
        items_on_page: usize,
        max_displayed_buttons: usize,
        min_end_buttons: usize,
        first_last_buttons: bool,
    ) -> Result<Self> {
        if items_on_page == 0 {
            return Err(PagerError::Config(
                "items_on_page must be greater than zero".to_string(),
            ));
        }

        Ok(Self {
            items_on_page,
            current_page: 0,
            total_pages: 1,
            max_displayed_buttons,
            min_end_buttons,
            first_last_buttons,
        })
    }

    #[must_use]
    pub const fn items_on_page(&self) -> usize {
        self.items_on_page
    }

    /// Zero-based index of the current page.
    #[must_use]
    pub const fn current_page(&self) -> usize {
        self.current_page
    }

    #[must_use]
    pub const fn total_pages(&self) -> usize {
        self.total_pages
    }

    /// Changes the page size. The page count is stale until the next
    /// [`recompute`](Self::recompute).
    ///
    /// # Errors
    ///
    /// Returns [`PagerError::Config`] if `items_on_page` is zero.
    pub fn set_items_on_page(&mut self, items_on_page: usize) -> Result<()> {
        if items_on_page == 0 {
            return Err(PagerError::Config(
                "items_on_page must be greater than zero".to_string(),
            ));
        }
        self.items_on_page = items_on_page;
        Ok(())
    }

    /// Recomputes the page count for `active_count` items and re-clamps the
    /// current page.
    pub fn recompute(&mut self, active_count: usize) {
        self.total_pages = total_pages_for(active_count, self.items_on_page);
        self.current_page = self.clamp(self.current_page);
    }

    /// Sets the current page, clamped into `[0, total_pages - 1]`.
    ///
    /// Returns the page actually selected.
    pub fn select(&mut self, page: usize) -> usize {
        self.current_page = self.clamp(page);
        self.current_page
    }

    /// Clamps a page index into the valid range.
    #[must_use]
    pub fn clamp(&self, page: usize) -> usize {
        page.min(self.total_pages.saturating_sub(1))
    }
}
