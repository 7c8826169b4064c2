//! Page-navigation button computation.
//!
//! Given the pagination state, [`page_buttons`] produces the ordered list of
//! navigation buttons to render:
//!
//! ```text
//! [<<] [<] 0 1 … 4 5 [6] 7 8 9 [>] [>>]
//!  │    │  └┬┘ │ └───┬───┘ └┬┘  │   └─ last (optional)
//!  │    │   │  │     │      │   └───── next (when labelled)
//!  │    │   │  │     │      └───────── trailing edge buttons
//!  │    │   │  │     └──────────────── window around the current page
//!  │    │   │  └────────────────────── bridge: ellipsis, or one page if the gap is 1
//!  │    │   └───────────────────────── leading edge buttons
//!  │    └───────────────────────────── prev (when labelled)
//!  └────────────────────────────────── first (optional)
//! ```

use super::viewmodel::{ButtonKind, PageButton};
use crate::domain::PaginationState;
use serde::{Deserialize, Serialize};
use std::ops::Range;

/// Texts of the non-numeric navigation buttons.
///
/// Prev and next buttons are only emitted when their label is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ButtonLabels {
    pub first: String,
    pub prev: Option<String>,
    pub next: Option<String>,
    pub last: String,
    pub ellipsis: String,
}

impl Default for ButtonLabels {
    fn default() -> Self {
        Self {
            first: "<<".to_string(),
            prev: Some("<".to_string()),
            next: Some(">".to_string()),
            last: ">>".to_string(),
            ellipsis: "\u{2026}".to_string(),
        }
    }
}

/// The contiguous range of page indices shown around the current page.
///
/// With `half = max_displayed_buttons / 2`: once the current page is past
/// `half`, the window starts at `ceil(current - half)` (but no later than
/// `total - max_displayed_buttons`) and ends at `ceil(current + half)`;
/// otherwise it is the first `max_displayed_buttons` pages.
///
/// # Examples
///
/// ```
/// use facetpage::domain::PaginationState;
/// use facetpage::ui::windower::window;
///
/// let mut state = PaginationState::new(1, 4, 2, true).unwrap();
/// state.recompute(10);
/// state.select(6);
/// assert_eq!(window(&state), 4..8);
/// ```
#[must_use]
pub fn window(state: &PaginationState) -> Range<usize> {
    let current = state.current_page();
    let total = state.total_pages();
    let max = state.max_displayed_buttons;

    // ceil(current - max/2) and ceil(current + max/2) in integers
    let below = max / 2;
    let above = max - below;

    if current.saturating_mul(2) > max {
        let start = (current - below).min(total.saturating_sub(max)).min(total);
        let end = current.saturating_add(above).min(total);
        start..end.max(start)
    } else {
        0..max.min(total)
    }
}

/// Computes the full button sequence for the current state.
///
/// # Examples
///
/// ```
/// use facetpage::domain::PaginationState;
/// use facetpage::ui::windower::{page_buttons, ButtonLabels};
///
/// let mut state = PaginationState::new(1, 4, 2, false).unwrap();
/// state.recompute(10);
/// state.select(5);
///
/// let labels = ButtonLabels { prev: None, next: None, ..ButtonLabels::default() };
/// let pages: Vec<Option<usize>> = page_buttons(&state, &labels)
///     .iter()
///     .map(|button| button.page_index())
///     .collect();
///
/// // leading edges 0-1, bridge page 2, window 3-6, bridge page 7, trailing edges 8-9
/// assert_eq!(pages, (0..10).map(Some).collect::<Vec<_>>());
/// ```
#[must_use]
pub fn page_buttons(state: &PaginationState, labels: &ButtonLabels) -> Vec<PageButton> {
    let current = state.current_page();
    let total = state.total_pages();
    let min_end = state.min_end_buttons;
    let Range { start, mut end } = window(state);

    let edges = min_end.min(total).saturating_mul(2);
    let mut buttons = Vec::with_capacity((end - start).saturating_add(edges).saturating_add(6));
    let page = |index: usize, kind: ButtonKind, label: Option<&str>| {
        let index = state.clamp(index);
        PageButton::Page {
            page_index: index,
            label: label.map_or_else(|| (index + 1).to_string(), str::to_string),
            kind,
            is_current: index == current,
        }
    };
    let ellipsis = || PageButton::Ellipsis {
        label: labels.ellipsis.clone(),
    };

    if state.first_last_buttons {
        buttons.push(page(0, ButtonKind::First, Some(labels.first.as_str())));
    }
    if let Some(prev) = &labels.prev {
        buttons.push(page(current.saturating_sub(1), ButtonKind::Prev, Some(prev.as_str())));
    }

    if start > 0 && min_end > 0 {
        for index in 0..min_end.min(start) {
            buttons.push(page(index, ButtonKind::Number, None));
        }
        if start.checked_sub(min_end) == Some(1) {
            buttons.push(page(min_end, ButtonKind::Number, None));
        } else if start > min_end {
            buttons.push(ellipsis());
        }
    }

    for index in start..end {
        buttons.push(page(index, ButtonKind::Number, None));
    }

    if end < total && min_end > 0 {
        let trailing = total.saturating_sub(min_end);
        if trailing == end + 1 {
            buttons.push(page(end, ButtonKind::Number, None));
            end += 1;
        } else if trailing > end {
            buttons.push(ellipsis());
        }
        for index in trailing.max(end)..total {
            buttons.push(page(index, ButtonKind::Number, None));
        }
    }

    if let Some(next) = &labels.next {
        buttons.push(page(current + 1, ButtonKind::Next, Some(next.as_str())));
    }
    if state.first_last_buttons {
        buttons.push(page(total, ButtonKind::Last, Some(labels.last.as_str())));
    }

    buttons
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(total: usize, max: usize, min_end: usize, current: usize) -> PaginationState {
        let mut state = PaginationState::new(1, max, min_end, true).unwrap();
        state.recompute(total);
        state.select(current);
        state
    }

    /// Renders buttons compactly: numbers for pages, `…` for ellipses,
    /// `*` marks the current page, nav buttons by label.
    fn render(buttons: &[PageButton]) -> String {
        buttons
            .iter()
            .map(|button| match button {
                PageButton::Ellipsis { .. } => "…".to_string(),
                PageButton::Page { page_index, kind: ButtonKind::Number, is_current, .. } => {
                    format!("{page_index}{}", if *is_current { "*" } else { "" })
                }
                PageButton::Page { label, page_index, .. } => format!("{label}{page_index}"),
            })
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[test]
    fn middle_page_with_wide_gaps_uses_ellipses() {
        let state = state(20, 4, 2, 10);
        assert_eq!(window(&state), 8..12);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <9 0 1 … 8 9 10* 11 … 18 19 >11 >>19"
        );
    }

    #[test]
    fn window_touching_trailing_edges_needs_no_bridge() {
        let state = state(10, 4, 2, 6);
        assert_eq!(window(&state), 4..8);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <5 0 1 … 4 5 6* 7 8 9 >7 >>9"
        );
    }

    #[test]
    fn single_page_gaps_are_bridged_with_buttons() {
        let state = state(10, 4, 2, 5);
        assert_eq!(window(&state), 3..7);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <4 0 1 2 3 4 5* 6 7 8 9 >6 >>9"
        );
    }

    #[test]
    fn odd_button_count_rounds_window_up() {
        let state = state(10, 3, 2, 5);
        assert_eq!(window(&state), 4..7);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <4 0 1 … 4 5* 6 7 8 9 >6 >>9"
        );
    }

    #[test]
    fn first_page_marks_nav_buttons_current() {
        let state = state(10, 3, 2, 0);
        let buttons = page_buttons(&state, &ButtonLabels::default());
        assert_eq!(render(&buttons), "<<0 <0 0* 1 2 … 8 9 >1 >>9");
        assert!(!buttons[0].is_interactive());
        assert!(!buttons[1].is_interactive());
    }

    #[test]
    fn last_page_clamps_next_button() {
        let state = state(10, 3, 2, 9);
        assert_eq!(window(&state), 7..10);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <8 0 1 … 7 8 9* >9 >>9"
        );
    }

    #[test]
    fn single_page_has_one_number_button() {
        let state = state(0, 3, 2, 0);
        assert_eq!(render(&page_buttons(&state, &ButtonLabels::default())), "<<0 <0 0* >0 >>0");
    }

    #[test]
    fn no_edges_when_min_end_buttons_is_zero() {
        let state = state(20, 4, 0, 10);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <9 8 9 10* 11 >11 >>19"
        );
    }

    #[test]
    fn optional_nav_buttons_can_be_disabled() {
        let mut state = PaginationState::new(1, 3, 1, false).unwrap();
        state.recompute(3);
        let labels = ButtonLabels {
            prev: None,
            next: None,
            ..ButtonLabels::default()
        };
        assert_eq!(render(&page_buttons(&state, &labels)), "0* 1 2");
    }

    #[test]
    fn oversized_button_counts_show_every_page() {
        let all_pages = "<<0 <4 0 1 2 3 4 5* 6 7 8 9 >6 >>9";
        let labels = ButtonLabels::default();

        let huge = state(10, usize::MAX, usize::MAX, 5);
        assert_eq!(window(&huge), 0..10);
        assert_eq!(render(&page_buttons(&huge, &labels)), all_pages);

        let huge_edges = state(10, 3, usize::MAX, 5);
        assert_eq!(render(&page_buttons(&huge_edges, &labels)), all_pages);

        let huge_window = state(10, usize::MAX / 2 + 1, 2, 5);
        assert_eq!(render(&page_buttons(&huge_window, &labels)), all_pages);
    }

    #[test]
    fn edges_overlapping_window_are_not_repeated() {
        let state = state(6, 3, 3, 3);
        assert_eq!(window(&state), 2..5);
        assert_eq!(
            render(&page_buttons(&state, &ButtonLabels::default())),
            "<<0 <2 0 1 2 3* 4 5 >4 >>5"
        );
    }
}
