//! Property-based invariant tests for pagination and filtering.
//!
//! These tests verify structural invariants that must hold for **any** item
//! count, page size and button configuration:
//!
//! 1. `total_pages == max(1, ceil(active / items_on_page))`.
//! 2. Pages partition the active items: no overlap, nothing missing, store order.
//! 3. The current page is always in range after any command.
//! 4. Numbered buttons are strictly increasing and in range.
//! 5. The current page appears exactly once among numbered buttons.
//! 6. `reset_facets` restores the initial active set after any toggle sequence.
//! 7. `refresh` is idempotent.

use facetpage::app::Session;
use facetpage::domain::{FacetId, ItemRecord, PaginationState};
use facetpage::ui::{page_buttons, ButtonKind, ButtonLabels, PageButton};
use facetpage::Config;
use proptest::prelude::*;

// ── Helpers ───────────────────────────────────────────────────────────────

const COLORS: [&str; 4] = ["red", "green", "blue", "black"];
const SIZES: [&str; 3] = ["S", "M", "L"];

fn color() -> FacetId {
    FacetId::new("style", "color")
}

fn size() -> FacetId {
    FacetId::new("style", "size")
}

fn records(count: usize) -> Vec<ItemRecord> {
    (0..count)
        .map(|i| {
            let mut record = ItemRecord::new(format!("item-{i:04}"), format!("Item {i}"))
                .with_facet("style", "color", COLORS[i % COLORS.len()]);
            // every fifth item has no size
            if i % 5 != 0 {
                record = record.with_facet("style", "size", SIZES[i % SIZES.len()]);
            }
            record
        })
        .collect()
}

fn session(count: usize, items_on_page: usize) -> Session {
    let config = Config {
        items_on_page,
        ..Config::default()
    };
    let mut session = Session::new(config, vec![color(), size()]).unwrap();
    session.load(records(count)).unwrap();
    session
}

fn active_ids(session: &Session) -> Vec<String> {
    session
        .store()
        .active_items()
        .map(|item| item.id.clone())
        .collect()
}

fn numbered(buttons: &[PageButton]) -> Vec<(usize, bool)> {
    buttons
        .iter()
        .filter_map(|button| match button {
            PageButton::Page {
                page_index,
                kind: ButtonKind::Number,
                is_current,
                ..
            } => Some((*page_index, *is_current)),
            _ => None,
        })
        .collect()
}

// ── Strategies ────────────────────────────────────────────────────────────

/// A toggle of one facet value; `true` picks the color facet.
fn toggle() -> impl Strategy<Value = (bool, usize)> {
    (any::<bool>(), 0usize..4)
}

fn apply_toggle(session: &mut Session, (is_color, idx): (bool, usize)) {
    let result = if is_color {
        session.toggle_facet(&color(), COLORS[idx % COLORS.len()])
    } else {
        session.toggle_facet(&size(), SIZES[idx % SIZES.len()])
    };
    result.unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// 1. Page count formula
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn total_pages_matches_formula(
        count in 0usize..200,
        items_on_page in 1usize..25,
        toggles in prop::collection::vec(toggle(), 0..4),
    ) {
        let mut session = session(count, items_on_page);
        for t in toggles {
            apply_toggle(&mut session, t);
        }

        let active = session.active_count();
        let expected = active.div_ceil(items_on_page).max(1);
        prop_assert_eq!(session.total_pages(), expected);
        prop_assert_eq!(session.snapshot().total_pages, expected);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 2. Pages partition the active set
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn pages_partition_active_items(
        count in 0usize..150,
        items_on_page in 1usize..20,
        toggles in prop::collection::vec(toggle(), 0..4),
    ) {
        let mut session = session(count, items_on_page);
        for t in toggles {
            apply_toggle(&mut session, t);
        }

        let mut concatenated = Vec::new();
        for page in 0..session.total_pages() {
            let items = session.page_items(page);
            prop_assert!(items.len() <= items_on_page);
            concatenated.extend(items.into_iter().map(|item| item.id.clone()));
        }

        prop_assert_eq!(concatenated, active_ids(&session));
        prop_assert!(session.page_items(session.total_pages()).is_empty());
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 3. Current page stays in range
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn current_page_is_always_clamped(
        count in 0usize..120,
        items_on_page in 1usize..15,
        requested in 0usize..50,
        new_size in 1usize..15,
        toggles in prop::collection::vec(toggle(), 0..3),
    ) {
        let mut session = session(count, items_on_page);

        let snapshot = session.select_page(requested);
        prop_assert!(snapshot.current_page < snapshot.total_pages);
        prop_assert_eq!(snapshot.current_page, requested.min(snapshot.total_pages - 1));

        for t in toggles {
            apply_toggle(&mut session, t);
            let snapshot = session.next_page();
            prop_assert!(snapshot.current_page < snapshot.total_pages);
        }

        let snapshot = session.set_items_per_page(new_size).unwrap();
        prop_assert_eq!(snapshot.current_page, 0);
        prop_assert!(snapshot.visible_items.len() <= new_size);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 4-5. Button sequence shape
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn numbered_buttons_are_increasing_and_mark_current_once(
        total in 0usize..60,
        max_displayed in 1usize..9,
        min_end in 0usize..4,
        current in 0usize..70,
        first_last in any::<bool>(),
    ) {
        let mut state = PaginationState::new(1, max_displayed, min_end, first_last).unwrap();
        state.recompute(total);
        state.select(current);

        let buttons = page_buttons(&state, &ButtonLabels::default());
        let numbers = numbered(&buttons);

        prop_assert!(
            numbers.windows(2).all(|pair| pair[0].0 < pair[1].0),
            "numbered buttons not strictly increasing: {:?}", numbers
        );
        prop_assert!(numbers.iter().all(|(index, _)| *index < state.total_pages()));

        let current_marks: Vec<usize> = numbers
            .iter()
            .filter(|(_, is_current)| *is_current)
            .map(|(index, _)| *index)
            .collect();
        prop_assert_eq!(current_marks, vec![state.current_page()]);

        prop_assert!(buttons
            .iter()
            .filter_map(PageButton::page_index)
            .all(|index| index < state.total_pages()));
    }
}

proptest! {
    #[test]
    fn ellipses_only_replace_gaps_wider_than_one(
        total in 1usize..60,
        max_displayed in 1usize..9,
        min_end in 1usize..4,
        current in 0usize..60,
    ) {
        let mut state = PaginationState::new(1, max_displayed, min_end, false).unwrap();
        state.recompute(total);
        state.select(current);

        let labels = ButtonLabels { prev: None, next: None, ..ButtonLabels::default() };
        let buttons = page_buttons(&state, &labels);

        for (idx, button) in buttons.iter().enumerate() {
            if let PageButton::Ellipsis { .. } = button {
                let before = buttons[..idx].iter().rev().find_map(PageButton::page_index);
                let after = buttons[idx + 1..].iter().find_map(PageButton::page_index);
                if let (Some(before), Some(after)) = (before, after) {
                    prop_assert!(after > before + 2, "ellipsis hides {} page(s)", after - before - 1);
                }
            }
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 6. Reset restores the initial active set
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn reset_restores_initial_active_set(
        count in 0usize..100,
        toggles in prop::collection::vec(toggle(), 0..8),
    ) {
        let mut session = session(count, 9);
        let initial = active_ids(&session);

        for t in toggles {
            apply_toggle(&mut session, t);
        }
        let snapshot = session.reset_facets();

        prop_assert_eq!(active_ids(&session), initial);
        prop_assert_eq!(snapshot.active_count, count);
        prop_assert!(!snapshot.reset_visible);
        prop_assert_eq!(snapshot.current_page, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// 7. Refresh is idempotent
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn refresh_twice_yields_identical_snapshots(
        count in 0usize..80,
        items_on_page in 1usize..12,
        page in 0usize..10,
        toggles in prop::collection::vec(toggle(), 0..4),
    ) {
        let mut session = session(count, items_on_page);
        for t in toggles {
            apply_toggle(&mut session, t);
        }
        session.select_page(page);

        let first = session.refresh();
        let second = session.refresh();
        prop_assert_eq!(first, second);
    }
}
