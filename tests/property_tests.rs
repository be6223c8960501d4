//! Property-based tests for the pure query calculations.
//!
//! Tests validate:
//! 1. Page window size, contents, and ellipsis flags
//! 2. Sort toggle transitions
//! 3. Display truncation width bounds

use incv::query::{next_sort, page_window, SortColumn, SortOrder, SortSpec};
use incv::view::truncate_to_width;
use proptest::prelude::*;

// ===== Property 1: Page Window =====

proptest! {
    #[test]
    fn window_never_exceeds_max_visible(
        page in 1u32..500,
        total_pages in 2u32..500,
        max_visible in 1u32..20,
    ) {
        if let Some(window) = page_window(page, total_pages, max_visible) {
            prop_assert!(window.pages.len() as u32 <= max_visible);
            prop_assert_eq!(
                window.pages.len() as u32,
                max_visible.min(total_pages)
            );
        }
    }

    #[test]
    fn window_contains_current_page_clamped_to_range(
        page in 1u32..500,
        total_pages in 2u32..500,
        max_visible in 1u32..20,
    ) {
        let window = page_window(page, total_pages, max_visible)
            .expect("more than one page must produce a window");
        prop_assert!(window.pages.contains(&page.min(total_pages)));
    }

    #[test]
    fn window_pages_are_contiguous_and_in_bounds(
        page in 1u32..500,
        total_pages in 2u32..500,
        max_visible in 1u32..20,
    ) {
        let window = page_window(page, total_pages, max_visible)
            .expect("more than one page must produce a window");
        for pair in window.pages.windows(2) {
            prop_assert_eq!(pair[1], pair[0] + 1);
        }
        prop_assert!(window.pages.first().is_some_and(|first| *first >= 1));
        prop_assert!(window.pages.last().is_some_and(|last| *last <= total_pages));
    }

    #[test]
    fn ellipsis_flags_match_window_edges(
        page in 1u32..500,
        total_pages in 2u32..500,
        max_visible in 1u32..20,
    ) {
        let window = page_window(page, total_pages, max_visible)
            .expect("more than one page must produce a window");
        let first = *window.pages.first().expect("window is never empty");
        let last = *window.pages.last().expect("window is never empty");
        prop_assert_eq!(window.leading_ellipsis, first > 1);
        prop_assert_eq!(window.trailing_ellipsis, last < total_pages);
    }

    #[test]
    fn out_of_range_page_behaves_like_last_page(
        excess in 1u32..100,
        total_pages in 2u32..500,
        max_visible in 1u32..20,
    ) {
        prop_assert_eq!(
            page_window(total_pages + excess, total_pages, max_visible),
            page_window(total_pages, total_pages, max_visible)
        );
    }

    #[test]
    fn single_page_or_zero_width_yields_no_window(
        total_pages in 0u32..2,
        max_visible in 0u32..20,
    ) {
        if total_pages <= 1 || max_visible == 0 {
            prop_assert!(page_window(1, total_pages, max_visible).is_none());
        }
    }
}

// ===== Property 2: Sort Toggle =====

fn arb_column() -> impl Strategy<Value = SortColumn> {
    prop::sample::select(SortColumn::ALL.to_vec())
}

fn arb_order() -> impl Strategy<Value = SortOrder> {
    prop::sample::select(vec![SortOrder::Asc, SortOrder::Desc])
}

proptest! {
    #[test]
    fn clicking_same_column_flips_order(column in arb_column(), order in arb_order()) {
        let current = SortSpec { column, order };
        let next = next_sort(current, column);
        prop_assert_eq!(next.column, column);
        prop_assert_eq!(next.order, order.flipped());
    }

    #[test]
    fn clicking_new_column_starts_ascending(
        current_column in arb_column(),
        order in arb_order(),
        clicked in arb_column(),
    ) {
        prop_assume!(current_column != clicked);
        let current = SortSpec { column: current_column, order };
        let next = next_sort(current, clicked);
        prop_assert_eq!(next.column, clicked);
        prop_assert_eq!(next.order, SortOrder::Asc);
    }

    #[test]
    fn double_click_restores_order(column in arb_column(), order in arb_order()) {
        let current = SortSpec { column, order };
        let twice = next_sort(next_sort(current, column), column);
        prop_assert_eq!(twice, current);
    }
}

// ===== Property 3: Truncation =====

proptest! {
    #[test]
    fn truncation_never_exceeds_width(text in ".*", max_width in 0usize..40) {
        use unicode_width::UnicodeWidthStr;
        let out = truncate_to_width(&text, max_width);
        prop_assert!(out.width() <= max_width);
    }

    #[test]
    fn truncation_is_identity_when_text_fits(text in "[a-z ]{0,10}") {
        prop_assert_eq!(truncate_to_width(&text, 20), text);
    }
}
