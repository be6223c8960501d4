//! Pagination window calculation (pure).
//!
//! Computes which page-number buttons to show around the current page, plus
//! whether leading/trailing ellipses are needed.

/// Default number of page buttons shown at once.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// The visible slice of page numbers around the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageWindow {
    /// Contiguous page numbers to render, ascending.
    pub pages: Vec<u32>,
    /// Pages exist before the window (render a leading `…`).
    pub leading_ellipsis: bool,
    /// Pages exist after the window (render a trailing `…`).
    pub trailing_ellipsis: bool,
}

/// Compute the pagination window centered on `page`.
///
/// Returns `None` when `total_pages <= 1`: with a single page there are no
/// pagination controls at all and the caller short-circuits.
///
/// The window is centered on `page`, clamped to `[1, total_pages]`, and
/// slid back toward 1 when clamping at the end shortened it, so it always
/// holds `min(max_visible, total_pages)` pages. A `page` beyond
/// `total_pages` (a server echoing a page past the end) is treated as the
/// last page.
pub fn page_window(page: u32, total_pages: u32, max_visible: u32) -> Option<PageWindow> {
    if total_pages <= 1 || max_visible == 0 {
        return None;
    }

    let page = page.min(total_pages);
    let start = page.saturating_sub(max_visible / 2).max(1);
    let end = total_pages.min(start + max_visible - 1);
    // If clamping at the end shortened the span, slide the start back.
    let start = if end - start + 1 < max_visible {
        end.saturating_sub(max_visible - 1).max(1)
    } else {
        start
    };

    Some(PageWindow {
        pages: (start..=end).collect(),
        leading_ellipsis: start > 1,
        trailing_ellipsis: end < total_pages,
    })
}
