//! Pagination bar built from the page window calculation.

use crate::query::{page_window, ListSnapshot, DEFAULT_MAX_VISIBLE};
use crate::view::styles::UiStyles;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render the pagination bar. Hidden entirely when there is at most one page.
pub fn render_pagination(frame: &mut Frame, area: Rect, snapshot: &ListSnapshot, styles: UiStyles) {
    let Some(window) = page_window(snapshot.page, snapshot.total_pages, DEFAULT_MAX_VISIBLE)
    else {
        return;
    };

    let mut spans: Vec<Span> = Vec::new();
    let at_first = snapshot.page <= 1;
    let at_last = snapshot.page >= snapshot.total_pages;

    let nav = |label: &'static str, disabled: bool| {
        if disabled {
            Span::styled(label, styles.muted())
        } else {
            Span::raw(label)
        }
    };

    spans.push(nav("« First", at_first));
    spans.push(Span::raw("  "));
    spans.push(nav("‹ Prev", at_first));
    spans.push(Span::raw("  "));

    if window.leading_ellipsis {
        spans.push(Span::styled("… ", styles.muted()));
    }
    for number in &window.pages {
        let label = format!(" {number} ");
        if *number == snapshot.page {
            spans.push(Span::styled(label, styles.active_page()));
        } else {
            spans.push(Span::raw(label));
        }
    }
    if window.trailing_ellipsis {
        spans.push(Span::styled(" …", styles.muted()));
    }

    spans.push(Span::raw("  "));
    spans.push(nav("Next ›", at_last));
    spans.push(Span::raw("  "));
    spans.push(nav("Last »", at_last));
    spans.push(Span::styled(
        format!("   Page {} of {}", snapshot.page, snapshot.total_pages),
        styles.muted(),
    ));

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
