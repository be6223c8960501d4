//! Status line: result counts, loading indicator, error banner.

use crate::query::ListSnapshot;
use crate::view::styles::UiStyles;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Render an error banner when the last request failed. The caller gives the
/// banner a zero-height area when there is no error, so this draws nothing.
pub fn render_error_banner(frame: &mut Frame, area: Rect, snapshot: &ListSnapshot, styles: UiStyles) {
    let Some(message) = snapshot.error else {
        return;
    };
    let line = Line::from(Span::styled(
        format!(" Error: {message} (r to retry)"),
        styles.error_banner(),
    ));
    frame.render_widget(Paragraph::new(line), area);
}

/// Render the bottom status line with counts and key hints.
pub fn render_status_line(frame: &mut Frame, area: Rect, snapshot: &ListSnapshot, styles: UiStyles) {
    let mut spans = Vec::new();
    if snapshot.loading {
        spans.push(Span::raw("Loading…  "));
    } else {
        spans.push(Span::raw(format!(
            "Showing {} of {} incidents  ",
            snapshot.items.len(),
            snapshot.total
        )));
    }
    spans.push(Span::styled("? help  q quit", styles.muted()));
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}
