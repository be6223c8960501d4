//! Search box and filter readout row.

use crate::query::ListSnapshot;
use crate::state::Focus;
use crate::view::styles::UiStyles;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

fn render_search_box(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ListSnapshot,
    focus: Focus,
    styles: UiStyles,
) {
    let mut spans = vec![Span::raw(snapshot.raw_search.to_string())];
    if focus == Focus::Search {
        // Block cursor at the end of the input.
        spans.push(Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)));
    } else if snapshot.raw_search.is_empty() {
        spans = vec![Span::styled("press / to search", styles.muted())];
    }

    let title = if focus == Focus::Search {
        "Search (Enter to apply, Esc to leave)"
    } else {
        "Search"
    };
    let block = Block::default().borders(Borders::ALL).title(title);
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn render_filters(frame: &mut Frame, area: Rect, snapshot: &ListSnapshot, styles: UiStyles) {
    let severity = match snapshot.severity {
        Some(severity) => Span::styled(severity.as_str(), styles.severity(severity)),
        None => Span::raw("All"),
    };
    let status = match snapshot.status {
        Some(status) => Span::styled(status.as_str(), styles.status(status)),
        None => Span::raw("All"),
    };
    let line = Line::from(vec![
        Span::raw("Severity: "),
        severity,
        Span::raw("  Status: "),
        status,
        Span::styled("  (v/b cycle, c clear)", styles.muted()),
    ]);
    let block = Block::default().borders(Borders::ALL).title("Filters");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Render the toolbar: search input on the left, filter readouts on the right.
pub fn render_toolbar(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ListSnapshot,
    focus: Focus,
    styles: UiStyles,
) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(area);
    render_search_box(frame, chunks[0], snapshot, focus, styles);
    render_filters(frame, chunks[1], snapshot, styles);
}
