//! Help overlay listing key bindings.

use crate::view::styles::UiStyles;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

/// Compute a centered rect using percentages of the available area.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}

const BINDINGS: [(&str, &str); 14] = [
    ("j / ↓", "move selection down"),
    ("k / ↑", "move selection up"),
    ("Enter", "open incident detail"),
    ("n / →", "next page"),
    ("p / ←", "previous page"),
    ("g", "first page"),
    ("G", "last page"),
    ("/", "search"),
    ("v", "cycle severity filter"),
    ("b", "cycle status filter"),
    ("c", "reset filters"),
    ("1-6", "sort by column"),
    ("r", "reload"),
    ("q", "quit"),
];

/// Render the help overlay on top of the current screen.
pub fn render_help_overlay(frame: &mut Frame, styles: UiStyles) {
    let area = centered_rect(60, 80, frame.area());
    frame.render_widget(Clear, area);

    let mut lines: Vec<Line> = BINDINGS
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(format!("  {key:<8}"), styles.sorted_header()),
                Span::raw(*action),
            ])
        })
        .collect();
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  press ? or Esc to dismiss",
        styles.muted(),
    )));

    let block = Block::default().borders(Borders::ALL).title("Help");
    frame.render_widget(Paragraph::new(lines).block(block), area);
}
