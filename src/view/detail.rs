//! Read-only incident detail screen.

use crate::state::DetailState;
use crate::view::styles::UiStyles;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

fn field<'a>(label: &'a str, value: Span<'a>, styles: UiStyles) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:>10}: "), styles.muted()),
        value,
    ])
}

/// Render the detail screen for the selected incident.
pub fn render_detail(frame: &mut Frame, area: Rect, detail: &DetailState, styles: UiStyles) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!("Incident {} (Esc/q to go back)", detail.id));

    let mut lines: Vec<Line> = Vec::new();
    if let Some(error) = &detail.error {
        lines.push(Line::from(Span::styled(
            format!("Error: {error}"),
            styles.error_banner(),
        )));
    } else if detail.loading {
        lines.push(Line::from("Loading…"));
    } else if let Some(incident) = &detail.incident {
        lines.push(field("Title", Span::raw(incident.title.as_str()), styles));
        lines.push(field("Service", Span::raw(incident.service.as_str()), styles));
        lines.push(field(
            "Severity",
            Span::styled(incident.severity.as_str(), styles.severity(incident.severity)),
            styles,
        ));
        lines.push(field(
            "Status",
            Span::styled(incident.status.as_str(), styles.status(incident.status)),
            styles,
        ));
        lines.push(field(
            "Owner",
            Span::raw(incident.owner.as_deref().unwrap_or("—")),
            styles,
        ));
        lines.push(field(
            "Created",
            Span::raw(incident.created_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            styles,
        ));
        lines.push(field(
            "Updated",
            Span::raw(incident.updated_at.format("%Y-%m-%d %H:%M:%S UTC").to_string()),
            styles,
        ));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled("Summary", styles.muted())));
        lines.push(Line::from(
            incident.summary.as_deref().unwrap_or("(no summary)").to_string(),
        ));
    }

    let paragraph = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
