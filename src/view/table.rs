//! Incident table rendering.

use crate::model::Incident;
use crate::query::{ListSnapshot, SortColumn, SortOrder};
use crate::view::styles::UiStyles;
use ratatui::layout::{Constraint, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Columns shown in the incident table, in display order.
///
/// Indexes into this array line up with the `SortColumn(n)` key bindings.
const COLUMNS: [(SortColumn, &str, u16); 6] = [
    (SortColumn::Title, "Title", 32),
    (SortColumn::Service, "Service", 14),
    (SortColumn::Severity, "Sev", 6),
    (SortColumn::Status, "Status", 10),
    (SortColumn::Owner, "Owner", 14),
    (SortColumn::CreatedAt, "Created", 17),
];

/// Truncate `text` to at most `max_width` columns, appending an ellipsis
/// when anything was cut.
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        if used + w > max_width.saturating_sub(1) {
            break;
        }
        used += w;
        out.push(ch);
    }
    out.push('…');
    out
}

fn header_cell<'a>(
    column: SortColumn,
    label: &'a str,
    snapshot: &ListSnapshot<'a>,
    styles: UiStyles,
) -> Cell<'a> {
    if snapshot.sort.column == column {
        let arrow = match snapshot.sort.order {
            SortOrder::Asc => "▲",
            SortOrder::Desc => "▼",
        };
        Cell::from(format!("{label} {arrow}")).style(styles.sorted_header())
    } else {
        Cell::from(label)
    }
}

fn incident_row<'a>(incident: &'a Incident, styles: UiStyles) -> Row<'a> {
    Row::new(vec![
        Cell::from(truncate_to_width(&incident.title, 31)),
        Cell::from(truncate_to_width(&incident.service, 13)),
        Cell::from(incident.severity.as_str()).style(styles.severity(incident.severity)),
        Cell::from(incident.status.as_str()).style(styles.status(incident.status)),
        Cell::from(incident.owner.as_deref().unwrap_or("—").to_string()),
        Cell::from(incident.created_at.format("%Y-%m-%d %H:%M").to_string()),
    ])
}

/// Render the incident table, or the empty-state message when the current
/// page has no rows.
pub fn render_table(
    frame: &mut Frame,
    area: Rect,
    snapshot: &ListSnapshot,
    selected_row: usize,
    styles: UiStyles,
) {
    let block = Block::default().borders(Borders::ALL).title("Incidents");

    if snapshot.items.is_empty() && !snapshot.loading {
        let empty = Paragraph::new(Line::from(Span::styled(
            "No incidents found.",
            styles.muted(),
        )))
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(
        COLUMNS
            .iter()
            .map(|(column, label, _)| header_cell(*column, label, snapshot, styles))
            .collect::<Vec<_>>(),
    );

    let rows: Vec<Row> = snapshot
        .items
        .iter()
        .enumerate()
        .map(|(idx, incident)| {
            let row = incident_row(incident, styles);
            if idx == selected_row {
                row.style(styles.selected_row())
            } else {
                row
            }
        })
        .collect();

    let widths: Vec<Constraint> = COLUMNS
        .iter()
        .map(|(_, _, width)| Constraint::Length(*width))
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn truncate_short_text_unchanged() {
        assert_eq!(truncate_to_width("abc", 10), "abc");
    }

    #[test]
    fn truncate_long_text_gets_ellipsis() {
        let out = truncate_to_width("database connection pool exhausted", 10);
        assert!(out.ends_with('…'));
        assert!(out.width() <= 10);
    }

    #[test]
    fn truncate_handles_wide_chars() {
        let out = truncate_to_width("データベース接続", 7);
        assert!(out.width() <= 7);
        assert!(out.ends_with('…'));
    }

    #[test]
    fn truncate_zero_width_is_empty() {
        assert_eq!(truncate_to_width("abc", 0), "");
    }
}
