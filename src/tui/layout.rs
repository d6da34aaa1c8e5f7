//! Layout definitions for the TUI
//!
//! Top to bottom: entry form, filter row, expense table, total, status bar.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout regions for the TUI
pub struct AppLayout {
    pub form: Rect,
    pub filter: Rect,
    pub table: Rect,
    pub total: Rect,
    pub status_bar: Rect,
}

impl AppLayout {
    /// Calculate layout from available area
    pub fn new(area: Rect) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // Three fields, each with a message line
                Constraint::Length(4), // Filter fields and messages
                Constraint::Min(3),    // Expense table
                Constraint::Length(1), // Total
                Constraint::Length(1), // Status bar
            ])
            .split(area);

        Self {
            form: chunks[0],
            filter: chunks[1],
            table: chunks[2],
            total: chunks[3],
            status_bar: chunks[4],
        }
    }
}

/// Split an area into a field line and the message line below it
pub fn field_rows(area: Rect, count: usize) -> Vec<(Rect, Rect)> {
    let constraints = vec![Constraint::Length(1); count * 2];
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    rows.chunks(2)
        .filter_map(|pair| match pair {
            [field, message] => Some((*field, *message)),
            _ => None,
        })
        .collect()
}
