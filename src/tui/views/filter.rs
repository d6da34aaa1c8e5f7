//! Date range filter row

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

use crate::services::{Clock, RangeBound};
use crate::tui::app::{App, FormField};
use crate::tui::layout::field_rows;

use super::form::error_line;

/// Render the start and end inputs side by side
pub fn render<C: Clock>(frame: &mut Frame, app: &App<'_, C>, area: Rect) {
    let in_filter = app.focused_field.bound().is_some();
    let border_color = if in_filter { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(format!(" Filter: {} (Ctrl+X clears) ", app.session.range()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(inner);

    for (column, field) in columns.iter().zip([FormField::Start, FormField::End]) {
        let Some((input_area, message_area)) = field_rows(*column, 1).into_iter().next() else {
            continue;
        };
        frame.render_widget(app.input(field), input_area);

        let bound = field.bound().unwrap_or(RangeBound::Start);
        if let Some(message) = app.bound_error(bound) {
            frame.render_widget(error_line(message), message_area);
        }
    }
}
