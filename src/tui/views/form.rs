//! Expense entry form
//!
//! Name, amount and date inputs, each followed by its validation message.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::services::Clock;
use crate::tui::app::{App, FormField};
use crate::tui::layout::field_rows;
use crate::tui::widgets::input::LABEL_WIDTH;

/// Render the entry form
pub fn render<C: Clock>(frame: &mut Frame, app: &App<'_, C>, area: Rect) {
    let in_form = app.focused_field.expense_field().is_some();
    let border_color = if in_form { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" New Expense (Enter to add) ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = [FormField::Name, FormField::Amount, FormField::Date];
    for (field, (input_area, message_area)) in fields.into_iter().zip(field_rows(inner, 3)) {
        frame.render_widget(app.input(field), input_area);

        let message = field
            .expense_field()
            .and_then(|f| app.field_errors.get(f))
            .map(|error| error.message());
        if let Some(message) = message {
            frame.render_widget(error_line(message), message_area);
        }
    }
}

/// A red message indented under its input
pub fn error_line(message: &str) -> Paragraph<'_> {
    Paragraph::new(Line::from(vec![
        Span::raw(" ".repeat(LABEL_WIDTH + 2)),
        Span::styled(message, Style::default().fg(Color::Red)),
    ]))
}
