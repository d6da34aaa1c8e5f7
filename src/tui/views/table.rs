//! Filtered expense table and total line

use ratatui::{
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

use crate::services::Clock;
use crate::tui::app::App;

/// Render the filtered expenses in insertion order
pub fn render<C: Clock>(frame: &mut Frame, app: &App<'_, C>, area: Rect) {
    let filtered = app.session.filtered();
    let title = format!(
        " Expenses ({} of {}) ",
        filtered.len(),
        app.session.expenses().len()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if filtered.is_empty() {
        let text = Paragraph::new("No expenses found.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(20),    // Name
        Constraint::Length(16), // Amount
    ];

    let bold = Style::default().add_modifier(Modifier::BOLD);
    let header = Row::new(vec![
        Cell::from("Date").style(bold),
        Cell::from("Name").style(bold),
        Cell::from(Line::from("Amount").right_aligned()).style(bold),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let symbol = app.settings.currency_symbol.as_str();
    let rows: Vec<Row> = filtered
        .iter()
        .map(|expense| {
            Row::new(vec![
                Cell::from(expense.date().format(&app.settings.date_format).to_string()),
                Cell::from(expense.name().to_string()),
                Cell::from(Line::from(expense.amount().format_with_symbol(symbol)).right_aligned()),
            ])
        })
        .collect();

    let table = Table::new(rows, widths).header(header).block(block);
    frame.render_widget(table, area);
}

/// Render `Total Expense: Rs 4.50` for the filtered sequence
pub fn render_total<C: Clock>(frame: &mut Frame, app: &App<'_, C>, area: Rect) {
    let total = app
        .session
        .total()
        .format_with_symbol(&app.settings.currency_symbol);

    let line = Line::from(vec![
        Span::styled(" Total Expense: ", Style::default().fg(Color::White)),
        Span::styled(
            total,
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}
