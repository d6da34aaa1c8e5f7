//! TUI Views module
//!
//! The single screen: entry form, filter row, expense table, total line and
//! status bar.

pub mod filter;
pub mod form;
pub mod status_bar;
pub mod table;

use ratatui::Frame;

use crate::services::Clock;

use super::app::App;
use super::layout::AppLayout;

/// Render the entire application
pub fn render<C: Clock>(frame: &mut Frame, app: &App<'_, C>) {
    let layout = AppLayout::new(frame.area());

    form::render(frame, app, layout.form);
    filter::render(frame, app, layout.filter);
    table::render(frame, app, layout.table);
    table::render_total(frame, app, layout.total);
    status_bar::render(frame, app, layout.status_bar);
}
