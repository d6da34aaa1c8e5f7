//! Terminal User Interface module
//!
//! An interactive expense form built with ratatui: entry fields with inline
//! validation messages, a date range filter, the filtered table and its
//! total.

pub mod app;
pub mod event;
pub mod handler;
pub mod layout;
pub mod terminal;
pub mod views;
pub mod widgets;

pub use app::App;
pub use terminal::run_tui;
