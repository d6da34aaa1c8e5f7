//! Display formatting for terminal output

pub mod expense;

pub use expense::{format_expense_table, format_range, format_total, format_validation_errors};
