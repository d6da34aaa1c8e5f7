//! Storage layer for the expense tracker
//!
//! Expenses live only in memory ([`ExpenseStore`]). The JSON file helpers are
//! used for settings and exports.

pub mod expenses;
pub mod file_io;

pub use expenses::ExpenseStore;
pub use file_io::{read_json, write_atomic, write_json_atomic};
