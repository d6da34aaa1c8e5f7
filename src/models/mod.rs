//! Core data models for the expense tracker
//!
//! The expense record, its strongly-typed ID, the fixed-point money amount
//! and the date range used for filtering.

pub mod expense;
pub mod ids;
pub mod money;
pub mod range;

pub use expense::Expense;
pub use ids::ExpenseId;
pub use money::{Money, MoneyParseError};
pub use range::DateRange;
