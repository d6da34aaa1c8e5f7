//! Service layer for the expense tracker
//!
//! Validation, filtering and totals are plain functions over models. The
//! session ties them to a store and a filter range.

pub mod aggregate;
pub mod filter;
pub mod session;
pub mod validation;

pub use aggregate::{summarize, total, ExpenseSummary};
pub use filter::filter_expenses;
pub use session::{Clock, ExpenseSession, FixedClock, RangeBound, SystemClock};
pub use validation::{
    parse_date, validate_expense, ExpenseCandidate, ExpenseField, FieldError, ValidExpense,
    ValidationErrors,
};
