//! Date-range filtering of expenses
//!
//! Pure derivation: the result borrows from the input and keeps its order.

use crate::models::{DateRange, Expense};

/// Return the expenses whose date falls inside `range`, in input order
pub fn filter_expenses<'a>(expenses: &'a [Expense], range: &DateRange) -> Vec<&'a Expense> {
    expenses
        .iter()
        .filter(|expense| range.contains(expense.date()))
        .collect()
}

/// Positions of the matching expenses within `expenses`
pub fn matching_indices(expenses: &[Expense], range: &DateRange) -> Vec<usize> {
    expenses
        .iter()
        .enumerate()
        .filter(|(_, expense)| range.contains(expense.date()))
        .map(|(index, _)| index)
        .collect()
}
