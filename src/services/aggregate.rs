//! Totals over a sequence of expenses

use serde::Serialize;

use crate::models::{Expense, Money};

/// Count and total of a filtered sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ExpenseSummary {
    pub count: usize,
    pub total: Money,
}

/// Exact sum of the amounts; zero for an empty sequence
pub fn total<'a, I>(expenses: I) -> Money
where
    I: IntoIterator<Item = &'a Expense>,
{
    expenses.into_iter().map(Expense::amount).sum()
}

pub fn summarize<'a, I>(expenses: I) -> ExpenseSummary
where
    I: IntoIterator<Item = &'a Expense>,
{
    let mut count = 0;
    let total = expenses
        .into_iter()
        .inspect(|_| count += 1)
        .map(Expense::amount)
        .sum();
    ExpenseSummary { count, total }
}
