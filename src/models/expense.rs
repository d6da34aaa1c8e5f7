//! Expense model
//!
//! An `Expense` can only be built from a [`ValidExpense`], so every record in a
//! store has already passed the name, amount and date checks.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;

use super::ids::ExpenseId;
use super::money::Money;
use crate::services::validation::ValidExpense;

/// A recorded expense
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expense {
    id: ExpenseId,
    name: String,
    amount: Money,
    /// Calendar date, serialized as `YYYY-MM-DD`
    date: NaiveDate,
}

impl Expense {
    /// Create a record from fields that passed validation
    pub fn new(valid: ValidExpense) -> Self {
        Self {
            id: ExpenseId::new(),
            name: valid.name,
            amount: valid.amount,
            date: valid.date,
        }
    }

    pub fn id(&self) -> ExpenseId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn amount(&self) -> Money {
        self.amount
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }
}

impl fmt::Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.date.format("%Y-%m-%d"),
            self.name,
            self.amount
        )
    }
}
