//! In-memory expense store
//!
//! Append-only: records are never edited, removed or reordered. The store is
//! dropped together with the session that owns it.

use chrono::NaiveDate;

use crate::models::Expense;
use crate::services::validation::{validate_expense, ExpenseCandidate, ValidationErrors};

/// Ordered sequence of accepted expenses
#[derive(Debug, Default)]
pub struct ExpenseStore {
    expenses: Vec<Expense>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate a raw submission and append it on success
    ///
    /// On failure the store is left untouched and every failing field is
    /// reported.
    pub fn add_expense(
        &mut self,
        candidate: &ExpenseCandidate,
        today: NaiveDate,
    ) -> Result<&Expense, ValidationErrors> {
        let valid = validate_expense(candidate, today)?;
        let index = self.expenses.len();
        self.expenses.push(Expense::new(valid));
        Ok(&self.expenses[index])
    }

    /// All expenses in insertion order
    pub fn all(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::validation::{ExpenseField, FieldError};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_accepts_valid_expense() {
        let mut store = ExpenseStore::new();
        let added = store
            .add_expense(&ExpenseCandidate::new("Coffee", "4.50", "2024-01-05"), today())
            .unwrap();
        assert_eq!(added.name(), "Coffee");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_rejection_leaves_store_unchanged() {
        let mut store = ExpenseStore::new();
        store
            .add_expense(&ExpenseCandidate::new("Coffee", "4.50", "2024-01-05"), today())
            .unwrap();

        let errors = store
            .add_expense(&ExpenseCandidate::new("", "10", "2024-01-05"), today())
            .unwrap_err();
        assert_eq!(errors.get(ExpenseField::Name), Some(FieldError::MissingField));

        store
            .add_expense(&ExpenseCandidate::new("Tea", "0", "2024-01-05"), today())
            .unwrap_err();
        store
            .add_expense(&ExpenseCandidate::new("Tea", "1", "2024-03-02"), today())
            .unwrap_err();

        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].name(), "Coffee");
    }

    #[test]
    fn test_preserves_submission_order() {
        let mut store = ExpenseStore::new();
        let names = ["c", "a", "b", "a"];
        for (i, name) in names.iter().enumerate() {
            let date = format!("2024-01-{:02}", 20 - i);
            store
                .add_expense(&ExpenseCandidate::new(*name, "1", date), today())
                .unwrap();
        }

        assert_eq!(store.len(), names.len());
        let stored: Vec<_> = store.all().iter().map(|e| e.name()).collect();
        assert_eq!(stored, names);
    }
}
