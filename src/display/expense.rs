//! Expense display formatting
//!
//! Text renderings of the filtered sequence, the total and validation
//! failures for the script runner.

use tabled::{
    settings::{object::Columns, Alignment, Style},
    Table, Tabled,
};

use crate::models::{DateRange, Expense, Money};
use crate::services::ValidationErrors;

#[derive(Tabled)]
struct ExpenseRow {
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Date")]
    date: String,
}

/// Render the expenses as a table in display order
pub fn format_expense_table(expenses: &[&Expense], currency_symbol: &str, date_format: &str) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let rows = expenses.iter().map(|expense| ExpenseRow {
        name: expense.name().to_string(),
        amount: expense.amount().format_with_symbol(currency_symbol),
        date: expense.date().format(date_format).to_string(),
    });

    let mut table = Table::new(rows);
    table
        .with(Style::psql())
        .modify(Columns::single(1), Alignment::right());

    format!("{}\n", table)
}

/// `Total Expense: Rs 4.50`
pub fn format_total(total: Money, currency_symbol: &str) -> String {
    format!("Total Expense: {}", total.format_with_symbol(currency_symbol))
}

/// Header line describing the active filter
pub fn format_range(range: &DateRange, shown: usize, stored: usize) -> String {
    format!("Showing {} of {} expenses ({})", shown, stored, range)
}

/// One `field: message` line per failing field
pub fn format_validation_errors(errors: &ValidationErrors) -> String {
    errors
        .iter()
        .map(|(field, error)| format!("  {}: {}\n", field, error))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::{ExpenseCandidate, ExpenseField, FieldError, ValidExpense};
    use chrono::NaiveDate;

    fn coffee() -> Expense {
        Expense::new(ValidExpense {
            name: "Coffee".into(),
            amount: Money::from_cents(450),
            date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
        })
    }

    #[test]
    fn test_format_table() {
        let expense = coffee();
        let table = format_expense_table(&[&expense], "Rs", "%Y-%m-%d");
        assert!(table.contains("Name"));
        assert!(table.contains("Coffee"));
        assert!(table.contains("Rs 4.50"));
        assert!(table.contains("2024-01-05"));
    }

    #[test]
    fn test_table_uses_date_format() {
        let expense = coffee();
        let table = format_expense_table(&[&expense], "", "%d/%m/%Y");
        assert!(table.contains("05/01/2024"));
    }

    #[test]
    fn test_format_empty_table() {
        assert_eq!(format_expense_table(&[], "Rs", "%Y-%m-%d"), "No expenses found.\n");
    }

    #[test]
    fn test_format_total() {
        assert_eq!(format_total(Money::from_cents(3075), "Rs"), "Total Expense: Rs 30.75");
        assert_eq!(format_total(Money::zero(), "Rs"), "Total Expense: Rs 0.00");
    }

    #[test]
    fn test_format_validation_errors() {
        let candidate = ExpenseCandidate::new("", "x", "2024-01-01");
        let errors = crate::services::validate_expense(
            &candidate,
            NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
        )
        .unwrap_err();
        assert_eq!(errors.get(ExpenseField::Amount), Some(FieldError::InvalidAmount));
        assert_eq!(
            format_validation_errors(&errors),
            "  name: This field is required\n  amount: Amount must be a positive number\n"
        );
    }
}
