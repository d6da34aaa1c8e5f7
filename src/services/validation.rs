//! Validation of raw expense submissions
//!
//! [`validate_expense`] is a pure function: it takes the three raw text fields
//! and the current date and returns either the parsed fields or one error per
//! failing field. Nothing here knows about rendering.

use chrono::NaiveDate;
use std::collections::BTreeMap;
use std::fmt;

use crate::models::{Money, MoneyParseError};

/// Date format accepted for submitted dates and filter bounds
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// Raw form submission, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpenseCandidate {
    pub name: String,
    pub amount: String,
    pub date: String,
}

impl ExpenseCandidate {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        date: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            date: date.into(),
        }
    }
}

/// The form fields that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ExpenseField {
    Name,
    Amount,
    Date,
}

impl fmt::Display for ExpenseField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Amount => write!(f, "amount"),
            Self::Date => write!(f, "date"),
        }
    }
}

/// Why a single field was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldError {
    /// Required field left empty
    MissingField,
    /// Amount not parseable or not strictly positive
    InvalidAmount,
    /// Date not parseable, or later than today
    InvalidDate,
}

impl FieldError {
    /// The inline message shown next to the field
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingField => "This field is required",
            Self::InvalidAmount => "Amount must be a positive number",
            Self::InvalidDate => "Date must be today or earlier",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Field-keyed set of validation failures
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(BTreeMap<ExpenseField, FieldError>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: ExpenseField, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn remove(&mut self, field: ExpenseField) -> Option<FieldError> {
        self.0.remove(&field)
    }

    /// The error for a field, if it failed
    pub fn get(&self, field: ExpenseField) -> Option<FieldError> {
        self.0.get(&field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Failures in field order (name, amount, date)
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseField, FieldError)> + '_ {
        self.0.iter().map(|(field, error)| (*field, *error))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, error) in self.iter() {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{}: {}", field, error)?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

/// Fields of a submission that passed every check
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidExpense {
    pub name: String,
    pub amount: Money,
    pub date: NaiveDate,
}

/// Parse a `YYYY-MM-DD` calendar date, ignoring surrounding whitespace
pub fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input.trim(), DATE_INPUT_FORMAT).ok()
}

/// Validate a raw submission against `today`
///
/// Every field is checked independently so that all failures are reported
/// together.
pub fn validate_expense(
    candidate: &ExpenseCandidate,
    today: NaiveDate,
) -> Result<ValidExpense, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = candidate.name.trim();
    if name.is_empty() {
        errors.insert(ExpenseField::Name, FieldError::MissingField);
    }

    let amount = match Money::parse(&candidate.amount) {
        Ok(amount) if amount.is_positive() => Some(amount),
        Ok(_) => {
            errors.insert(ExpenseField::Amount, FieldError::InvalidAmount);
            None
        }
        Err(MoneyParseError::Empty) => {
            errors.insert(ExpenseField::Amount, FieldError::MissingField);
            None
        }
        Err(_) => {
            errors.insert(ExpenseField::Amount, FieldError::InvalidAmount);
            None
        }
    };

    let date = if candidate.date.trim().is_empty() {
        errors.insert(ExpenseField::Date, FieldError::MissingField);
        None
    } else {
        match parse_date(&candidate.date) {
            Some(date) if date <= today => Some(date),
            _ => {
                errors.insert(ExpenseField::Date, FieldError::InvalidDate);
                None
            }
        }
    };

    match (amount, date) {
        (Some(amount), Some(date)) if errors.is_empty() => Ok(ValidExpense {
            name: name.to_string(),
            amount,
            date,
        }),
        _ => Err(errors),
    }
}
