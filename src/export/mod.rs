//! Export of the current view
//!
//! Writes the filter range, the filtered expenses in display order, and
//! their count and total:
//! - CSV: one row per expense (spreadsheet-compatible)
//! - JSON / YAML: the whole view including range and total

pub mod csv;
pub mod json;
pub mod yaml;

use std::fmt;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ExpenseResult;
use crate::models::{DateRange, Expense, Money};
use crate::services::{Clock, ExpenseSession};
use crate::storage::write_atomic;

pub use self::csv::export_view_csv;
pub use self::json::export_view_json;
pub use self::yaml::export_view_yaml;

/// Output format for exports
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    #[default]
    Csv,
    Json,
    Yaml,
}

impl ExportFormat {
    /// File extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Csv => "csv",
            Self::Json => "json",
            Self::Yaml => "yaml",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "json" => Some(Self::Json),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// One exported expense
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedExpense {
    pub id: String,
    pub name: String,
    /// Amount in units with two decimals, e.g. `"4.50"`
    pub amount: String,
    pub date: NaiveDate,
}

impl From<&Expense> for ExportedExpense {
    fn from(expense: &Expense) -> Self {
        Self {
            id: expense.id().to_string(),
            name: expense.name().to_string(),
            amount: expense.amount().to_string(),
            date: expense.date(),
        }
    }
}

/// Snapshot of a session's current view
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewExport {
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub expenses: Vec<ExportedExpense>,
    pub count: usize,
    pub total: String,
}

impl ViewExport {
    pub fn new(range: DateRange, expenses: &[&Expense], total: Money) -> Self {
        Self {
            start_date: range.start,
            end_date: range.end,
            expenses: expenses.iter().map(|e| ExportedExpense::from(*e)).collect(),
            count: expenses.len(),
            total: total.to_string(),
        }
    }

    pub fn from_session<C: Clock>(session: &ExpenseSession<C>) -> Self {
        Self::new(session.range(), &session.filtered(), session.total())
    }
}

/// Write the session's current view in `format`
pub fn export_view<C: Clock, W: Write>(
    session: &ExpenseSession<C>,
    format: ExportFormat,
    writer: &mut W,
) -> ExpenseResult<()> {
    let view = ViewExport::from_session(session);
    match format {
        ExportFormat::Csv => export_view_csv(&view, writer),
        ExportFormat::Json => export_view_json(&view, writer),
        ExportFormat::Yaml => export_view_yaml(&view, writer),
    }
}

/// Write the session's current view to a file atomically
pub fn export_view_to_file<C: Clock>(
    session: &ExpenseSession<C>,
    format: ExportFormat,
    path: &Path,
) -> ExpenseResult<()> {
    write_atomic(path, |writer| export_view(session, format, writer))?;
    info!(path = %path.display(), %format, count = session.summary().count, "view exported");
    Ok(())
}

/// Default export file name, e.g. `expenses-20240105-093000.csv`
pub fn default_file_name(format: ExportFormat) -> String {
    format!(
        "expenses-{}.{}",
        chrono::Local::now().format("%Y%m%d-%H%M%S"),
        format.extension()
    )
}
