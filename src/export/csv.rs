//! CSV export
//!
//! One row per filtered expense, in display order. The total is not a row;
//! spreadsheets can sum the amount column.

use std::io::Write;

use super::ViewExport;
use crate::error::{ExpenseError, ExpenseResult};

/// Write the exported view as CSV with an `ID,Name,Amount,Date` header
pub fn export_view_csv<W: Write>(view: &ViewExport, writer: &mut W) -> ExpenseResult<()> {
    let mut csv_writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    csv_writer
        .write_record(["ID", "Name", "Amount", "Date"])
        .map_err(|e| ExpenseError::Export(e.to_string()))?;

    for expense in &view.expenses {
        let date = expense.date.format("%Y-%m-%d").to_string();
        csv_writer
            .write_record([
                expense.id.as_str(),
                expense.name.as_str(),
                expense.amount.as_str(),
                date.as_str(),
            ])
            .map_err(|e| ExpenseError::Export(e.to_string()))?;
    }

    csv_writer
        .flush()
        .map_err(|e| ExpenseError::Export(e.to_string()))
}
