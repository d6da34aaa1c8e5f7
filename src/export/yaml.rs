//! YAML export
//!
//! Human-readable version of the JSON export.

use std::io::Write;

use super::ViewExport;
use crate::error::{ExpenseError, ExpenseResult};

/// Write the exported view as YAML
pub fn export_view_yaml<W: Write>(view: &ViewExport, writer: &mut W) -> ExpenseResult<()> {
    serde_yaml::to_writer(writer, view)
        .map_err(|e| ExpenseError::Export(format!("YAML serialization failed: {}", e)))
}
