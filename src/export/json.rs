//! JSON export

use std::io::Write;

use super::ViewExport;
use crate::error::{ExpenseError, ExpenseResult};

/// Write the exported view as pretty-printed JSON
pub fn export_view_json<W: Write>(view: &ViewExport, writer: &mut W) -> ExpenseResult<()> {
    serde_json::to_writer_pretty(&mut *writer, view)
        .map_err(|e| ExpenseError::Export(format!("JSON serialization failed: {}", e)))?;
    writeln!(writer).map_err(|e| ExpenseError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::export::tests::sample_session;

    #[test]
    fn test_json_carries_range_and_total() {
        let view = ViewExport::from_session(&sample_session());
        let mut buffer = Vec::new();
        export_view_json(&view, &mut buffer).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buffer).unwrap();
        assert_eq!(value["start_date"], serde_json::Value::Null);
        assert_eq!(value["end_date"], "2024-01-31");
        assert_eq!(value["count"], 2);
        assert_eq!(value["total"], "24.75");
        assert_eq!(value["expenses"][0]["date"], "2024-01-05");
    }
}
