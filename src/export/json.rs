//! JSON Export functionality

use std::io::Write;

use crate::error::FinboardResult;

use super::summary::SummaryExport;

/// Write a summary export as JSON
pub fn export_summary_json<W: Write>(
    export: &SummaryExport,
    writer: &mut W,
    pretty: bool,
) -> FinboardResult<()> {
    if pretty {
        serde_json::to_writer_pretty(&mut *writer, export)?;
    } else {
        serde_json::to_writer(&mut *writer, export)?;
    }
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;
    use chrono::NaiveDate;

    #[test]
    fn test_json_export() {
        let reference_date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let export = SummaryExport::from_snapshot(&Snapshot::default(), reference_date);

        let mut buf = Vec::new();
        export_summary_json(&export, &mut buf, true).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["schema_version"], "1.0.0");
        assert_eq!(value["reference_date"], "2024-03-31");
        assert_eq!(value["summary"]["monthly"]["current_month"], "2024-03");
        assert_eq!(value["summary"]["monthly"]["savings_rate"], 0.0);
        assert!(value["summary"]["budgets"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_compact_json_is_one_line() {
        let reference_date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let export = SummaryExport::from_snapshot(&Snapshot::default(), reference_date);

        let mut buf = Vec::new();
        export_summary_json(&export, &mut buf, false).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap().lines().count(), 1);
    }
}
