//! YAML Export functionality
//!
//! Human-readable rendition of the summary export.

use std::io::Write;

use crate::error::FinboardResult;

use super::summary::SummaryExport;

/// Write a summary export as YAML, preceded by a comment header
pub fn export_summary_yaml<W: Write>(export: &SummaryExport, writer: &mut W) -> FinboardResult<()> {
    writeln!(writer, "# finboard summary export")?;
    writeln!(writer, "# Generated: {}", export.exported_at)?;
    writeln!(writer, "# App Version: {}", export.app_version)?;
    writeln!(writer)?;

    serde_yaml::to_writer(writer, export)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Snapshot;
    use chrono::NaiveDate;

    #[test]
    fn test_yaml_export() {
        let reference_date = NaiveDate::from_ymd_opt(2024, 3, 31).unwrap();
        let export = SummaryExport::from_snapshot(&Snapshot::default(), reference_date);

        let mut buf = Vec::new();
        export_summary_yaml(&export, &mut buf).unwrap();

        let yaml = String::from_utf8(buf).unwrap();
        assert!(yaml.starts_with("# finboard summary export"));
        assert!(yaml.contains("schema_version:"));
        assert!(yaml.contains("reference_date:"));
        assert!(yaml.contains("2024-03-31"));
        assert!(yaml.contains("savings_rate:"));
    }
}
