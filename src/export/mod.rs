//! Export module for finboard
//!
//! Writes the full computed summary of a snapshot in two formats:
//! - JSON: machine-readable
//! - YAML: human-readable
//!
//! Per-report CSV export lives with each report in [`crate::reports`].

pub mod json;
pub mod summary;
pub mod yaml;

pub use json::export_summary_json;
pub use summary::{ExportMetadata, SummaryExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_summary_yaml;
