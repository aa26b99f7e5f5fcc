//! Exportable summary document
//!
//! Wraps a [`SnapshotSummary`] with the metadata needed to interpret it
//! later: schema version, generation time and the app that produced it.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::engine::{summarize, SnapshotSummary};
use crate::models::Snapshot;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Summary export structure
#[derive(Debug, Clone, Serialize)]
pub struct SummaryExport {
    /// Schema version for compatibility checking
    pub schema_version: String,

    /// Export timestamp
    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Date the summary was computed for
    pub reference_date: NaiveDate,

    pub metadata: ExportMetadata,

    pub summary: SnapshotSummary,
}

/// Counts describing the snapshot the summary was computed from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportMetadata {
    pub transaction_count: usize,
    pub category_count: usize,
    pub budget_count: usize,
    pub goal_count: usize,

    /// Date range of transactions (earliest)
    pub earliest_transaction: Option<NaiveDate>,

    /// Date range of transactions (latest)
    pub latest_transaction: Option<NaiveDate>,
}

impl ExportMetadata {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        Self {
            transaction_count: snapshot.transactions.len(),
            category_count: snapshot.categories.len(),
            budget_count: snapshot.budgets.len(),
            goal_count: snapshot.goals.len(),
            earliest_transaction: snapshot.transactions.iter().map(|t| t.date).min(),
            latest_transaction: snapshot.transactions.iter().map(|t| t.date).max(),
        }
    }
}

impl SummaryExport {
    /// Summarize `snapshot` as of `reference_date` and stamp it with the
    /// current time
    pub fn from_snapshot(snapshot: &Snapshot, reference_date: NaiveDate) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            reference_date,
            metadata: ExportMetadata::from_snapshot(snapshot),
            summary: summarize(snapshot, reference_date),
        }
    }
}
