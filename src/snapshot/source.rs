//! Where snapshots come from
//!
//! The REST API itself (authentication, token refresh, transport) lives
//! outside this crate. A client for it plugs in by implementing
//! [`SnapshotSource`]; the sources here read what such a client, or a plain
//! `curl` against the list endpoints, has saved to disk.

use std::path::{Path, PathBuf};

use crate::error::FinboardResult;
use crate::models::Snapshot;
use crate::storage::{read_json, read_json_required};

use super::normalize::{NormalizeMode, Normalizer};
use super::raw::{RawBudget, RawCategory, RawGoal, RawSnapshot, RawTransaction};

/// File names used inside a snapshot directory, one per API list endpoint
pub const TRANSACTIONS_FILE: &str = "transactions.json";
pub const CATEGORIES_FILE: &str = "categories.json";
pub const BUDGETS_FILE: &str = "budgets.json";
pub const GOALS_FILE: &str = "goals.json";

/// Anything that can produce a normalized snapshot
pub trait SnapshotSource {
    /// Fetch and normalize a snapshot
    fn load(&self) -> FinboardResult<Snapshot>;

    /// Human-readable origin, for messages
    fn describe(&self) -> String;
}

/// A single JSON document with `transactions`, `categories`, `budgets` and
/// `goals` arrays
#[derive(Debug, Clone)]
pub struct BundleFileSource {
    path: PathBuf,
    normalizer: Normalizer,
}

impl BundleFileSource {
    pub fn new(path: impl Into<PathBuf>, mode: NormalizeMode) -> Self {
        Self {
            path: path.into(),
            normalizer: Normalizer::new(mode),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotSource for BundleFileSource {
    fn load(&self) -> FinboardResult<Snapshot> {
        log::info!("Loading snapshot bundle from {}", self.path.display());
        let raw: RawSnapshot = read_json_required(&self.path)?;
        self.normalizer.snapshot(raw)
    }

    fn describe(&self) -> String {
        format!("bundle {}", self.path.display())
    }
}

/// A directory holding one JSON array per API endpoint
///
/// Missing files read as empty lists.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    normalizer: Normalizer,
}

impl DirectorySource {
    pub fn new(dir: impl Into<PathBuf>, mode: NormalizeMode) -> Self {
        Self {
            dir: dir.into(),
            normalizer: Normalizer::new(mode),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

impl SnapshotSource for DirectorySource {
    fn load(&self) -> FinboardResult<Snapshot> {
        log::info!("Loading snapshot from directory {}", self.dir.display());
        let raw = RawSnapshot {
            transactions: read_json::<Vec<RawTransaction>, _>(self.dir.join(TRANSACTIONS_FILE))?,
            categories: read_json::<Vec<RawCategory>, _>(self.dir.join(CATEGORIES_FILE))?,
            budgets: read_json::<Vec<RawBudget>, _>(self.dir.join(BUDGETS_FILE))?,
            goals: read_json::<Vec<RawGoal>, _>(self.dir.join(GOALS_FILE))?,
        };
        self.normalizer.snapshot(raw)
    }

    fn describe(&self) -> String {
        format!("directory {}", self.dir.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Money, TransactionKind};
    use std::fs;
    use tempfile::TempDir;

    const BUNDLE: &str = r#"{
        "transactions": [
            {"id": 1, "date": "2024-01-05", "description": "Salary", "category": 1, "type": "Income", "amount": "1000.00"},
            {"id": 2, "date": "2024-01-10", "description": "Food", "category": 2, "type": "expense", "amount": 300}
        ],
        "categories": [
            {"id": 1, "name": "Salary", "type": "IN"},
            {"id": 2, "name": "Food", "type": "EX", "description": null}
        ],
        "budgets": [{"id": 1, "category": 2, "month": "2024-01-01", "amount": "200.00"}],
        "goals": [{"id": 1, "title": "Bike", "target_amount": "500.00", "current_amount": "125.00", "deadline": "2024-12-31"}]
    }"#;

    #[test]
    fn test_bundle_source() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("snapshot.json");
        fs::write(&path, BUNDLE).unwrap();

        let snapshot = BundleFileSource::new(&path, NormalizeMode::Strict).load().unwrap();
        assert_eq!(snapshot.transactions.len(), 2);
        assert_eq!(snapshot.transactions[0].kind, TransactionKind::Income);
        assert_eq!(snapshot.transactions[1].amount, Money::from_dollars(300));
        assert_eq!(snapshot.budgets[0].amount, Money::from_dollars(200));
        assert_eq!(snapshot.goals[0].current_amount, Money::from_dollars(125));
    }

    #[test]
    fn test_bundle_source_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let source = BundleFileSource::new(temp_dir.path().join("nope.json"), NormalizeMode::Lenient);
        assert!(source.load().is_err());
        assert!(source.describe().contains("nope.json"));
    }

    #[test]
    fn test_directory_source_reads_what_exists() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join(TRANSACTIONS_FILE),
            r#"[{"id": 1, "date": "2024-01-05", "type": "income", "amount": "10"}]"#,
        )
        .unwrap();
        fs::write(
            temp_dir.path().join(GOALS_FILE),
            r#"[{"id": 4, "title": "Trip", "target_amount": 900, "current_amount": 0, "deadline": "2025-07-01"}]"#,
        )
        .unwrap();

        let snapshot = DirectorySource::new(temp_dir.path(), NormalizeMode::Lenient)
            .load()
            .unwrap();
        assert_eq!(snapshot.transactions.len(), 1);
        assert_eq!(snapshot.goals.len(), 1);
        assert!(snapshot.categories.is_empty());
        assert!(snapshot.budgets.is_empty());
    }

    #[test]
    fn test_empty_directory_is_empty_snapshot() {
        let temp_dir = TempDir::new().unwrap();
        let snapshot = DirectorySource::new(temp_dir.path(), NormalizeMode::Strict)
            .load()
            .unwrap();
        assert!(snapshot.is_empty());
    }
}
