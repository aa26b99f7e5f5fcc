//! CLI command handlers
//!
//! This module contains the implementation of CLI commands, bridging the
//! clap argument parsing with the reports and the summary engine. Every
//! handler works on an already loaded [`Snapshot`](crate::models::Snapshot).

pub mod budget;
pub mod dashboard;
pub mod export;
pub mod goal;
pub mod transaction;

pub use budget::{handle_budget_command, BudgetCommands};
pub use dashboard::{handle_dashboard_command, DashboardArgs};
pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use goal::{handle_goal_command, GoalCommands};
pub use transaction::{handle_transaction_command, KindArg, TransactionCommands};

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{FinboardError, FinboardResult};
use crate::models::Month;

/// Resolve `--as-of`, defaulting to today in local time
pub fn parse_as_of(as_of: Option<&str>) -> FinboardResult<NaiveDate> {
    match as_of {
        Some(s) => NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| {
            FinboardError::Validation(format!("Invalid date: {}. Use YYYY-MM-DD", s))
        }),
        None => Ok(chrono::Local::now().date_naive()),
    }
}

/// Parse a `YYYY-MM` month argument
pub fn parse_month(s: &str) -> FinboardResult<Month> {
    Month::parse(s).map_err(|e| {
        FinboardError::Validation(format!(
            "Invalid month: {}. Use YYYY-MM (e.g., 2025-01)",
            e
        ))
    })
}

/// Open a file for a report or export, creating parent directories
pub(crate) fn create_output(path: &Path) -> FinboardResult<BufWriter<File>> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = File::create(path).map_err(|e| {
        FinboardError::Export(format!("Failed to create file {}: {}", path.display(), e))
    })?;
    Ok(BufWriter::new(file))
}
