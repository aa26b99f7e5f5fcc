//! Transaction CLI commands

use std::path::PathBuf;

use clap::{Subcommand, ValueEnum};

use crate::config::Settings;
use crate::engine::TransactionFilter;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{CategoryId, Snapshot, TransactionKind};
use crate::reports::TransactionsReport;

use super::create_output;

/// Transaction kind as a command-line value
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Income,
    Expense,
}

impl From<KindArg> for TransactionKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Income => TransactionKind::Income,
            KindArg::Expense => TransactionKind::Expense,
        }
    }
}

/// Transaction subcommands
#[derive(Subcommand, Debug)]
pub enum TransactionCommands {
    /// List transactions, newest first
    List {
        /// Only income or only expenses
        #[arg(short = 't', long = "type", value_enum)]
        kind: Option<KindArg>,

        /// Only this category (ID, e.g. "4" or "cat-4")
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive text to find in descriptions
        #[arg(short, long)]
        search: Option<String>,

        /// Number of transactions to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Handle transaction commands
pub fn handle_transaction_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: TransactionCommands,
) -> FinboardResult<()> {
    match cmd {
        TransactionCommands::List {
            kind,
            category,
            search,
            limit,
            output,
        } => {
            let mut filter = TransactionFilter::new();
            if let Some(kind) = kind {
                filter = filter.kind(kind.into());
            }
            if let Some(category) = category {
                let id: CategoryId = category.parse().map_err(|_| {
                    FinboardError::Validation(format!("Invalid category ID: {}", category))
                })?;
                if snapshot.category(id).is_none() {
                    return Err(FinboardError::category_not_found(category));
                }
                filter = filter.category(id);
            }
            if let Some(search) = search {
                filter = filter.search(search);
            }

            let report = TransactionsReport::generate(snapshot, filter, limit);
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!(
                    "Exported {} transactions to: {}",
                    report.rows.len(),
                    path.display()
                );
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }
    }

    Ok(())
}
