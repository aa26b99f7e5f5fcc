//! Budget CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{BudgetId, Snapshot};
use crate::reports::{BudgetRow, BudgetsReport};

use super::{create_output, parse_as_of, parse_month};

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// List budgets with spending and status
    List {
        /// Only budgets for this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,

        /// Only budgets for the month containing this date (YYYY-MM-DD)
        #[arg(long, conflicts_with = "month")]
        as_of: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show one budget in detail
    Show {
        /// Budget ID (e.g., "3" or "bud-3")
        id: String,
    },
}

/// Handle budget commands
pub fn handle_budget_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: BudgetCommands,
) -> FinboardResult<()> {
    match cmd {
        BudgetCommands::List {
            month,
            as_of,
            output,
        } => {
            let month = match (month, as_of) {
                (Some(m), _) => Some(parse_month(&m)?),
                (None, Some(d)) => Some(parse_as_of(Some(d.as_str()))?.into()),
                (None, None) => None,
            };

            let report = BudgetsReport::generate(snapshot, month);
            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Budget report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }

        BudgetCommands::Show { id } => {
            let budget_id: BudgetId = id
                .parse()
                .map_err(|_| FinboardError::Validation(format!("Invalid budget ID: {}", id)))?;
            let budget = snapshot
                .budget(budget_id)
                .ok_or_else(|| FinboardError::budget_not_found(&id))?;

            print!("{}", BudgetRow::new(budget, snapshot).format_detail(settings));
        }
    }

    Ok(())
}
