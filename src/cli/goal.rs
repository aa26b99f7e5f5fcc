//! Savings goal CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::config::Settings;
use crate::error::{FinboardError, FinboardResult};
use crate::models::{GoalId, Snapshot};
use crate::reports::{GoalRow, GoalsReport};

use super::{create_output, parse_as_of};

/// Savings goal subcommands
#[derive(Subcommand, Debug)]
pub enum GoalCommands {
    /// List savings goals with progress
    List {
        /// Reference date for overdue checks (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,

        /// Export to CSV file
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show one savings goal in detail
    Show {
        /// Goal ID (e.g., "2" or "goal-2")
        id: String,

        /// Reference date for overdue checks (YYYY-MM-DD, default: today)
        #[arg(long)]
        as_of: Option<String>,
    },
}

/// Handle savings goal commands
pub fn handle_goal_command(
    snapshot: &Snapshot,
    settings: &Settings,
    cmd: GoalCommands,
) -> FinboardResult<()> {
    match cmd {
        GoalCommands::List { as_of, output } => {
            let as_of = parse_as_of(as_of.as_deref())?;
            let report = GoalsReport::generate(snapshot, as_of);

            if let Some(path) = output {
                report.export_csv(create_output(&path)?)?;
                println!("Goals report exported to: {}", path.display());
            } else {
                print!("{}", report.format_terminal(settings));
            }
        }

        GoalCommands::Show { id, as_of } => {
            let as_of = parse_as_of(as_of.as_deref())?;
            let goal_id: GoalId = id
                .parse()
                .map_err(|_| FinboardError::Validation(format!("Invalid goal ID: {}", id)))?;
            let goal = snapshot
                .goal(goal_id)
                .ok_or_else(|| FinboardError::goal_not_found(&id))?;

            print!("{}", GoalRow::new(goal, as_of).format_detail(settings));
        }
    }

    Ok(())
}
