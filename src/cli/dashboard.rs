//! Dashboard CLI command

use std::path::PathBuf;

use clap::Args;

use crate::config::Settings;
use crate::error::FinboardResult;
use crate::models::Snapshot;
use crate::reports::DashboardReport;

use super::{create_output, parse_as_of};

/// Arguments for `finboard dashboard`
#[derive(Args, Debug, Default)]
pub struct DashboardArgs {
    /// Reference date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Number of recent transactions to show (default: from settings)
    #[arg(short, long)]
    pub recent: Option<usize>,

    /// Export the headline metrics to a CSV file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the dashboard command
pub fn handle_dashboard_command(
    snapshot: &Snapshot,
    settings: &Settings,
    args: DashboardArgs,
) -> FinboardResult<()> {
    let as_of = parse_as_of(args.as_of.as_deref())?;
    let recent = args.recent.unwrap_or(settings.recent_limit);
    let report = DashboardReport::generate(snapshot, as_of, recent);

    if let Some(path) = args.output {
        report.export_csv(create_output(&path)?)?;
        println!("Dashboard exported to: {}", path.display());
    } else {
        print!("{}", report.format_terminal(settings));
    }

    Ok(())
}
