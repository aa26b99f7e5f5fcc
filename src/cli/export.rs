//! CLI command for summary export

use std::io::{self, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::FinboardResult;
use crate::export::{export_summary_json, export_summary_yaml, SummaryExport};
use crate::models::Snapshot;

use super::{create_output, parse_as_of};

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ExportFormat {
    /// JSON format (machine-readable)
    #[default]
    Json,
    /// YAML format (human-readable)
    Yaml,
}

/// Arguments for `finboard export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Reference date (YYYY-MM-DD, default: today)
    #[arg(long)]
    pub as_of: Option<String>,

    /// Output file path (default: standard output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Compact single-line JSON
    #[arg(long)]
    pub compact: bool,
}

/// Handle summary export
pub fn handle_export_command(snapshot: &Snapshot, args: ExportArgs) -> FinboardResult<()> {
    let as_of = parse_as_of(args.as_of.as_deref())?;
    let export = SummaryExport::from_snapshot(snapshot, as_of);

    match &args.output {
        Some(path) => {
            let mut writer = create_output(path)?;
            write_export(&export, args.format, !args.compact, &mut writer)?;
            writer.flush()?;
            println!("Summary exported to: {}", path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut lock = stdout.lock();
            write_export(&export, args.format, !args.compact, &mut lock)?;
        }
    }

    Ok(())
}

fn write_export<W: Write>(
    export: &SummaryExport,
    format: ExportFormat,
    pretty: bool,
    writer: &mut W,
) -> FinboardResult<()> {
    match format {
        ExportFormat::Json => export_summary_json(export, writer, pretty),
        ExportFormat::Yaml => export_summary_yaml(export, writer),
    }
}
