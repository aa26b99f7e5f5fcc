use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgAction, Args, Parser, Subcommand};

use finboard::cli::{
    handle_budget_command, handle_dashboard_command, handle_export_command, handle_goal_command,
    handle_transaction_command, BudgetCommands, DashboardArgs, ExportArgs, GoalCommands,
    TransactionCommands,
};
use finboard::config::{FinboardPaths, Settings};
use finboard::models::Snapshot;
use finboard::snapshot::{BundleFileSource, DirectorySource, NormalizeMode, SnapshotSource};

#[derive(Parser)]
#[command(
    name = "finboard",
    author = "Kaylee Beyene",
    version,
    about = "Personal-finance dashboard summaries from the command line",
    long_about = "finboard reads a snapshot of your transactions, categories, budgets \
                  and savings goals and shows the dashboard numbers: month-over-month \
                  changes, savings rate, budget consumption and goal progress."
)]
struct Cli {
    #[command(flatten)]
    source: SourceArgs,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Where the snapshot comes from
#[derive(Args)]
struct SourceArgs {
    /// Snapshot bundle file (one JSON document with all four lists)
    #[arg(long, global = true, value_name = "FILE", conflicts_with = "data_dir")]
    snapshot: Option<PathBuf>,

    /// Snapshot directory (transactions.json, categories.json, budgets.json, goals.json)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    /// Reject malformed records instead of skipping or zeroing them
    #[arg(long, global = true)]
    strict: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the dashboard overview
    #[command(alias = "dash")]
    Dashboard(DashboardArgs),

    /// Budget commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Savings goal commands
    #[command(subcommand)]
    Goal(GoalCommands),

    /// Transaction commands
    #[command(subcommand, alias = "txn")]
    Transaction(TransactionCommands),

    /// Export the full summary as JSON or YAML
    Export(ExportArgs),

    /// Write default settings and create the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}

fn load_snapshot(args: &SourceArgs, paths: &FinboardPaths, settings: &Settings) -> Result<Snapshot> {
    let mode = if args.strict {
        NormalizeMode::Strict
    } else {
        settings.normalize_mode()
    };

    let source: Box<dyn SnapshotSource> = match (&args.snapshot, &args.data_dir) {
        (Some(file), _) => Box::new(BundleFileSource::new(file, mode)),
        (None, Some(dir)) => Box::new(DirectorySource::new(dir, mode)),
        (None, None) => Box::new(DirectorySource::new(paths.data_dir(), mode)),
    };

    log::debug!("Reading {} ({} mode)", source.describe(), mode);
    Ok(source.load()?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Initialize paths and settings
    let paths = FinboardPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Dashboard(args)) => {
            let snapshot = load_snapshot(&cli.source, &paths, &settings)?;
            handle_dashboard_command(&snapshot, &settings, args)?;
        }
        Some(Commands::Budget(cmd)) => {
            let snapshot = load_snapshot(&cli.source, &paths, &settings)?;
            handle_budget_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Goal(cmd)) => {
            let snapshot = load_snapshot(&cli.source, &paths, &settings)?;
            handle_goal_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Transaction(cmd)) => {
            let snapshot = load_snapshot(&cli.source, &paths, &settings)?;
            handle_transaction_command(&snapshot, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let snapshot = load_snapshot(&cli.source, &paths, &settings)?;
            handle_export_command(&snapshot, args)?;
        }
        Some(Commands::Init) => {
            println!("Initializing finboard at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Place your API snapshot files in:");
            println!("  {}", paths.data_dir().display());
            println!("  (transactions.json, categories.json, budgets.json, goals.json)");
            println!();
            println!("Run 'finboard dashboard' to see your summary.");
        }
        Some(Commands::Config) => {
            println!("finboard Configuration");
            println!("======================");
            println!("Config directory:  {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Data directory:    {}", paths.data_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:      {}", settings.currency_symbol);
            println!("  Date format:          {}", settings.date_format);
            println!("  Strict normalization: {}", settings.strict_normalization);
            println!("  Bar width:            {}", settings.bar_width);
            println!("  Recent transactions:  {}", settings.recent_limit);
        }
        None => {
            println!("finboard - personal-finance dashboard summaries");
            println!();
            println!("Run 'finboard --help' for usage information.");
            println!("Run 'finboard dashboard' to see this month at a glance.");
        }
    }

    Ok(())
}
