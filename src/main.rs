use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use tally::cli::{
    handle_add_command, handle_analyze_command, handle_audit_command, handle_balance_command,
    handle_chart_command, handle_config_command, handle_export_command, handle_list_command,
    AddArgs, AuditArgs, BalanceArgs, ConfigArgs, ExportArgs,
};
use tally::config::{Settings, TallyPaths};
use tally::storage::Storage;

#[derive(Parser)]
#[command(
    name = "tally",
    author = "Kaylee Beyene",
    version,
    about = "Terminal-based monthly income and cost ledger",
    long_about = "Tally keeps one income/cost record per month. Entering the same \
                  month again adds to its totals. Query your running balance, \
                  analyze yearly totals and export the ledger from the command line."
)]
struct Cli {
    /// Use this records file instead of the one in the data directory
    #[arg(long, global = true, env = "TALLY_RECORDS_FILE")]
    file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add income and cost for a month (merged into any existing record)
    Add(AddArgs),

    /// Show all records
    #[command(alias = "ls")]
    List,

    /// Show highest-income month, highest cost/income years and totals
    Analyze,

    /// Show the cumulative balance up to today or a given month
    Balance(BalanceArgs),

    /// Draw an income vs cost chart
    #[command(alias = "visualize")]
    Chart,

    /// Export records with a summary
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit(AuditArgs),

    /// Show configuration and paths, or change settings
    Config(ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let mut paths = TallyPaths::new()?;
    if let Some(file) = cli.file {
        paths = paths.with_records_file(file);
    }
    let settings = Settings::load_or_create(&paths)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?.with_audit(settings.audit_enabled);
    storage.load_all()?;

    match cli.command {
        Some(Commands::Add(args)) => handle_add_command(&storage, &settings, args)?,
        Some(Commands::List) => handle_list_command(&storage, &settings)?,
        Some(Commands::Analyze) => handle_analyze_command(&storage, &settings)?,
        Some(Commands::Balance(args)) => handle_balance_command(&storage, &settings, args)?,
        Some(Commands::Chart) => handle_chart_command(&storage, &settings)?,
        Some(Commands::Export(args)) => handle_export_command(&storage, args)?,
        Some(Commands::Audit(args)) => handle_audit_command(&storage, args)?,
        Some(Commands::Config(args)) => handle_config_command(&paths, settings, args)?,
        None => {
            println!("Tally - Terminal-based monthly income and cost ledger");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally add --year 2024 --month 3 --income 100 --cost 50' to record a month.");
        }
    }

    Ok(())
}
