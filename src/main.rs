use anyhow::Result;
use clap::{Parser, Subcommand};

use dashgen::cli::{
    handle_add_command, handle_register_command, handle_report_command, handle_search_command,
    handle_show_command, AddArgs, RegisterArgs, ReportArgs, SearchArgs, ShowArgs,
};
use dashgen::config::{paths::DashPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "dashgen",
    version,
    about = "Synthetic financial data generator for business dashboards",
    long_about = "dashgen produces plausible, randomly generated financial figures for a \
                  business dashboard: an income/expense series over a reporting period, \
                  totals, and allocations across branches and categories."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a synthetic dashboard report
    #[command(alias = "gen")]
    Report(ReportArgs),

    /// Re-render a saved JSON or YAML report export
    Show(ShowArgs),

    /// List transactions from a register file
    #[command(alias = "txn")]
    Register(RegisterArgs),

    /// Record a transaction in a register file
    Add(AddArgs),

    /// Search administrators, roles, employees and branches
    Search(SearchArgs),

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let paths = DashPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Show(args)) => handle_show_command(&settings, args)?,
        Some(Commands::Register(args)) => handle_register_command(&settings, args)?,
        Some(Commands::Add(args)) => handle_add_command(&settings, args)?,
        Some(Commands::Search(args)) => handle_search_command(args)?,
        Some(Commands::Init) => {
            println!("Initializing dashgen at: {}", paths.base_dir().display());
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Settings written to {}", paths.settings_file().display());
            println!("Edit it to change branches, categories, currency or the default period.");
        }
        Some(Commands::Config) => {
            println!("dashgen Configuration");
            println!("=====================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Exports directory: {}", paths.exports_dir().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:   {}", settings.currency_symbol);
            println!("  Label locale:      {}", settings.label_locale);
            println!("  First day of week: {:?}", settings.week_start());
            println!("  Default period:    {}", settings.default_period);
            match settings.seed {
                Some(seed) => println!("  Seed:              {}", seed),
                None => println!("  Seed:              (random)"),
            }
            println!("  Branches:          {}", settings.branches.len());
            println!("  Expense categories: {}", settings.expense_categories.len());
            println!("  Sales categories:  {}", settings.sales_categories.len());
        }
        None => {
            println!("dashgen - synthetic financial dashboard data");
            println!();
            println!("Run 'dashgen --help' for usage information.");
            println!("Run 'dashgen report --period month' for a sample report.");
        }
    }

    Ok(())
}
