mod commands;
mod input;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use charter_intel_core::charter::CharterSchedule;
use commands::charter::{CategoryArgs, CharterArgs, EligibilityArgs, FormatMadArgs, ThresholdArgs, ValidateArgs};
use commands::markets::{HeatArgs, InfrastructureArgs, PipelineArgs, PortfolioArgs};

/// Morocco investment charter incentives and market analytics
#[derive(Parser)]
#[command(
    name = "mci",
    version,
    about = "Morocco investment charter incentives and market analytics",
    long_about = "A CLI for 2026 Investment Charter cashback calculations with decimal \
                  precision, plus portfolio, development pipeline and heat-map roll-ups \
                  over JSON datasets."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,

    /// Charter schedule override (JSON, or YAML with a .yaml/.yml extension)
    #[arg(long, global = true)]
    schedule: Option<String>,

    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Calculate charter cashback, eligibility and validation in one pass
    Charter(CharterArgs),
    /// Check an investment against the category minimum
    Eligibility(EligibilityArgs),
    /// Resolve a city or region to its charter category
    Category(CategoryArgs),
    /// Minimum investment for a category
    Threshold(ThresholdArgs),
    /// Advisory validation of a (partial) calculation input
    Validate(ValidateArgs),
    /// Format an amount in MAD
    FormatMad(FormatMadArgs),
    /// Portfolio value, net cost and charter projections
    Portfolio(PortfolioArgs),
    /// Filter and summarise the hotel development pipeline
    Pipeline(PipelineArgs),
    /// Rank investment heat zones
    Heat(HeatArgs),
    /// Count 2030 infrastructure projects by layer and status
    Infrastructure(InfrastructureArgs),
    /// Print the effective charter schedule
    Schedule,
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Csv,
    Minimal,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .without_time()
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let schedule = match cli.schedule.as_deref() {
        Some(path) => match input::schedule::load_schedule(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("{}: {}", "error".red().bold(), e);
                process::exit(1);
            }
        },
        None => CharterSchedule::builtin().clone(),
    };

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::Charter(args) => commands::charter::run_charter(args, &schedule),
        Commands::Eligibility(args) => commands::charter::run_eligibility(args, &schedule),
        Commands::Category(args) => commands::charter::run_category(args, &schedule),
        Commands::Threshold(args) => commands::charter::run_threshold(args, &schedule),
        Commands::Validate(args) => commands::charter::run_validate(args),
        Commands::FormatMad(args) => commands::charter::run_format_mad(args),
        Commands::Portfolio(args) => commands::markets::run_portfolio(args, &schedule),
        Commands::Pipeline(args) => commands::markets::run_pipeline(args),
        Commands::Heat(args) => commands::markets::run_heat(args, &schedule),
        Commands::Infrastructure(args) => commands::markets::run_infrastructure(args),
        Commands::Schedule => commands::charter::run_schedule(&schedule),
        Commands::Version => {
            println!("mci {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            tracing::debug!(error = %e, "command failed");
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}
