use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, warn};

use catalog_pricing::config::Config;
use catalog_pricing::logging;
use catalog_pricing::pipeline::{Pipeline, ReportOutcome};

#[derive(Parser)]
#[command(name = "catalog_pricing")]
#[command(about = "Builds catalog-update and tiered-discount CSVs from product pricing sheets")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    source: SourceArgs,
}

#[derive(Args, Clone, Default)]
struct SourceArgs {
    /// Folder holding the input CSVs; outputs are written next to them
    #[arg(long, global = true)]
    folder: Option<PathBuf>,

    /// TOML config file (defaults to ./pricing.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Read the inputs and write both reports (default)
    Run,
    /// Read the inputs and report how the update names join, without writing
    Check,
}

fn load_config(args: &SourceArgs) -> anyhow::Result<Config> {
    let mut config = Config::load(args.config.as_deref()).context("Failed to load configuration")?;
    if let Some(folder) = &args.folder {
        config.folder = folder.clone();
    }
    Ok(config)
}

fn print_outcome(label: &str, outcome: &ReportOutcome) {
    match outcome {
        ReportOutcome::Written {
            path,
            rows,
            missing,
            filtered,
        } => {
            println!("\n📄 {}", label);
            println!("   Rows written: {}", rows);
            println!("   Skipped (missing data): {}", missing);
            if *filtered > 0 {
                println!("   Excluded by core: {}", filtered);
            }
            println!("   Output file: {}", path.display());
        }
        ReportOutcome::Failed { path, error } => {
            println!("\n❌ {} failed: {} ({})", label, error, path.display());
        }
    }
}

fn main() -> anyhow::Result<()> {
    logging::init_logging();

    let cli = Cli::parse();
    let config = load_config(&cli.source)?;

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => {
            println!("🚀 Generating pricing reports from {}", config.folder.display());
            let result = Pipeline::run(&config);

            if !result.input_failures.is_empty() {
                warn!("{} input files could not be read completely", result.input_failures.len());
                println!("\n⚠️  Input problems:");
                for failure in &result.input_failures {
                    println!("   - {}", failure);
                }
            }

            print_outcome("Catalog update CSV", &result.catalog_update);
            print_outcome("Combined discount CSV", &result.combined_discount);

            if !result.catalog_update.is_written() || !result.combined_discount.is_written() {
                error!("Not all reports were written");
            }
        }
        Commands::Check => {
            let coverage = Pipeline::check(&config);
            println!("🔎 Join coverage for {}", config.folder.display());
            println!("   Update names: {}", coverage.update_names);
            println!("   Fully joined: {}", coverage.joined);
            println!("   Discount eligible (MPU/M4): {}", coverage.discount_eligible);
            println!("   Missing product ID: {}", coverage.missing_direct.len());
            for name in &coverage.missing_direct {
                println!("   - {}", name);
            }
            println!("   Missing price info: {}", coverage.missing_price.len());
            for name in &coverage.missing_price {
                println!("   - {}", name);
            }
        }
    }
    Ok(())
}
