//! # reqcheck CLI entry point
//!
//! Parses command-line arguments, builds the effective configuration, and
//! dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use reqcheck_cli::evaluate::{run_evaluate, EvaluateArgs};
use reqcheck_cli::extract::{run_extract, ExtractArgs};
use reqcheck_cli::tiers::{run_tiers, TiersArgs};
use reqcheck_cli::{load_config, EXIT_ERROR};

/// reqcheck — rate how completely a result covers the requirements of a query.
///
/// Requirement identifiers are extracted from the query, feature identifiers
/// from the result, and the share of requirements present among the features
/// is mapped to a rating from POOR (1) to EXCELLENT (5).
#[derive(Parser, Debug)]
#[command(name = "reqcheck", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rate a result against the requirements of a query.
    Evaluate(EvaluateArgs),

    /// List the identifiers found in a text.
    Extract(ExtractArgs),

    /// Show the rating tiers and their cut-offs.
    Tiers(TiersArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    tracing::debug!("reqcheck v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(EXIT_ERROR);
        }
    };

    let result = match cli.command {
        Commands::Evaluate(args) => run_evaluate(&args, &config),
        Commands::Extract(args) => run_extract(&args, &config),
        Commands::Tiers(args) => run_tiers(&args, &config),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
