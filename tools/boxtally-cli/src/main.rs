//! Boxtally CLI — Command-line interface for catalog bundles.
//!
//! Usage:
//!   boxtally init <NAME>       Create a new empty catalog bundle
//!   boxtally info <PATH>       Show catalog information
//!   boxtally validate <PATH>   Validate a catalog bundle
//!   boxtally totals <PATH>     Compute per-studio gross totals

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "boxtally",
    about = "Per-studio box-office totals from director catalogs",
    version,
    author
)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create a new empty catalog bundle
    Init {
        /// Catalog name
        name: String,

        /// Output directory (defaults to the configured catalogs dir)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show catalog information
    Info {
        /// Path to the catalog bundle directory
        path: PathBuf,
    },

    /// Validate a catalog bundle
    Validate {
        /// Path to the catalog bundle directory
        path: PathBuf,
    },

    /// Compute per-studio gross totals
    Totals {
        /// Path to the catalog bundle directory
        path: PathBuf,

        /// Emit the totals as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Also write the totals to `reports/studio-totals.json`
        #[arg(long)]
        save: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = boxtally_common::config::AppConfig::load();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    boxtally_common::logging::init_logging(&boxtally_common::config::LoggingConfig {
        level: log_level.to_string(),
        json: config.logging.json,
        file: config.logging.file.clone(),
    });

    match cli.command {
        Commands::Init { name, output } => {
            let output = output.unwrap_or_else(|| config.catalogs_dir.clone());
            commands::init::run(name, output)
        }
        Commands::Info { path } => commands::info::run(path),
        Commands::Validate { path } => commands::validate::run(path),
        Commands::Totals { path, json, save } => {
            commands::totals::run(path, json || config.report.json, save, &config.report)
        }
    }
}
