//! Pokemon GO IV calculator and CP filter generator.
//!
//! Loads the content bundle and answers appraisal and search-string queries
//! from the command line.
//!
//! ```bash
//! pogo appraise --species 0150 --cp 2387 --hp 136 --stardust 2500 --ivt-tier amazing
//! pogo cp-filter --species 0150 --tier 1 --encounter wild --weather
//! ```

mod commands;
mod config;
mod logging;

use anyhow::Result;
use clap::Parser;
use commands::{Appraise, CpFilterCmd, ListSpecies, Stardust};
use config::CliConfig;

/// Pokemon GO IV calculator
#[derive(Parser)]
#[command(name = "pogo")]
#[command(about = "IV calculator and CP filter generator", long_about = None)]
#[command(version)]
struct Cli {
    /// Content directory (overrides POGO_DATA_DIR)
    #[arg(long, global = true)]
    data_dir: Option<std::path::PathBuf>,

    /// Log engine details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// List IV combinations matching a CP/HP reading
    Appraise(Appraise),

    /// Generate pass/fail search strings for an IV threshold
    CpFilter(CpFilterCmd),

    /// List species in the content bundle
    Species(ListSpecies),

    /// List stardust cost options
    Stardust(Stardust),
}

fn main() -> Result<()> {
    // Load .env file if it exists (for POGO_DATA_DIR and other env vars)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose);

    let mut config = CliConfig::from_env();
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    tracing::debug!(data_dir = %config.data_dir.display(), "configuration resolved");

    match cli.command {
        Command::Appraise(cmd) => cmd.execute(&config),
        Command::CpFilter(cmd) => cmd.execute(&config),
        Command::Species(cmd) => cmd.execute(&config),
        Command::Stardust(cmd) => cmd.execute(&config),
    }
}
