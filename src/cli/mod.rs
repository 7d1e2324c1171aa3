//! Command-line interface definitions.

pub mod output;
pub mod report;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// newsimpact - news-to-market correlation and impact ranking.
#[derive(Parser, Debug)]
#[command(name = "newsimpact")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the configuration file
    #[arg(long, global = true, default_value = "newsimpact.toml")]
    pub config: PathBuf,

    /// Override the log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run one pipeline pass and write the analysis report
    Run(RunArgs),

    /// Re-run the pipeline on a schedule until interrupted
    Watch(RunArgs),

    /// Render the latest analysis report
    Report,

    /// Configuration helpers
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(clap::Args, Debug)]
pub struct RunArgs {
    /// Emit logs as JSON
    #[arg(long)]
    pub json_logs: bool,
}

/// Subcommands for `newsimpact config`
#[derive(Subcommand, Debug)]
pub enum ConfigCommand {
    /// Load and validate the configuration file
    Validate,
}
