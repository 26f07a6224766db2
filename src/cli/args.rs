//! Command-line argument definitions for trip_sync
//!
//! This module defines the CLI interface using the clap derive API.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the choreography sheet tool
///
/// Fetches the community choreography sheet, validates every row and lists
/// the entries that passed.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "trip_sync",
    version,
    about = "List and validate the shared Audio Trip choreography sheet",
    long_about = "Fetches the published choreography sheet (CSV), parses every row into \
                  typed fields and drops rows that fail validation. The source URL is read \
                  from the CSV_URL environment variable unless --url is given."
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Fetch the sheet and list valid choreographies
    List(ListArgs),
    /// Fetch (or read) the sheet and report rejected rows
    Validate(ValidateArgs),
}

/// Arguments for the list command
#[derive(Debug, Clone, Parser)]
pub struct ListArgs {
    /// Source URL of the published sheet (overrides CSV_URL)
    #[arg(short = 'u', long = "url", value_name = "URL")]
    pub url: Option<String>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Arguments for the validate command
#[derive(Debug, Clone, Parser)]
pub struct ValidateArgs {
    /// Source URL of the published sheet (overrides CSV_URL)
    #[arg(
        short = 'u',
        long = "url",
        value_name = "URL",
        conflicts_with = "file"
    )]
    pub url: Option<String>,

    /// Validate a local CSV export instead of fetching
    #[arg(long = "file", value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'f', long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub logging: LoggingArgs,
}

/// Logging switches shared by all commands
#[derive(Debug, Clone, ClapArgs)]
pub struct LoggingArgs {
    /// Logging verbosity level
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors
    #[arg(
        short = 'q',
        long = "quiet",
        help = "Suppress log output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,
}

impl LoggingArgs {
    /// Get the tracing level implied by the flags
    ///
    /// Rejected rows are logged at warn, so they show by default.
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Text,
    /// JSON format for scripting
    Json,
}
