//! Command implementations for the trip_sync CLI
//!
//! Logging setup, configuration layering and the `list` / `validate`
//! commands.

use anyhow::Context;
use colored::Colorize;
use serde::Serialize;
use std::path::Path;
use tracing::{debug, info};

use crate::app::services::choreography_parser::{ChoreographyParser, ParseResult};
use crate::app::services::choreography_fetcher::ChoreographyFetcher;
use crate::cli::args::{Args, Commands, ListArgs, LoggingArgs, OutputFormat, ValidateArgs};
use crate::cli::render::{format_details, format_heading, format_tags};
use crate::config::Config;
use crate::{Error, Result};

/// Main command runner
///
/// Returns `Ok(())` without doing anything when no subcommand was given; the
/// binary prints help in that case.
pub async fn run(args: Args) -> anyhow::Result<()> {
    match args.command {
        Some(Commands::List(list_args)) => run_list(list_args).await,
        Some(Commands::Validate(validate_args)) => run_validate(validate_args).await,
        None => Ok(()),
    }
}

/// Fetch the sheet and print valid choreographies
pub async fn run_list(args: ListArgs) -> anyhow::Result<()> {
    setup_logging(&args.logging);

    let config = load_configuration(args.url.as_deref())?;
    let fetcher = ChoreographyFetcher::new(&config).context("Invalid configuration")?;
    let choreographies = fetcher
        .fetch()
        .await
        .context("Failed to load choreography sheet")?;

    match args.format {
        OutputFormat::Json => {
            println!("{}", to_json(&choreographies)?);
        }
        OutputFormat::Text => {
            for choreography in &choreographies {
                println!("{}", format_heading(choreography).bold());
                println!("  {}", format_details(choreography).dimmed());
                println!("  {}", format_tags(choreography).cyan());
                if let Some(notes) = &choreography.notes {
                    println!("  {}", notes.italic());
                }
            }
            println!();
            println!("{} choreographies", choreographies.len().to_string().green());
        }
    }

    Ok(())
}

/// Parse the sheet and print rejected rows with statistics
pub async fn run_validate(args: ValidateArgs) -> anyhow::Result<()> {
    setup_logging(&args.logging);

    let result = match &args.file {
        Some(path) => {
            let config = Config::from_env();
            validate_file(path, &config)
                .with_context(|| format!("Failed to validate {}", path.display()))?
        }
        None => {
            let config = load_configuration(args.url.as_deref())?;
            ChoreographyFetcher::new(&config)
                .context("Invalid configuration")?
                .fetch_with_report()
                .await
                .context("Failed to load choreography sheet")?
        }
    };

    match args.format {
        OutputFormat::Json => {
            let report = serde_json::json!({
                "stats": result.stats,
                "rejections": result.rejections,
            });
            println!("{}", to_json(&report)?);
        }
        OutputFormat::Text => print_validation_report(&result),
    }

    Ok(())
}

/// Parse a local CSV export with the given configuration
pub fn validate_file(path: &Path, config: &Config) -> Result<ParseResult> {
    info!("Reading choreography sheet from {}", path.display());

    let content = std::fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    let parser = ChoreographyParser::new(config)?;

    Ok(parser.parse(&content))
}

/// Pretty-print a report as JSON
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn print_validation_report(result: &ParseResult) {
    for rejection in &result.rejections {
        let title = if rejection.title.is_empty() {
            "<untitled>"
        } else {
            rejection.title.as_str()
        };
        println!(
            "{} line {}: {}",
            "✗".red(),
            rejection.line,
            title.bold()
        );
        for message in &rejection.messages {
            println!("    {} - {}", message.field.to_string().yellow(), message.message);
        }
    }

    let stats = &result.stats;
    println!();
    println!(
        "{} rows, {} valid, {} rejected ({:.1}% valid)",
        stats.total_rows,
        stats.records_parsed.to_string().green(),
        stats.rows_rejected.to_string().red(),
        stats.success_rate()
    );
}

/// Layer configuration: defaults, then environment, then CLI overrides
pub fn load_configuration(url_override: Option<&str>) -> Result<Config> {
    let mut config = Config::from_env();

    if let Some(url) = url_override {
        debug!("Source URL overridden from command line");
        config.source_url = url.to_string();
    }

    config.validate()?;
    Ok(config)
}

/// Set up structured logging on stderr
pub fn setup_logging(args: &LoggingArgs) {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = args.get_log_level();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("trip_sync={}", log_level)));

    let result = if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
    };

    if result.is_ok() {
        debug!("Logging initialized at level: {}", log_level);
    }
}
