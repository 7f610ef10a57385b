//! Keyword Scraper main entry point
//!
//! This is the command-line interface for the documentation keyword scraper.

use anyhow::Context;
use clap::Parser;
use keyword_scraper::config::{load_config_with_hash, Config};
use keyword_scraper::crawler::run_scrape;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Keyword Scraper: a polite documentation harvester
///
/// Walks an alphabetical keyword index one letter page at a time, extracts
/// the text and code of every keyword page, and writes a single JSON archive.
#[derive(Parser, Debug)]
#[command(name = "keyword-scraper")]
#[command(version)]
#[command(about = "Scrapes an alphabetical documentation index into JSON", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => {
            tracing::info!("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    tracing::info!(
        "Index: {}, output: {}",
        config.scraper.index_url,
        config.scraper.output_path
    );

    run_scrape(&config)
        .await
        .context("Scrape run failed")?;

    Ok(())
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("keyword_scraper=info,warn"),
            1 => EnvFilter::new("keyword_scraper=debug,info"),
            _ => EnvFilter::new("keyword_scraper=trace,debug"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
