//! Dalil main entry point
//!
//! This is the command-line interface for the Monshaat business guide
//! directory scraper.

use anyhow::Context;
use clap::Parser;
use dalil::config::{default_config, load_config, Config};
use dalil::output::write_records;
use dalil::scrape::Scraper;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// Dalil: Monshaat business directory scraper
///
/// Walks the paginated business directory, follows every business card to
/// its detail page, and writes the collected titles, descriptions and
/// classifications to a CSV file.
#[derive(Parser, Debug)]
#[command(name = "dalil")]
#[command(version = "1.0.0")]
#[command(about = "Monshaat business directory scraper", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (built-in Monshaat defaults when omitted)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be scraped without fetching anything
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load and validate configuration
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            load_config(path).with_context(|| format!("failed to load {}", path.display()))?
        }
        None => {
            tracing::info!("No config file given, using built-in Monshaat settings");
            default_config()?
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_scrape(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("dalil=info,warn"),
            1 => EnvFilter::new("dalil=debug,info"),
            2 => EnvFilter::new("dalil=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

/// Handles the --dry-run mode: validates config and shows what would be scraped
fn handle_dry_run(config: &Config) {
    println!("=== Dalil Dry Run ===\n");

    println!("Site:");
    println!("  Origin: {}", config.site.origin);
    println!("  Directory: {}", config.site.directory_url);

    println!("\nScrape:");
    println!("  Page delay: {}ms", config.scrape.page_delay_ms);
    match config.scrape.max_pages {
        Some(cap) => println!("  Max pages: {}", cap),
        None => println!("  Max pages: unlimited (follow pagination until it ends)"),
    }

    println!("\nOutput:");
    println!("  CSV file: {}", config.output.csv_path);

    println!("\n✓ Configuration is valid");
}

/// Handles the main scrape operation
async fn handle_scrape(config: Config) -> anyhow::Result<()> {
    let csv_path = config.output.csv_path.clone();

    let scraper = Scraper::new(config).context("failed to build HTTP client")?;
    let records = scraper.run().await;

    write_records(Path::new(&csv_path), &records)
        .with_context(|| format!("failed to write {}", csv_path))?;

    tracing::info!("Wrote {} record(s) to {}", records.len(), csv_path);
    Ok(())
}
