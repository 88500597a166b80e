//! Charm-Manifest main entry point
//!
//! This is the command-line interface for the Charm-Manifest crawler.

use charm_manifest::config::{load_config_with_hash, Config};
use charm_manifest::crawler::crawl;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Charm-Manifest: a polite manifest crawler
///
/// Sweeps a service-manual mirror's make/year hierarchy one request at a
/// time and writes a CSV manifest mapping every discovered model to its
/// document-bundle URL.
#[derive(Parser, Debug)]
#[command(name = "charm-manifest")]
#[command(version = "1.0.0")]
#[command(about = "A polite manifest crawler", long_about = None)]
struct Cli {
    /// Path to TOML configuration file (defaults to the built-in charm.li configuration)
    #[arg(value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without any network calls
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    // Load configuration, or fall back to the built-in defaults
    let config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            match load_config_with_hash(path) {
                Ok((cfg, hash)) => {
                    tracing::info!("Configuration loaded successfully (hash: {})", hash);
                    cfg
                }
                Err(e) => {
                    tracing::error!("Failed to load configuration: {}", e);
                    return Err(e.into());
                }
            }
        }
        None => {
            tracing::info!("No config file given, using built-in charm.li configuration");
            Config::charm_li()
        }
    };

    if cli.dry_run {
        handle_dry_run(&config);
        return Ok(());
    }

    handle_crawl(config).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("charm_manifest=info,warn"),
            1 => EnvFilter::new("charm_manifest=debug,info"),
            2 => EnvFilter::new("charm_manifest=trace,debug"),
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

/// Handles the --dry-run mode: validates config and shows the sweep shape
fn handle_dry_run(config: &Config) {
    println!("=== Charm-Manifest Dry Run ===\n");

    println!("Site:");
    println!("  Base URL: {}", config.site.base_url);
    println!("  User agent: {}", config.site.user_agent);

    println!("\nCrawler:");
    println!("  Throttle: {}ms between requests", config.crawler.throttle_ms);
    println!(
        "  Timeouts: {}s probe, {}s listing",
        config.crawler.probe_timeout_secs, config.crawler.listing_timeout_secs
    );
    println!(
        "  Years: {}..={}",
        config.crawler.year_start, config.crawler.year_end
    );

    println!("\nOutput:");
    println!("  Manifest: {}", config.output.manifest_path);

    println!("\nMakes ({}):", config.makes.len());
    for make in &config.makes {
        println!("  - {}", make);
    }

    let year_count = config.years().count();
    println!("\n✓ Configuration is valid");
    println!(
        "✓ Would probe {} (make, year) pairs ({} to {} requests)",
        config.makes.len() * year_count,
        config.makes.len() * year_count,
        config.makes.len() * year_count * 2
    );
}

/// Handles the main crawl operation
async fn handle_crawl(config: Config) -> Result<(), Box<dyn std::error::Error>> {
    tracing::info!(
        "Sweeping {} makes across {}..={}",
        config.makes.len(),
        config.crawler.year_start,
        config.crawler.year_end
    );

    match crawl(config).await {
        Ok(path) => {
            tracing::info!("Crawl completed successfully");
            println!("Manifest written to: {}", path.display());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e.into())
        }
    }
}
