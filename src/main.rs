//! SiteScribe main entry point
//!
//! This is the command-line interface for the SiteScribe site harvester.

use anyhow::Context;
use chrono::Local;
use clap::{Parser, ValueEnum};
use sitescribe::config::{default_include_prefixes, load_config_with_hash, parse_path_list, validate};
use sitescribe::output::{artifact_path, DOCUMENT_PREFIX, INVENTORY_PREFIX};
use sitescribe::{CrawlConfig, Crawler, ProgressState, ScribeError};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// What a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// Extract every page into one Word document
    Document,
    /// Write a CSV inventory of every reachable URL
    Listing,
}

/// SiteScribe: a polite single-site content harvester
///
/// SiteScribe crawls every reachable page of one website, staying on the
/// start URL's host and inside the configured path prefixes, and exports
/// either the readable content or a URL inventory.
#[derive(Parser, Debug)]
#[command(name = "sitescribe")]
#[command(version)]
#[command(about = "A polite single-site content harvester", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(value_name = "CONFIG")]
    config: PathBuf,

    /// Output mode
    #[arg(long, value_enum, default_value_t = Mode::Document)]
    mode: Mode,

    /// Override the start URL from the configuration
    #[arg(long, value_name = "URL")]
    url: Option<String>,

    /// Override the excluded path prefixes (comma separated)
    #[arg(long, value_name = "PATHS")]
    exclude: Option<String>,

    /// Recognize text in images
    #[arg(long)]
    ocr: bool,

    /// Extract text from linked PDF files
    #[arg(long)]
    pdf: bool,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Validate config and show what would be crawled without actually crawling
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    tracing::info!("Loading configuration from: {}", cli.config.display());
    let (config, hash) = load_config_with_hash(&cli.config)
        .with_context(|| format!("Failed to load configuration {}", cli.config.display()))?;
    tracing::info!("Configuration loaded successfully (hash: {})", hash);

    let config = apply_overrides(config, &cli)?;

    if cli.dry_run {
        handle_dry_run(&config, cli.mode);
        return Ok(());
    }

    handle_crawl(config, cli.mode).await
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sitescribe=info,warn"),
            1 => EnvFilter::new("sitescribe=debug,info"),
            2 => EnvFilter::new("sitescribe=trace,debug"),
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

/// Applies command-line overrides and derives the include list
///
/// Without an include list, the crawl stays under the start URL's own path.
fn apply_overrides(mut config: CrawlConfig, cli: &Cli) -> anyhow::Result<CrawlConfig> {
    if let Some(url) = &cli.url {
        config.start_url = url.clone();
    }
    if let Some(exclude) = &cli.exclude {
        config.exclude_paths = parse_path_list(exclude);
    }
    config.enable_ocr |= cli.ocr;
    config.enable_pdf |= cli.pdf;

    if config.include_only_prefixes.is_empty() {
        config.include_only_prefixes = default_include_prefixes(&config.start_url)?;
    }

    validate(&config).context("Invalid configuration after applying overrides")?;
    Ok(config)
}

/// Handles the --dry-run mode: shows the effective configuration
fn handle_dry_run(config: &CrawlConfig, mode: Mode) {
    println!("=== SiteScribe Dry Run ===\n");

    println!("Start URL: {}", config.start_url);
    println!("Mode: {:?}", mode);

    println!("\nScope:");
    println!("  Exclude prefixes ({}):", config.exclude_paths.len());
    for prefix in &config.exclude_paths {
        println!("    - {}", prefix);
    }
    println!(
        "  Include-only prefixes ({}):",
        config.include_only_prefixes.len()
    );
    for prefix in &config.include_only_prefixes {
        println!("    - {}", prefix);
    }

    println!("\nExtraction:");
    println!("  Image text recognition: {}", config.enable_ocr);
    println!("  PDF text: {}", config.enable_pdf);

    println!("\nFetching:");
    println!("  Timeout: {}s", config.fetch.timeout_secs);
    println!("  Connect timeout: {}s", config.fetch.connect_timeout_secs);
    println!("  User agent: {}", config.fetch.user_agent);
    println!("  Page delay: {}ms", config.crawler.page_delay_ms);
    println!("  Listing page delay: {}ms", config.crawler.listing_page_delay_ms);

    println!("\nOutput directory: {}", config.output.directory.display());
    println!("\n✓ Configuration is valid");
}

/// Handles the main crawl operation
async fn handle_crawl(config: CrawlConfig, mode: Mode) -> anyhow::Result<()> {
    let (prefix, extension) = match mode {
        Mode::Document => (DOCUMENT_PREFIX, "docx"),
        Mode::Listing => (INVENTORY_PREFIX, "csv"),
    };
    let path = artifact_path(&config.output.directory, prefix, extension, Local::now());

    let mut crawler = Crawler::new(config)?;

    // Ctrl-C stops the run before the next page
    let token = crawler.cancellation_token();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, stopping after the current page");
            token.cancel();
        }
    });

    let progress = |p: ProgressState| {
        tracing::info!("Progress: {}/{}", p.done, p.total);
    };

    let result = match mode {
        Mode::Document => crawler.run_document(&path, &progress).await,
        Mode::Listing => crawler.run_listing(&path, &progress).await,
    };

    match result {
        Ok(path) => {
            println!("✓ Wrote {}", path.display());
            Ok(())
        }
        Err(ScribeError::Cancelled { pages }) => {
            println!("Cancelled after {} pages; nothing written", pages);
            Ok(())
        }
        Err(e) => Err(e).context("Crawl failed"),
    }
}
