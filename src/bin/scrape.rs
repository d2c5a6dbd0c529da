//! Scraper entry point
//!
//! Collects Chuck Norris quotes from the configured web sources and stores
//! them in SQLite and/or a CSV mirror.

use clap::{Parser, ValueEnum};
use quote_harvest::config::load_config;
use quote_harvest::scrape::scrape_all_sources;
use quote_harvest::sources::{load_sources, validate_sources};
use quote_harvest::storage::{ensure_schema, scraped_sources};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Sqlite,
    Csv,
    Both,
}

/// Scrape Chuck Norris quotes from configured web sources
#[derive(Parser, Debug)]
#[command(name = "scrape")]
#[command(version = "1.0.0")]
#[command(about = "Scrape Chuck Norris quotes from the web", long_about = None)]
struct Cli {
    /// Scrape only these URLs instead of the configured source list
    #[arg(short, long, value_name = "URL")]
    sources: Vec<String>,

    /// Output file path (overrides the configured path for single-format runs)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Storage destination
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Both)]
    format: OutputFormat,

    /// Number of parallel workers
    #[arg(short, long, value_name = "N")]
    threads: Option<usize>,

    /// Re-scrape sources that already have stored quotes
    #[arg(short, long)]
    refresh: bool,

    /// List the sources that would be scraped, then exit
    #[arg(short, long)]
    dry_run: bool,

    /// Path to TOML configuration file
    #[arg(long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    process::exit(run().await);
}

async fn run() -> i32 {
    let cli = Cli::parse();

    let mut config = match load_config(cli.config.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return 1;
        }
    };
    if cli.verbose {
        config.verbose = true;
    }
    if let Some(threads) = cli.threads {
        config.max_workers = threads.max(1);
    }

    setup_logging(config.verbose);

    // URLs given on the command line bypass the source list and its
    // already-scraped filter.
    let from_file = cli.sources.is_empty();
    let mut sources = if from_file {
        load_sources(Path::new(&config.sources_file))
    } else {
        cli.sources.clone()
    };

    if from_file && !cli.refresh {
        let scraped = scraped_sources(
            Path::new(&config.output_csv),
            Path::new(&config.output_db),
        );
        sources = filter_unscraped(sources, &scraped);
    }

    let sources = validate_sources(sources);
    if sources.is_empty() {
        tracing::error!("No valid sources to scrape");
        return 1;
    }

    if cli.dry_run {
        println!("Would scrape {} sources:", sources.len());
        for (i, source) in sources.iter().enumerate() {
            println!("  {}. {}", i + 1, source);
        }
        return 0;
    }

    let (db_path, csv_path) = resolve_outputs(cli.format, cli.output.as_deref(), &config);

    if let Some(db) = db_path.as_deref() {
        if let Err(e) = ensure_schema(db) {
            tracing::error!("Failed to initialize database: {}", e);
            return 1;
        }
    }

    tracing::info!("Scraping {} sources", sources.len());
    let total = scrape_all_sources(sources, db_path, csv_path, &config).await;

    if total > 0 {
        tracing::info!("Scraping complete: {} quotes saved", total);
        0
    } else {
        tracing::error!("Scraping finished with no quotes saved");
        1
    }
}

/// Drops sources that already have stored quotes, keeping order.
fn filter_unscraped(
    sources: Vec<String>,
    scraped: &std::collections::HashSet<String>,
) -> Vec<String> {
    let before = sources.len();
    let kept: Vec<String> = sources
        .into_iter()
        .filter(|s| !scraped.contains(s))
        .collect();
    let skipped = before - kept.len();
    if skipped > 0 {
        tracing::info!(
            "Skipping {} already-scraped sources (use --refresh to re-scrape)",
            skipped
        );
    }
    kept
}

/// Maps the format flag to concrete destination paths. `--output` replaces
/// the configured path when a single destination is selected; with `both`
/// the configured paths are used as-is.
fn resolve_outputs(
    format: OutputFormat,
    output: Option<&Path>,
    config: &quote_harvest::HarvestConfig,
) -> (Option<PathBuf>, Option<PathBuf>) {
    match format {
        OutputFormat::Sqlite => {
            let db = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(&config.output_db));
            (Some(db), None)
        }
        OutputFormat::Csv => {
            let csv = output
                .map(Path::to_path_buf)
                .unwrap_or_else(|| PathBuf::from(&config.output_csv));
            (None, Some(csv))
        }
        OutputFormat::Both => (
            Some(PathBuf::from(&config.output_db)),
            Some(PathBuf::from(&config.output_csv)),
        ),
    }
}

fn setup_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("quote_harvest=debug,info")
    } else {
        EnvFilter::new("quote_harvest=info,warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}
