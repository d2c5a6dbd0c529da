//! Generator entry point
//!
//! Samples stored quotes with reproducible randomness and writes them as
//! text, JSON, or CSV.

use clap::Parser;
use quote_harvest::export::{export_quotes, ExportFormat};
use quote_harvest::sample::{sample_quotes, validate_database};
use std::path::PathBuf;
use std::process;
use tracing_subscriber::EnvFilter;

/// Upper bound on the number of quotes per run; keeps a typo'd count from
/// allocating an absurd with-replacement draw.
const MAX_COUNT: usize = 10_000_000;

/// Generate random Chuck Norris quotes from the harvested database
#[derive(Parser, Debug)]
#[command(name = "generate")]
#[command(version = "1.0.0")]
#[command(about = "Generate random Chuck Norris quotes", long_about = None)]
struct Cli {
    /// Number of quotes to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Random seed for reproducible output
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output file path (stdout when omitted)
    #[arg(short, long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Text)]
    format: ExportFormat,

    /// Path to the quote database
    #[arg(short, long, default_value = "quotes.db")]
    database: PathBuf,

    /// Enable debug-level logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    process::exit(run());
}

fn run() -> i32 {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    if !validate_count(cli.count) {
        tracing::error!("Count must be between 1 and {}", MAX_COUNT);
        return 1;
    }

    if !validate_database(&cli.database) {
        return 1;
    }

    let quotes = match sample_quotes(&cli.database, cli.count, cli.seed) {
        Ok(quotes) => quotes,
        Err(e) => {
            tracing::error!("Failed to sample quotes: {}", e);
            return 1;
        }
    };

    if quotes.is_empty() {
        tracing::error!("No quotes could be generated");
        return 1;
    }

    if let Err(e) = export_quotes(&quotes, cli.format, cli.output.as_deref()) {
        tracing::error!("Failed to export quotes: {}", e);
        return 1;
    }

    0
}

/// Checks the requested quote count against the accepted range.
fn validate_count(count: usize) -> bool {
    (1..=MAX_COUNT).contains(&count)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_count_rejects_zero() {
        assert!(!validate_count(0));
    }

    #[test]
    fn test_validate_count_rejects_over_max() {
        assert!(!validate_count(MAX_COUNT + 1));
    }

    #[test]
    fn test_validate_count_accepts_bounds() {
        assert!(validate_count(1));
        assert!(validate_count(MAX_COUNT));
    }
}
