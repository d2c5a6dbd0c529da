//! Scrape coordination
//!
//! One fetch-extract-save unit of work per source. With a single worker the
//! sources run strictly sequentially; otherwise tasks are spawned behind a
//! semaphore sized by the worker count and results are collected as tasks
//! complete. The total is a plain sum, so completion order does not affect
//! the final count.

use crate::config::HarvestConfig;
use crate::extract::{extract_quotes, ContentKind};
use crate::scrape::fetcher::{build_http_client, fetch_url};
use crate::storage::{append_quotes_csv, save_quotes};
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// Scrapes a single source: fetch, extract, save to each selected
/// destination. Any failure along the way is logged and contributes zero;
/// nothing propagates to the caller.
pub async fn scrape_source(
    client: &Client,
    source_url: &str,
    db_path: Option<&Path>,
    csv_path: Option<&Path>,
    config: &HarvestConfig,
) -> usize {
    tracing::info!("Scraping source: {}", source_url);

    let Some(content) = fetch_url(client, source_url, config).await else {
        tracing::error!("Failed to fetch content from {}", source_url);
        return 0;
    };

    let quotes = extract_quotes(&content, source_url, ContentKind::Auto);
    if quotes.is_empty() {
        tracing::warn!("No quotes found at {}", source_url);
        return 0;
    }

    let mut total_saved = 0;

    if let Some(db) = db_path {
        match save_quotes(&quotes, db) {
            Ok(saved) => total_saved += saved,
            Err(e) => tracing::error!("Error saving quotes from {}: {}", source_url, e),
        }
    }

    if let Some(csv) = csv_path {
        match append_quotes_csv(&quotes, csv) {
            Ok(saved) => total_saved += saved,
            Err(e) => tracing::error!("Error mirroring quotes from {}: {}", source_url, e),
        }
    }

    total_saved
}

/// Scrapes all sources, returning the total number of quotes saved.
///
/// `config.max_workers == 1` processes sources one at a time, which keeps
/// log output deterministic for debugging. Larger worker counts fan out
/// over spawned tasks bounded by a semaphore; a panicking task is logged
/// and counted as zero rather than aborting the remaining sources.
pub async fn scrape_all_sources(
    sources: Vec<String>,
    db_path: Option<PathBuf>,
    csv_path: Option<PathBuf>,
    config: &HarvestConfig,
) -> usize {
    let client = match build_http_client(config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {}", e);
            return 0;
        }
    };

    let mut total_saved = 0;

    if config.max_workers <= 1 {
        for source in sources {
            total_saved +=
                scrape_source(&client, &source, db_path.as_deref(), csv_path.as_deref(), config)
                    .await;
        }
        return total_saved;
    }

    tracing::info!("Using {} workers for parallel processing", config.max_workers);

    let semaphore = Arc::new(Semaphore::new(config.max_workers));
    let config = Arc::new(config.clone());
    let mut tasks = JoinSet::new();

    for source in sources {
        let client = client.clone();
        let semaphore = semaphore.clone();
        let config = config.clone();
        let db_path = db_path.clone();
        let csv_path = csv_path.clone();

        tasks.spawn(async move {
            let _permit = semaphore.acquire().await.expect("Semaphore closed");
            scrape_source(
                &client,
                &source,
                db_path.as_deref(),
                csv_path.as_deref(),
                &config,
            )
            .await
        });
    }

    while let Some(result) = tasks.join_next().await {
        match result {
            Ok(saved) => total_saved += saved,
            Err(e) => tracing::error!("Scrape task failed: {}", e),
        }
    }

    total_saved
}
