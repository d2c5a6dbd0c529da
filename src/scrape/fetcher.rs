//! HTTP fetcher with bounded retry
//!
//! Every attempt carries the configured timeouts and user agent. A 404
//! additionally marks the source dead in the source list; all other HTTP
//! and network failures just burn a retry. Exhausted retries degrade to
//! "no content" - the caller never sees an error from here.

use crate::config::HarvestConfig;
use crate::sources::comment_out_source;
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::time::Duration;

/// Builds the HTTP client used for all fetches.
pub fn build_http_client(config: &HarvestConfig) -> Result<Client, reqwest::Error> {
    Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(Duration::from_secs(config.request_timeout_secs))
        .connect_timeout(Duration::from_secs(config.request_timeout_secs))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a URL, retrying up to `config.max_retries` times with a fixed
/// delay between attempts.
///
/// Returns the body text on the first successful response, or `None` after
/// the retry budget is spent. A 404 comments the source out of the source
/// list so later runs skip it without a network call.
pub async fn fetch_url(client: &Client, url: &str, config: &HarvestConfig) -> Option<String> {
    let retries = config.max_retries.max(1);

    for attempt in 1..=retries {
        tracing::debug!("Fetching {} (attempt {}/{})", url, attempt, retries);

        match client.get(url).send().await {
            Ok(response) => {
                let status = response.status();
                if status.is_success() {
                    match response.text().await {
                        Ok(body) => return Some(body),
                        Err(e) => tracing::warn!("Error reading body from {}: {}", url, e),
                    }
                } else {
                    if status == StatusCode::NOT_FOUND {
                        comment_out_source(Path::new(&config.sources_file), url, "HTTP 404");
                    }
                    tracing::warn!("Error fetching {}: HTTP {}", url, status);
                }
            }
            Err(e) => tracing::warn!("Error fetching {}: {}", url, e),
        }

        if attempt < retries {
            tokio::time::sleep(Duration::from_secs(config.retry_delay_secs)).await;
        }
    }

    tracing::error!("Failed to fetch {} after {} attempts", url, retries);
    None
}
