//! Source-list handling
//!
//! The source list is a UTF-8 text file with one URL per line. Lines starting
//! with `#` are disabled. A source that permanently fails is never deleted,
//! only commented out in place with the failure reason, so future runs skip
//! it without a network round trip.

use std::path::Path;
use url::Url;

/// Loads active source URLs from the source list.
///
/// Empty lines and `#`-prefixed lines are skipped. A missing file logs a
/// warning and yields an empty list.
pub fn load_sources(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_string)
            .collect(),
        Err(_) => {
            tracing::warn!(
                "Sources file {} not found, using empty list",
                path.display()
            );
            Vec::new()
        }
    }
}

/// Comments out a source URL in the source list, recording the reason.
///
/// The matching line is rewritten in place as `# [<reason>] <url>`. Matching
/// is on the trimmed line content; other lines are preserved byte for byte.
/// Failures are logged, never propagated - a broken source list must not
/// abort a scrape in progress.
pub fn comment_out_source(path: &Path, url: &str, reason: &str) {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to comment out source {}: {}", url, e);
            return;
        }
    };

    let mut rewritten = String::with_capacity(content.len() + reason.len() + 4);
    for line in content.lines() {
        if line.trim() == url {
            rewritten.push_str(&format!("# [{}] {}\n", reason, url));
        } else {
            rewritten.push_str(line);
            rewritten.push('\n');
        }
    }

    if let Err(e) = std::fs::write(path, rewritten) {
        tracing::error!("Failed to comment out source {}: {}", url, e);
    }
}

/// Validates and filters source URLs.
///
/// A source is kept when it parses as an absolute URL with both a scheme and
/// a host. Rejected entries are logged and dropped.
pub fn validate_sources(sources: Vec<String>) -> Vec<String> {
    sources
        .into_iter()
        .filter(|source| {
            if is_valid_source(source) {
                true
            } else {
                tracing::warn!("Invalid URL: {}", source);
                false
            }
        })
        .collect()
}

fn is_valid_source(source: &str) -> bool {
    match Url::parse(source) {
        Ok(url) => url.host_str().is_some(),
        Err(_) => false,
    }
}
