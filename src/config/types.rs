use serde::Deserialize;

/// Runtime configuration for both the scraper and the generator
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HarvestConfig {
    /// Path to the line-oriented source list
    pub sources_file: String,

    /// Path to the SQLite quote database
    pub output_db: String,

    /// Path to the append-only CSV mirror
    pub output_csv: String,

    /// Number of fetch attempts per source
    pub max_retries: u32,

    /// Fixed delay between fetch attempts, in seconds
    pub retry_delay_secs: u64,

    /// Per-request timeout, in seconds
    pub request_timeout_secs: u64,

    /// Worker pool size for parallel scraping
    pub max_workers: usize,

    /// User-Agent header sent with every request
    pub user_agent: String,

    /// Enable debug-level logging
    pub verbose: bool,
}

impl Default for HarvestConfig {
    fn default() -> Self {
        Self {
            sources_file: "sources.txt".to_string(),
            output_db: "quotes.db".to_string(),
            output_csv: "quotes.csv".to_string(),
            max_retries: 3,
            retry_delay_secs: 3,
            request_timeout_secs: 10,
            max_workers: 4,
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            verbose: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HarvestConfig::default();
        assert_eq!(config.max_retries, 3);
        assert_eq!(config.retry_delay_secs, 3);
        assert_eq!(config.request_timeout_secs, 10);
        assert_eq!(config.max_workers, 4);
        assert!(!config.verbose);
        assert_eq!(config.sources_file, "sources.txt");
    }
}
