//! Quote-Harvest: a Chuck Norris fact harvester
//!
//! This crate collects Chuck Norris quotes from a fixed set of web sources,
//! extracts the quote text with per-source heuristics, and stores the results
//! in SQLite with an append-only CSV mirror. A separate generator samples the
//! stored quotes with reproducible randomness and exports them as text, JSON,
//! or CSV.

pub mod config;
pub mod export;
pub mod extract;
pub mod sample;
pub mod scrape;
pub mod sources;
pub mod storage;

use thiserror::Error;

/// Main error type for harvest operations
#[derive(Debug, Error)]
pub enum HarvestError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Result type alias for harvest operations
pub type Result<T> = std::result::Result<T, HarvestError>;

// Re-export commonly used types
pub use config::HarvestConfig;
pub use extract::Quote;
pub use storage::QuoteRecord;
