//! Scraping pipeline
//!
//! The fetcher performs bounded-retry HTTP GETs; the coordinator fans the
//! fetch-extract-save unit of work out over a bounded worker pool and
//! aggregates saved counts.

mod coordinator;
mod fetcher;

pub use coordinator::{scrape_all_sources, scrape_source};
pub use fetcher::{build_http_client, fetch_url};
