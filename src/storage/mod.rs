//! Persistence for harvested quotes
//!
//! Two destinations: a SQLite table with a uniqueness constraint on the
//! quote text, and an append-only CSV mirror. Connections and file handles
//! are opened and closed per call; nothing is held across sources, so
//! concurrent workers rely on SQLite's own locking and the OS's append
//! semantics.

mod csv_file;
mod sqlite;

pub use csv_file::append_quotes_csv;
pub use sqlite::{
    all_quote_ids, count_quotes, ensure_schema, quotes_by_ids, save_quotes,
};

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// A stored quote, as read back from the database
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRecord {
    pub id: i64,
    pub quote: String,
    pub source: String,
}

/// Returns the union of distinct source URLs already present in the CSV
/// mirror and the database. Either file being absent or unreadable
/// contributes nothing; this is a skip-filter, not an integrity check.
pub fn scraped_sources(csv_path: &Path, db_path: &Path) -> HashSet<String> {
    let mut scraped = csv_file::csv_sources(csv_path);
    scraped.extend(sqlite::db_sources(db_path));
    scraped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::Quote;
    use tempfile::TempDir;

    #[test]
    fn test_scraped_sources_unions_both_destinations() {
        let dir = TempDir::new().unwrap();
        let db_path = dir.path().join("quotes.db");
        let csv_path = dir.path().join("quotes.csv");

        ensure_schema(&db_path).unwrap();
        save_quotes(
            &[Quote::new("Quote in the database.", "https://db.example.com")],
            &db_path,
        )
        .unwrap();
        append_quotes_csv(
            &[Quote::new("Quote in the mirror.", "https://csv.example.com")],
            &csv_path,
        )
        .unwrap();

        let scraped = scraped_sources(&csv_path, &db_path);
        assert!(scraped.contains("https://db.example.com"));
        assert!(scraped.contains("https://csv.example.com"));
        assert_eq!(scraped.len(), 2);
    }

    #[test]
    fn test_scraped_sources_tolerates_missing_files() {
        let dir = TempDir::new().unwrap();
        let scraped = scraped_sources(
            &dir.path().join("missing.csv"),
            &dir.path().join("missing.db"),
        );
        assert!(scraped.is_empty());
    }
}
