//! CSV mirror of the quote store
//!
//! The mirror is append-only: the header row `source,quote` is written only
//! when the file does not yet exist, and rows are never rewritten. Unlike
//! the database there is no uniqueness constraint here.

use crate::extract::Quote;
use crate::Result;
use std::collections::HashSet;
use std::fs::OpenOptions;
use std::path::Path;

/// Appends quotes to the CSV mirror, creating it (with a header) on first
/// use. Returns the number of rows written.
pub fn append_quotes_csv(quotes: &[Quote], csv_path: &Path) -> Result<usize> {
    if quotes.is_empty() {
        tracing::warn!("No quotes to save");
        return Ok(0);
    }

    let file_exists = csv_path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);

    if !file_exists {
        writer.write_record(["source", "quote"])?;
    }

    for quote in quotes {
        writer.write_record([&quote.source, &quote.quote])?;
    }
    writer.flush()?;

    tracing::info!(
        "Saved {} quotes to CSV file: {}",
        quotes.len(),
        csv_path.display()
    );
    Ok(quotes.len())
}

/// Distinct sources recorded in the CSV mirror; absent or unreadable file
/// contributes nothing.
pub(crate) fn csv_sources(csv_path: &Path) -> HashSet<String> {
    if !csv_path.exists() {
        return HashSet::new();
    }
    match read_csv_sources(csv_path) {
        Ok(sources) => sources,
        Err(_) => {
            tracing::debug!("Failed to read CSV for scraped sources; continuing");
            HashSet::new()
        }
    }
}

fn read_csv_sources(csv_path: &Path) -> Result<HashSet<String>> {
    let mut reader = csv::Reader::from_path(csv_path)?;
    let source_index = reader
        .headers()?
        .iter()
        .position(|h| h == "source");

    let mut sources = HashSet::new();
    if let Some(index) = source_index {
        for record in reader.records() {
            let record = record?;
            if let Some(source) = record.get(index) {
                if !source.is_empty() {
                    sources.insert(source.to_string());
                }
            }
        }
    }
    Ok(sources)
}
