//! SQLite storage for quotes
//!
//! The schema is a single `quotes` table with a UNIQUE constraint on the
//! quote text; duplicate inserts are counted, not errors. An earlier layout
//! carried a `created_at` timestamp column and is migrated away on first
//! contact with the current code.

use crate::extract::Quote;
use crate::storage::QuoteRecord;
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};
use std::collections::HashSet;
use std::path::Path;

/// Creates the quotes table and index if needed. Idempotent - safe to call
/// on every run. Detects the legacy schema (extra `created_at` column) and
/// migrates it once: new-shape table, copy rows, drop, rename.
pub fn ensure_schema(db_path: &Path) -> Result<(), rusqlite::Error> {
    let conn = Connection::open(db_path)?;

    let table_exists = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name='quotes'",
            [],
            |row| row.get::<_, String>(0),
        )
        .optional()?
        .is_some();

    if !table_exists {
        conn.execute_batch(
            "CREATE TABLE quotes (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 quote TEXT NOT NULL UNIQUE,
                 source TEXT
             );
             CREATE INDEX IF NOT EXISTS idx_quote ON quotes(quote);",
        )?;
    } else if has_legacy_timestamp_column(&conn)? {
        tracing::info!("Migrating quotes table from legacy schema");
        conn.execute_batch(
            "BEGIN;
             CREATE TABLE quotes_new (
                 id INTEGER PRIMARY KEY AUTOINCREMENT,
                 quote TEXT NOT NULL UNIQUE,
                 source TEXT
             );
             INSERT INTO quotes_new (quote, source) SELECT quote, source FROM quotes;
             DROP TABLE quotes;
             ALTER TABLE quotes_new RENAME TO quotes;
             CREATE INDEX IF NOT EXISTS idx_quote ON quotes(quote);
             COMMIT;",
        )?;
    }

    tracing::info!("Database created/verified at {}", db_path.display());
    Ok(())
}

fn has_legacy_timestamp_column(conn: &Connection) -> Result<bool, rusqlite::Error> {
    let mut stmt = conn.prepare("PRAGMA table_info(quotes)")?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let name: String = row.get(1)?;
        if name == "created_at" {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Saves quotes to the database, one insert per record.
///
/// Uniqueness violations are counted as duplicates and skipped; other
/// database errors abort this batch (the orchestrator treats that as zero
/// quotes from the source, not a fatal failure).
///
/// Returns the number of newly inserted rows.
pub fn save_quotes(quotes: &[Quote], db_path: &Path) -> Result<usize, rusqlite::Error> {
    if quotes.is_empty() {
        tracing::warn!("No quotes to save");
        return Ok(0);
    }

    let conn = Connection::open(db_path)?;
    let mut saved = 0;
    let mut duplicates = 0;

    for quote in quotes {
        let result = conn.execute(
            "INSERT INTO quotes (quote, source) VALUES (?1, ?2)",
            params![quote.quote, quote.source],
        );
        match result {
            Ok(_) => saved += 1,
            Err(e) if is_unique_violation(&e) => {
                duplicates += 1;
                tracing::debug!(
                    "Skipping duplicate quote: {:.50}...",
                    quote.quote
                );
            }
            Err(e) => return Err(e),
        }
    }

    tracing::info!("Saved {} new quotes, skipped {} duplicates", saved, duplicates);
    Ok(saved)
}

fn is_unique_violation(error: &rusqlite::Error) -> bool {
    matches!(
        error,
        rusqlite::Error::SqliteFailure(e, _) if e.code == ErrorCode::ConstraintViolation
    )
}

/// Returns the total number of stored quotes.
pub fn count_quotes(db_path: &Path) -> Result<i64, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    conn.query_row("SELECT COUNT(*) FROM quotes", [], |row| row.get(0))
}

/// Returns every quote id, in table order.
pub fn all_quote_ids(db_path: &Path) -> Result<Vec<i64>, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare("SELECT id FROM quotes")?;
    let ids = stmt
        .query_map([], |row| row.get(0))?
        .collect::<Result<Vec<i64>, _>>()?;
    tracing::debug!("Retrieved {} quote IDs", ids.len());
    Ok(ids)
}

/// Resolves ids to full records, in the order given. Ids that no longer
/// resolve are silently skipped, so the result may be shorter than the
/// input.
pub fn quotes_by_ids(db_path: &Path, ids: &[i64]) -> Result<Vec<QuoteRecord>, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare("SELECT id, quote, source FROM quotes WHERE id = ?1")?;

    let mut records = Vec::with_capacity(ids.len());
    for id in ids {
        let record = stmt
            .query_row(params![id], |row| {
                Ok(QuoteRecord {
                    id: row.get(0)?,
                    quote: row.get(1)?,
                    source: row.get(2)?,
                })
            })
            .optional()?;
        if let Some(record) = record {
            records.push(record);
        }
    }

    Ok(records)
}

/// Distinct sources recorded in the database; absent or unreadable database
/// contributes nothing.
pub(crate) fn db_sources(db_path: &Path) -> HashSet<String> {
    if !db_path.exists() {
        return HashSet::new();
    }
    match read_db_sources(db_path) {
        Ok(sources) => sources,
        Err(_) => {
            tracing::debug!("Failed to read DB for scraped sources; continuing");
            HashSet::new()
        }
    }
}

fn read_db_sources(db_path: &Path) -> Result<HashSet<String>, rusqlite::Error> {
    let conn = Connection::open(db_path)?;
    let mut stmt = conn.prepare("SELECT DISTINCT source FROM quotes")?;
    let mut sources = HashSet::new();
    let rows = stmt.query_map([], |row| row.get::<_, Option<String>>(0))?;
    for row in rows {
        if let Some(source) = row? {
            if !source.is_empty() {
                sources.insert(source);
            }
        }
    }
    Ok(sources)
}
