//! Output rendering for sampled quotes
//!
//! Three formats: plain text (one quote per line), pretty-printed JSON, and
//! CSV with an `id,quote,source` header. Output goes to a file when a path
//! is given, stdout otherwise. An empty batch is a logged no-op: no bytes
//! are written and no file is created.

use crate::storage::QuoteRecord;
use crate::Result;
use clap::ValueEnum;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Json,
    Csv,
}

/// Writes quotes in the given format to `output` (or stdout when `None`).
pub fn export_quotes(
    quotes: &[QuoteRecord],
    format: ExportFormat,
    output: Option<&Path>,
) -> Result<()> {
    if quotes.is_empty() {
        tracing::warn!("No quotes to export");
        return Ok(());
    }

    match output {
        Some(path) => {
            let file = File::create(path)?;
            write_quotes(quotes, format, file)?;
            tracing::info!("Wrote {} quotes to {}", quotes.len(), path.display());
        }
        None => {
            let stdout = std::io::stdout();
            write_quotes(quotes, format, stdout.lock())?;
        }
    }

    Ok(())
}

fn write_quotes<W: Write>(quotes: &[QuoteRecord], format: ExportFormat, writer: W) -> Result<()> {
    match format {
        ExportFormat::Text => write_text(quotes, writer),
        ExportFormat::Json => write_json(quotes, writer),
        ExportFormat::Csv => write_csv(quotes, writer),
    }
}

fn write_text<W: Write>(quotes: &[QuoteRecord], mut writer: W) -> Result<()> {
    for quote in quotes {
        writeln!(writer, "{}", quote.quote)?;
    }
    Ok(())
}

fn write_json<W: Write>(quotes: &[QuoteRecord], mut writer: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, quotes)?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(quotes: &[QuoteRecord], writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(["id", "quote", "source"])?;
    for quote in quotes {
        csv_writer.write_record([&quote.id.to_string(), &quote.quote, &quote.source])?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn records() -> Vec<QuoteRecord> {
        vec![
            QuoteRecord {
                id: 1,
                quote: "Chuck Norris counted to infinity. Twice.".to_string(),
                source: "https://a.example.com".to_string(),
            },
            QuoteRecord {
                id: 2,
                quote: "Chuck Norris can divide by zero.".to_string(),
                source: "https://b.example.com".to_string(),
            },
        ]
    }

    #[test]
    fn test_text_one_quote_per_line() {
        let mut buf = Vec::new();
        write_quotes(&records(), ExportFormat::Text, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Chuck Norris counted to infinity. Twice.");
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_json_round_trips() {
        let mut buf = Vec::new();
        write_quotes(&records(), ExportFormat::Json, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.ends_with('\n'));

        let parsed: Vec<QuoteRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 2);
        assert_eq!(parsed[1].id, 2);
        assert_eq!(parsed[1].quote, "Chuck Norris can divide by zero.");
    }

    #[test]
    fn test_csv_has_header_and_rows() {
        let mut buf = Vec::new();
        write_quotes(&records(), ExportFormat::Csv, &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "id,quote,source");
        assert_eq!(lines.len(), 3);
        assert!(lines[1].starts_with("1,"));
    }

    #[test]
    fn test_export_to_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        export_quotes(&records(), ExportFormat::Text, Some(&path)).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_empty_export_creates_no_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out.txt");
        export_quotes(&[], ExportFormat::Json, Some(&path)).unwrap();
        assert!(!path.exists());
    }
}
