//! JSON extraction strategy
//!
//! Handles the shapes served by the JSON quote APIs: a single object with a
//! `value` or `joke` field (api.chucknorris.io), an object wrapping a
//! `result` array, or a top-level array of objects or plain strings.
//! Entries without a recognized field are skipped, not errors.

use crate::extract::Quote;
use serde_json::Value;

/// Extracts quotes from JSON content.
///
/// Unparseable content is logged and yields an empty list.
pub fn extract_quotes_from_json(content: &str, source: &str) -> Vec<Quote> {
    let mut quotes = Vec::new();

    let data: Value = match serde_json::from_str(content) {
        Ok(v) => v,
        Err(e) => {
            tracing::error!("Failed to parse JSON: {}", e);
            return quotes;
        }
    };

    match &data {
        Value::Object(map) => {
            if let Some(text) = text_field(map) {
                quotes.push(Quote::new(text, source));
            } else if let Some(Value::Array(items)) = map.get("result") {
                for item in items {
                    push_entry(&mut quotes, item, source);
                }
            }
        }
        Value::Array(items) => {
            for item in items {
                push_entry(&mut quotes, item, source);
            }
        }
        _ => {}
    }

    tracing::debug!("Extracted {} quotes from JSON", quotes.len());
    quotes
}

/// Looks up the quote text on an object, trying `value` then `joke`.
fn text_field(map: &serde_json::Map<String, Value>) -> Option<&str> {
    map.get("value")
        .and_then(Value::as_str)
        .or_else(|| map.get("joke").and_then(Value::as_str))
}

fn push_entry(quotes: &mut Vec<Quote>, item: &Value, source: &str) {
    match item {
        Value::Object(map) => {
            if let Some(text) = text_field(map) {
                quotes.push(Quote::new(text, source));
            }
        }
        Value::String(text) => quotes.push(Quote::new(text.as_str(), source)),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "https://api.chucknorris.io/jokes/random";

    #[test]
    fn test_single_object_value_field() {
        let quotes = extract_quotes_from_json(r#"{"value": "X"}"#, SOURCE);
        assert_eq!(quotes, vec![Quote::new("X", SOURCE)]);
    }

    #[test]
    fn test_single_object_joke_field() {
        let quotes = extract_quotes_from_json(r#"{"joke": "Y"}"#, SOURCE);
        assert_eq!(quotes, vec![Quote::new("Y", SOURCE)]);
    }

    #[test]
    fn test_value_preferred_over_joke() {
        let quotes = extract_quotes_from_json(r#"{"value": "A", "joke": "B"}"#, SOURCE);
        assert_eq!(quotes, vec![Quote::new("A", SOURCE)]);
    }

    #[test]
    fn test_result_array_of_objects() {
        let content = r#"{"total": 2, "result": [{"value": "A"}, {"joke": "B"}]}"#;
        let quotes = extract_quotes_from_json(content, SOURCE);
        assert_eq!(
            quotes,
            vec![Quote::new("A", SOURCE), Quote::new("B", SOURCE)]
        );
    }

    #[test]
    fn test_result_array_of_strings() {
        let content = r#"{"result": ["A", "B"]}"#;
        let quotes = extract_quotes_from_json(content, SOURCE);
        assert_eq!(quotes.len(), 2);
    }

    #[test]
    fn test_top_level_array_skips_unrecognized_entries() {
        let content = r#"[{"value": "A"}, {"other": "skip"}, {"value": "B"}]"#;
        let quotes = extract_quotes_from_json(content, SOURCE);
        assert_eq!(
            quotes,
            vec![Quote::new("A", SOURCE), Quote::new("B", SOURCE)]
        );
    }

    #[test]
    fn test_top_level_array_of_strings() {
        let quotes = extract_quotes_from_json(r#"["A", "B", "C"]"#, SOURCE);
        assert_eq!(quotes.len(), 3);
    }

    #[test]
    fn test_non_string_values_are_skipped() {
        let quotes = extract_quotes_from_json(r#"[{"value": 42}, 7, null]"#, SOURCE);
        assert!(quotes.is_empty());
    }

    #[test]
    fn test_invalid_json() {
        assert!(extract_quotes_from_json("{not json", SOURCE).is_empty());
    }

    #[test]
    fn test_scalar_json() {
        assert!(extract_quotes_from_json("42", SOURCE).is_empty());
    }
}
