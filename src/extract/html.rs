//! HTML extraction profiles
//!
//! Each known source gets a fixed heuristic: a selector priority list plus
//! text filters specialized for that site's markup. Routing is an ordered
//! dispatch table matched by substring on the source URL, with a guaranteed
//! generic fallback, so the table itself is testable data rather than a
//! chain of conditionals.

use crate::extract::Quote;
use regex::Regex;
use scraper::{Html, Selector};
use std::collections::HashSet;
use std::sync::OnceLock;

/// Case-insensitive phrase a kept quote must contain
const MARKER_PHRASE: &str = "chuck norris";

/// Minimum quote length for site profiles, in characters
const MIN_LEN: usize = 20;

/// Maximum quote length for site profiles, in characters
const MAX_LEN: usize = 500;

/// One entry in the HTML dispatch table
pub struct ExtractionProfile {
    /// Substring of the source URL this profile applies to
    pub host_fragment: &'static str,
    /// The extraction strategy for that site
    pub extract: fn(&str, &str) -> Vec<Quote>,
}

/// Site-specific profiles, evaluated in order. Unmatched sources fall back
/// to the generic profile.
pub const HTML_PROFILES: &[ExtractionProfile] = &[
    ExtractionProfile {
        host_fragment: "parade.com",
        extract: extract_parade,
    },
    ExtractionProfile {
        host_fragment: "thefactsite.com",
        extract: extract_thefactsite,
    },
    ExtractionProfile {
        host_fragment: "chucknorrisfacts.fr",
        extract: extract_chucknorrisfacts_fr,
    },
    ExtractionProfile {
        host_fragment: "factinate.com",
        extract: extract_factinate,
    },
];

/// Extracts quotes from HTML content, routed by source URL.
pub fn extract_quotes_from_html(content: &str, source: &str) -> Vec<Quote> {
    for profile in HTML_PROFILES {
        if source.contains(profile.host_fragment) {
            return (profile.extract)(content, source);
        }
    }
    extract_generic(content, source)
}

/// Generic fallback profile for unknown sites.
///
/// Tries `<blockquote>` tags, then elements whose class contains "quote",
/// and only if neither matched, `<p>` tags filtered by the marker phrase.
/// Matches are deduplicated by exact text, first occurrence kept.
fn extract_generic(content: &str, source: &str) -> Vec<Quote> {
    let document = Html::parse_document(content);
    let mut quotes = Vec::new();

    for text in select_texts(&document, "blockquote") {
        if !text.is_empty() {
            quotes.push(Quote::new(text, source));
        }
    }

    for text in select_texts(&document, r#"[class*="quote"]"#) {
        // Short snippets are navigation chrome, not quotes
        if text.chars().count() > 10 {
            quotes.push(Quote::new(text, source));
        }
    }

    if quotes.is_empty() {
        for text in select_texts(&document, "p") {
            if text.chars().count() > 20 && text.to_lowercase().contains(MARKER_PHRASE) {
                quotes.push(Quote::new(text, source));
            }
        }
    }

    let quotes = dedup_quotes(quotes);
    tracing::debug!("Extracted {} quotes from HTML", quotes.len());
    quotes
}

/// Parade.com joke roundups: article paragraphs and list items, with
/// duplicates across selectors collapsed.
fn extract_parade(content: &str, source: &str) -> Vec<Quote> {
    let selectors = [
        "div.article-body p",
        "p",
        "li",
        r#"[class*="joke"]"#,
        r#"[class*="fact"]"#,
    ];
    let quotes = collect_by_selectors(content, source, &selectors, strip_numbering);
    let quotes = dedup_quotes(quotes);
    tracing::debug!("Extracted {} quotes from Parade.com", quotes.len());
    quotes
}

/// Thefactsite.com top-100 list: regex-driven over `<li>` elements rather
/// than a DOM walk, since the page nests markup inside each item.
fn extract_thefactsite(content: &str, source: &str) -> Vec<Quote> {
    let mut quotes = Vec::new();

    for cap in li_regex().captures_iter(content) {
        let inner = cap.get(1).map(|m| m.as_str()).unwrap_or_default();
        let text = tag_regex().replace_all(inner, "");
        let text = strip_numbering(text.trim());
        if is_keeper(&text) {
            quotes.push(Quote::new(text, source));
        }
    }

    tracing::debug!("Extracted {} quotes from Thefactsite.com", quotes.len());
    quotes
}

/// Chucknorrisfacts.fr: fact containers and plain paragraphs. This site
/// numbers its facts without punctuation, so a bare leading number is
/// stripped here - the only profile where that is safe.
fn extract_chucknorrisfacts_fr(content: &str, source: &str) -> Vec<Quote> {
    let selectors = ["div.fact", "p", "li", r#"[class*="fact"]"#];
    let quotes = collect_by_selectors(content, source, &selectors, strip_leading_number);
    tracing::debug!("Extracted {} quotes from Chucknorrisfacts.fr", quotes.len());
    quotes
}

/// Factinate.com: blockquotes and quote/joke containers.
fn extract_factinate(content: &str, source: &str) -> Vec<Quote> {
    let selectors = [
        "blockquote",
        "div.quote",
        "p",
        r#"[class*="quote"]"#,
        r#"[class*="joke"]"#,
    ];
    let quotes = collect_by_selectors(content, source, &selectors, strip_numbering);
    tracing::debug!("Extracted {} quotes from Factinate.com", quotes.len());
    quotes
}

/// Runs a selector priority list over the document, applying the profile's
/// numbering strip and the shared length/marker filter to every match.
fn collect_by_selectors(
    content: &str,
    source: &str,
    selectors: &[&str],
    strip: fn(&str) -> String,
) -> Vec<Quote> {
    let document = Html::parse_document(content);
    let mut quotes = Vec::new();

    for selector in selectors {
        for text in select_texts(&document, selector) {
            let text = strip(&text);
            if is_keeper(&text) {
                quotes.push(Quote::new(text, source));
            }
        }
    }

    quotes
}

/// Selects elements and returns their trimmed text content.
fn select_texts(document: &Html, selector: &str) -> Vec<String> {
    match Selector::parse(selector) {
        Ok(sel) => document
            .select(&sel)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .collect(),
        Err(_) => {
            tracing::error!("Invalid selector: {}", selector);
            Vec::new()
        }
    }
}

/// Strips a leading list-numbering prefix such as `1. ` or `2) `. The
/// punctuation is required so a fact that genuinely opens with a number
/// ("24 hours a day...") keeps it.
fn strip_numbering(text: &str) -> String {
    numbering_regex().replace(text, "").to_string()
}

/// Strips a leading number even without punctuation, for sites that number
/// their facts bare.
fn strip_leading_number(text: &str) -> String {
    loose_numbering_regex().replace(text, "").to_string()
}

fn is_keeper(text: &str) -> bool {
    let len = text.chars().count();
    len > MIN_LEN && len < MAX_LEN && text.to_lowercase().contains(MARKER_PHRASE)
}

/// Deduplicates by exact quote text, keeping first occurrence order.
fn dedup_quotes(quotes: Vec<Quote>) -> Vec<Quote> {
    let mut seen = HashSet::new();
    quotes
        .into_iter()
        .filter(|q| seen.insert(q.quote.clone()))
        .collect()
}

fn numbering_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\s*[.)]\s*").expect("hard-coded regex"))
}

fn loose_numbering_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\d+\.?\s*").expect("hard-coded regex"))
}

fn li_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?is)<li[^>]*>(.*?)</li>").expect("hard-coded regex"))
}

fn tag_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<[^>]+>").expect("hard-coded regex"))
}
