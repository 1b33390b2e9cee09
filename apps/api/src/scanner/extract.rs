//! Scanner-engine keyword extraction: phrase-aware, synonym-aware,
//! stop-word filtered. This is the extractor behind the JD-vs-résumé scan;
//! the résumé builder carries its own simpler one (`builder::jd_match`).

use std::collections::HashSet;

use crate::dictionary::{canonical_term, SCANNER_STOP_WORDS, TECH_PHRASES};

/// Minimum surviving token length for this extractor.
const MIN_TOKEN_LEN: usize = 2;

/// Extracts the canonical keyword set from raw text.
///
/// Two passes over the case-folded input: a substring pass for the curated
/// multi-word phrases, then a word pass that splits, edge-trims,
/// length/stop-word filters, and canonicalizes each token. The result is
/// deduplicated, in first-seen order. Empty input yields an empty set.
pub fn extract_keywords(text: &str) -> Vec<String> {
    let folded = text.to_lowercase();
    let mut seen: HashSet<String> = HashSet::new();
    let mut keywords = Vec::new();

    // Phrase pass: plain containment, verbatim phrase kept.
    for phrase in TECH_PHRASES {
        if folded.contains(phrase) && seen.insert((*phrase).to_string()) {
            keywords.push((*phrase).to_string());
        }
    }

    // Word pass.
    for raw in folded.split(is_token_separator) {
        let token = trim_token(raw);
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }
        if SCANNER_STOP_WORDS.contains(token) {
            continue;
        }
        let canonical = canonical_term(token).to_string();
        if seen.insert(canonical.clone()) {
            keywords.push(canonical);
        }
    }

    keywords
}

fn is_token_separator(c: char) -> bool {
    c.is_whitespace() || matches!(c, ',' | '(' | ')' | '[' | ']' | '"' | '\'' | '/')
}

/// Trims leading/trailing characters outside `[a-z0-9+#]`, preserving the
/// tokens whose punctuation is load-bearing: `c++`, `c#`, and `*.js`.
fn trim_token(raw: &str) -> &str {
    if raw == "c++" || raw == "c#" || raw.ends_with(".js") {
        return raw;
    }
    raw.trim_matches(|c: char| !(c.is_ascii_alphanumeric() || c == '+' || c == '#'))
}
