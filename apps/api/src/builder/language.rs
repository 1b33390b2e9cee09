//! Weak-language detection: scans free-text résumé fields for avoided
//! words and phrases and pairs each finding with replacement suggestions.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dictionary::{replacement_suggestions, AVOIDED_WORDS};
use crate::models::resume::Resume;

/// Context window kept on each side of a match.
const CONTEXT_CHARS: usize = 40;

/// Characters accepted as a word boundary around a single-word match.
const BOUNDARY_CHARS: &[char] = &['.', ',', '!', '?', ';', ':', '\'', '"', '(', ')', '-'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchLocation {
    Summary,
    Experience,
    Project,
}

/// One avoided-word finding. `word` is the exact dictionary entry (never
/// canonicalized); `context` is an ellipsized snippet around the first
/// occurrence in the field.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvoidedWordMatch {
    pub word: String,
    pub location: MatchLocation,
    pub context: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet_index: Option<usize>,
}

/// Scans summary, experience bullets, then project bullets, in that order.
///
/// Within a field, dictionary entries are tested in declaration order and
/// occurrences left to right, but at most one match is recorded per
/// `(word, location, section_id, bullet_index)` key; the first occurrence
/// wins. The same word in two different bullets of one experience is
/// therefore recorded twice, while a word repeated inside one bullet is
/// recorded once.
pub fn detect_avoided_words(resume: &Resume) -> Vec<AvoidedWordMatch> {
    let mut matches = Vec::new();
    let mut seen = HashSet::new();

    if !resume.summary.is_empty() {
        scan_field(
            &resume.summary,
            MatchLocation::Summary,
            None,
            None,
            &mut matches,
            &mut seen,
        );
    }
    for exp in &resume.experiences {
        for (i, bullet) in exp.bullets.iter().enumerate() {
            scan_field(
                bullet,
                MatchLocation::Experience,
                Some(&exp.id),
                Some(i),
                &mut matches,
                &mut seen,
            );
        }
    }
    for project in &resume.projects {
        for (i, bullet) in project.bullets.iter().enumerate() {
            scan_field(
                bullet,
                MatchLocation::Project,
                Some(&project.id),
                Some(i),
                &mut matches,
                &mut seen,
            );
        }
    }

    matches
}

type MatchKey = (String, MatchLocation, Option<String>, Option<usize>);

fn scan_field(
    text: &str,
    location: MatchLocation,
    section_id: Option<&str>,
    bullet_index: Option<usize>,
    matches: &mut Vec<AvoidedWordMatch>,
    seen: &mut HashSet<MatchKey>,
) {
    for word in AVOIDED_WORDS {
        let mut from = 0;
        while let Some(at) = find_ascii_ci(text, word, from) {
            let end = at + word.len();
            if word.contains(' ') || is_boundary(text, at, end) {
                let key = (
                    word.to_string(),
                    location,
                    section_id.map(|s| s.to_string()),
                    bullet_index,
                );
                if seen.insert(key) {
                    matches.push(AvoidedWordMatch {
                        word: word.to_string(),
                        location,
                        context: context_snippet(text, at, end),
                        section_id: section_id.map(|s| s.to_string()),
                        bullet_index,
                    });
                }
            }
            from = end;
        }
    }
}

/// Re-export of the dictionary's suggestion lookup, so callers only need
/// this module for the whole language check.
pub fn get_replacement_suggestions(word: &str) -> Vec<String> {
    replacement_suggestions(word)
}

/// Byte offset of the next ASCII case-insensitive occurrence of `needle`
/// in `haystack` at or after `from`. The dictionary is ASCII, so a hit
/// always lands on a char boundary.
fn find_ascii_ci(haystack: &str, needle: &str, from: usize) -> Option<usize> {
    let h = haystack.as_bytes();
    let n = needle.as_bytes();
    if n.is_empty() || from + n.len() > h.len() {
        return None;
    }
    (from..=h.len() - n.len()).find(|&i| h[i..i + n.len()].eq_ignore_ascii_case(n))
}

/// Word-boundary check for single-word entries: the characters adjacent to
/// the span must be string edges, whitespace, or light punctuation.
fn is_boundary(text: &str, start: usize, end: usize) -> bool {
    let before_ok = start == 0
        || text[..start]
            .chars()
            .next_back()
            .map(|c| c.is_whitespace() || BOUNDARY_CHARS.contains(&c))
            .unwrap_or(true);
    let after_ok = end == text.len()
        || text[end..]
            .chars()
            .next()
            .map(|c| c.is_whitespace() || BOUNDARY_CHARS.contains(&c))
            .unwrap_or(true);
    before_ok && after_ok
}

/// Builds the ellipsized context snippet around a match span.
fn context_snippet(text: &str, start: usize, end: usize) -> String {
    let mut lo = start.saturating_sub(CONTEXT_CHARS);
    while !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + CONTEXT_CHARS).min(text.len());
    while !text.is_char_boundary(hi) {
        hi += 1;
    }
    let mut snippet = String::new();
    if lo > 0 {
        snippet.push_str("...");
    }
    snippet.push_str(&text[lo..hi]);
    if hi < text.len() {
        snippet.push_str("...");
    }
    snippet
}
