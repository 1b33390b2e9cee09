//! Weighted match scoring between a job-description keyword set and a
//! résumé keyword set.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::dictionary::{canonical_term, skill_weight};

/// Raw score floor applied whenever at least one keyword matched.
const MATCHED_SCORE_FLOOR: u32 = 30;

/// Outcome of scoring one job-keyword set against one résumé-keyword set.
/// `matched` and `missing` partition the canonical job set; both are kept
/// unbounded here, truncation for display is the caller's concern.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// Scores a résumé keyword set against a job keyword set.
///
/// Both inputs are re-canonicalized defensively (idempotent when they come
/// straight from `extract_keywords`). Every canonical job keyword is
/// weighted, classified as matched or missing by exact set membership, and
/// the score is the rounded matched-weight percentage, floored at 30 when
/// anything matched and capped at 100.
pub fn calculate_score(job_keywords: &[String], resume_keywords: &[String]) -> MatchResult {
    let resume_set: HashSet<&str> = resume_keywords
        .iter()
        .map(|k| canonical_term(k))
        .collect();

    let mut seen: HashSet<&str> = HashSet::new();
    let mut matched = Vec::new();
    let mut missing = Vec::new();
    let mut total_weight = 0.0_f64;
    let mut matched_weight = 0.0_f64;

    for raw in job_keywords {
        let canonical = canonical_term(raw);
        // Job keywords are a set; a variant and its canonical form count once.
        if !seen.insert(canonical) {
            continue;
        }

        let weight = skill_weight(canonical, raw);
        total_weight += weight;

        // Exact canonical membership only. A résumé "sheets" does not match
        // a job "google sheets"; sub-phrase matching stays out of contract.
        if resume_set.contains(canonical) {
            matched_weight += weight;
            matched.push(canonical.to_string());
        } else {
            missing.push(canonical.to_string());
        }
    }

    let raw_score = if total_weight > 0.0 {
        matched_weight / total_weight * 100.0
    } else {
        0.0
    };
    let mut score = raw_score.round() as u32;
    if !matched.is_empty() && score < MATCHED_SCORE_FLOOR {
        score = MATCHED_SCORE_FLOOR;
    }
    if score > 100 {
        score = 100;
    }

    MatchResult {
        score,
        matched,
        missing,
    }
}
