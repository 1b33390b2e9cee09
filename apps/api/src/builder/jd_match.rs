//! The résumé builder's own JD matcher.
//!
//! This is the second, simpler extraction path: frequency-ranked tokens,
//! a smaller résumé-flavored stop-word list, no synonym folding and no
//! phrase detection. It evolved separately from the scanner engine and the
//! two are intentionally kept apart; unifying them would silently change
//! matching behavior neither ever guaranteed to share.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::dictionary::BUILDER_STOP_WORDS;
use crate::models::resume::Resume;

/// Minimum token length for this extractor (stricter than the scanner's 2).
const MIN_TOKEN_LEN: usize = 3;

/// How many missing keywords get an individual suggestion line.
const MAX_SUGGESTED_KEYWORDS: usize = 5;

/// A keyword with its occurrence count in the source text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedKeyword {
    pub keyword: String,
    pub count: u32,
}

/// Result of matching a structured résumé against a pasted job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JdMatchReport {
    pub match_score: u32,
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub suggestions: Vec<String>,
}

/// Extracts frequency-ranked keywords from free text.
///
/// Characters outside `[a-z0-9\s#.+-]` are replaced by spaces after case
/// folding; tokens shorter than 3 characters, builder stop words, and
/// pure-digit tokens are dropped. Ranking is by descending count, stable
/// on first appearance for ties.
pub fn extract_keywords(text: &str) -> Vec<RankedKeyword> {
    let folded: String = text
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_lowercase()
                || c.is_ascii_digit()
                || c.is_whitespace()
                || matches!(c, '#' | '.' | '+' | '-')
            {
                c
            } else {
                ' '
            }
        })
        .collect();

    let mut counts: HashMap<String, u32> = HashMap::new();
    let mut order: Vec<String> = Vec::new();

    for token in folded.split_whitespace() {
        if token.chars().count() < MIN_TOKEN_LEN {
            continue;
        }
        if BUILDER_STOP_WORDS.contains(token) {
            continue;
        }
        if token.chars().all(|c| c.is_ascii_digit()) {
            continue;
        }
        let entry = counts.entry(token.to_string()).or_insert(0);
        if *entry == 0 {
            order.push(token.to_string());
        }
        *entry += 1;
    }

    let mut ranked: Vec<RankedKeyword> = order
        .into_iter()
        .map(|keyword| {
            let count = counts[&keyword];
            RankedKeyword { keyword, count }
        })
        .collect();
    // Stable sort keeps first-seen order among equal counts.
    ranked.sort_by(|a, b| b.count.cmp(&a.count));
    ranked
}

/// Matches a structured résumé against a job description.
///
/// The résumé's text fields are aggregated and tokenized with the same
/// extractor, then every ranked JD keyword is classified by presence in
/// the résumé's token set.
pub fn match_resume_with_jd(resume: &Resume, jd_text: &str) -> JdMatchReport {
    let jd_keywords = extract_keywords(jd_text);
    if jd_keywords.is_empty() {
        return JdMatchReport {
            match_score: 0,
            matched_keywords: vec![],
            missing_keywords: vec![],
            suggestions: vec![
                "No usable keywords found in the job description.".to_string(),
            ],
        };
    }

    let resume_text = aggregate_resume_text(resume);
    let resume_tokens: HashMap<String, u32> = extract_keywords(&resume_text)
        .into_iter()
        .map(|rk| (rk.keyword, rk.count))
        .collect();

    let mut matched_keywords = Vec::new();
    let mut missing_keywords = Vec::new();
    for rk in &jd_keywords {
        if resume_tokens.contains_key(&rk.keyword) {
            matched_keywords.push(rk.keyword.clone());
        } else {
            missing_keywords.push(rk.keyword.clone());
        }
    }

    let match_score =
        (matched_keywords.len() as f64 / jd_keywords.len() as f64 * 100.0).round() as u32;
    let suggestions = build_suggestions(match_score, &missing_keywords);

    JdMatchReport {
        match_score,
        matched_keywords,
        missing_keywords,
        suggestions,
    }
}

/// Flattens every free-text field of the résumé into one searchable blob.
fn aggregate_resume_text(resume: &Resume) -> String {
    let mut parts: Vec<&str> = vec![&resume.summary];
    for category in &resume.skill_categories {
        parts.push(&category.name);
        for skill in &category.skills {
            parts.push(skill);
        }
    }
    for exp in &resume.experiences {
        parts.push(&exp.title);
        parts.push(&exp.company);
        for bullet in &exp.bullets {
            parts.push(bullet);
        }
    }
    for edu in &resume.education {
        parts.push(&edu.degree);
        parts.push(&edu.institution);
    }
    for project in &resume.projects {
        parts.push(&project.name);
        parts.push(&project.description);
        for bullet in &project.bullets {
            parts.push(bullet);
        }
    }
    for cert in &resume.certifications {
        parts.push(&cert.name);
    }
    for award in &resume.awards {
        parts.push(&award.title);
    }
    parts.join(" ")
}

fn build_suggestions(score: u32, missing: &[String]) -> Vec<String> {
    let mut suggestions = Vec::new();
    if missing.is_empty() {
        suggestions
            .push("Your résumé already mentions every keyword from this posting.".to_string());
        return suggestions;
    }
    if score < 50 {
        suggestions.push(
            "Coverage is low. Tailor your summary and experience bullets to this posting."
                .to_string(),
        );
    }
    for keyword in missing.iter().take(MAX_SUGGESTED_KEYWORDS) {
        suggestions.push(format!(
            "Consider adding '{keyword}' where it genuinely applies to your experience."
        ));
    }
    suggestions
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::SkillCategory;

    fn resume_with(summary: &str, skills: &[&str]) -> Resume {
        Resume {
            summary: summary.to_string(),
            skill_categories: vec![SkillCategory {
                name: "Technical".to_string(),
                skills: skills.iter().map(|s| s.to_string()).collect(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_min_length_and_stop_words_filtered() {
        let ranked = extract_keywords("We work with Go and the Rust team on APIs");
        for rk in &ranked {
            assert!(rk.keyword.chars().count() >= MIN_TOKEN_LEN);
            assert!(!BUILDER_STOP_WORDS.contains(rk.keyword.as_str()));
        }
        // "go" is two characters; this extractor drops it.
        assert!(!ranked.iter().any(|rk| rk.keyword == "go"));
        assert!(ranked.iter().any(|rk| rk.keyword == "rust"));
    }

    #[test]
    fn test_pure_digit_tokens_dropped() {
        let ranked = extract_keywords("2024 revenue grew 150 percent with python3");
        assert!(!ranked.iter().any(|rk| rk.keyword == "2024"));
        assert!(!ranked.iter().any(|rk| rk.keyword == "150"));
        assert!(ranked.iter().any(|rk| rk.keyword == "python3"));
    }

    #[test]
    fn test_frequency_ranked_descending() {
        let ranked = extract_keywords("python sql python docker python sql");
        assert_eq!(ranked[0].keyword, "python");
        assert_eq!(ranked[0].count, 3);
        assert_eq!(ranked[1].keyword, "sql");
        assert_eq!(ranked[1].count, 2);
        assert_eq!(ranked[2].keyword, "docker");
        assert_eq!(ranked[2].count, 1);
    }

    #[test]
    fn test_no_synonym_folding_in_builder_path() {
        // Unlike the scanner engine, reactjs stays reactjs here.
        let ranked = extract_keywords("reactjs reactjs react");
        assert!(ranked.iter().any(|rk| rk.keyword == "reactjs" && rk.count == 2));
        assert!(ranked.iter().any(|rk| rk.keyword == "react" && rk.count == 1));
    }

    #[test]
    fn test_empty_jd_yields_zero_report() {
        let report = match_resume_with_jd(&Resume::default(), "");
        assert_eq!(report.match_score, 0);
        assert!(report.matched_keywords.is_empty());
        assert!(report.missing_keywords.is_empty());
        assert_eq!(report.suggestions.len(), 1);
    }

    #[test]
    fn test_full_coverage_scores_100() {
        let resume = resume_with("Built python services with docker", &["python", "docker"]);
        let report = match_resume_with_jd(&resume, "python docker python");
        assert_eq!(report.match_score, 100);
        assert!(report.missing_keywords.is_empty());
    }

    #[test]
    fn test_missing_keywords_generate_suggestions() {
        let resume = resume_with("Built python services", &["python"]);
        let report = match_resume_with_jd(&resume, "python kubernetes terraform");
        assert!(report.missing_keywords.contains(&"kubernetes".to_string()));
        assert!(report.missing_keywords.contains(&"terraform".to_string()));
        assert!(report
            .suggestions
            .iter()
            .any(|s| s.contains("kubernetes")));
    }

    #[test]
    fn test_partition_property() {
        let resume = resume_with("python", &[]);
        let jd = "python kubernetes terraform ansible";
        let report = match_resume_with_jd(&resume, jd);
        let total = extract_keywords(jd).len();
        assert_eq!(
            report.matched_keywords.len() + report.missing_keywords.len(),
            total
        );
    }
}
