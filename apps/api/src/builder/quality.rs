//! Résumé quality scoring: completeness, content quality, and formatting
//! sub-scores with actionable hints.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::builder::word_count::{count_words, SUMMARY_MAX_WORDS, SUMMARY_MIN_WORDS};
use crate::dictionary::ACTION_VERBS;
use crate::models::resume::Resume;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HintSeverity {
    Important,
    Recommended,
    NiceToHave,
}

impl HintSeverity {
    fn rank(self) -> u8 {
        match self {
            HintSeverity::Important => 0,
            HintSeverity::Recommended => 1,
            HintSeverity::NiceToHave => 2,
        }
    }
}

/// An actionable improvement suggestion tied to a résumé section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hint {
    pub severity: HintSeverity,
    pub message: String,
    pub section: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
}

impl Hint {
    fn new(severity: HintSeverity, section: &str, message: String) -> Self {
        Hint {
            severity,
            message,
            section: section.to_string(),
            action: None,
        }
    }

    fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }
}

/// Composite quality score. `total` is always the sum of the three parts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub total: u32,
    pub completeness: u32,
    pub content_quality: u32,
    pub formatting: u32,
    pub hints: Vec<Hint>,
}

/// Bullets matching this count as quantified: percentages, dollar amounts,
/// shorthand magnitudes (10k, 2m), or a number followed by a unit word.
static METRIC_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\d+(\.\d+)?\s*%|\$\s*\d|\b\d+(\.\d+)?[kmb]\b|\b\d[\d,]*(\.\d+)?\s+(users|customers|clients|people|employees|engineers|projects|teams|hours|days|weeks|months|years|percent|dollars|downloads|requests|transactions|records|leads|sales|accounts)\b",
    )
    .expect("metric pattern must compile")
});

/// Scores a structured résumé. Pure and deterministic: same résumé in,
/// same breakdown out. Never fails; missing sections score zero and emit
/// the matching hint.
pub fn score_resume(resume: &Resume) -> ScoreBreakdown {
    let (completeness, mut hints) = score_completeness(resume);
    let (content_quality, content_hints) = score_content_quality(resume);
    let (formatting, formatting_hints) = score_formatting(resume);

    hints.extend(content_hints);
    hints.extend(formatting_hints);
    // Stable sort: equal severities keep their emission order.
    hints.sort_by_key(|h| h.severity.rank());

    ScoreBreakdown {
        total: completeness + content_quality + formatting,
        completeness,
        content_quality,
        formatting,
        hints,
    }
}

/// Completeness: 0–40. Summary 8, experience 12, skills 8, education 6,
/// contact details 6.
fn score_completeness(resume: &Resume) -> (u32, Vec<Hint>) {
    let mut score = 0;
    let mut hints = Vec::new();

    let summary_words = count_words(&resume.summary);
    if (SUMMARY_MIN_WORDS..=SUMMARY_MAX_WORDS).contains(&summary_words) {
        score += 8;
    } else if summary_words > 0 {
        score += 4;
        hints.push(
            Hint::new(
                HintSeverity::Important,
                "summary",
                format!(
                    "Your summary is {summary_words} words; aim for {SUMMARY_MIN_WORDS} to {SUMMARY_MAX_WORDS}."
                ),
            )
            .with_action("Edit summary"),
        );
    } else {
        hints.push(
            Hint::new(
                HintSeverity::Important,
                "summary",
                "Add a professional summary near the top of your résumé.".to_string(),
            )
            .with_action("Add summary"),
        );
    }

    if resume.experiences.is_empty() {
        hints.push(
            Hint::new(
                HintSeverity::Important,
                "experience",
                "Add at least one work experience entry.".to_string(),
            )
            .with_action("Add experience"),
        );
    } else {
        score += 6;
        if resume.experiences.iter().all(|e| e.bullets.len() >= 2) {
            score += 6;
        } else {
            hints.push(Hint::new(
                HintSeverity::Recommended,
                "experience",
                "Give every experience at least two bullet points.".to_string(),
            ));
        }
    }

    let skill_count: usize = resume.skill_categories.iter().map(|c| c.skills.len()).sum();
    if skill_count >= 5 {
        score += 8;
    } else if skill_count > 0 {
        score += 4;
        hints.push(Hint::new(
            HintSeverity::Recommended,
            "skills",
            format!("Only {skill_count} skills listed; aim for at least five."),
        ));
    } else {
        hints.push(
            Hint::new(
                HintSeverity::Important,
                "skills",
                "Add a skills section with your core competencies.".to_string(),
            )
            .with_action("Add skills"),
        );
    }

    if resume.education.is_empty() {
        hints.push(Hint::new(
            HintSeverity::Recommended,
            "education",
            "Add an education entry.".to_string(),
        ));
    } else {
        score += 6;
    }

    if resume.header.email.trim().is_empty() {
        hints.push(Hint::new(
            HintSeverity::Important,
            "contact",
            "Add an email address so recruiters can reach you.".to_string(),
        ));
    } else {
        score += 2;
    }
    if resume.header.phone.trim().is_empty() {
        hints.push(Hint::new(
            HintSeverity::Recommended,
            "contact",
            "Add a phone number.".to_string(),
        ));
    } else {
        score += 2;
    }
    if resume.header.links.iter().any(|l| !l.trim().is_empty()) {
        score += 2;
    } else {
        hints.push(Hint::new(
            HintSeverity::NiceToHave,
            "contact",
            "Link a portfolio, LinkedIn, or GitHub profile.".to_string(),
        ));
    }

    (score, hints)
}

/// Content quality: 0–40, computed over bullets gathered from experiences
/// and projects. With zero bullets the whole block short-circuits to zero
/// with no hints.
fn score_content_quality(resume: &Resume) -> (u32, Vec<Hint>) {
    let bullets: Vec<&str> = resume
        .experiences
        .iter()
        .flat_map(|e| e.bullets.iter())
        .chain(resume.projects.iter().flat_map(|p| p.bullets.iter()))
        .map(|b| b.as_str())
        .collect();
    if bullets.is_empty() {
        return (0, vec![]);
    }

    let mut score = 0;
    let mut hints = Vec::new();
    let total = bullets.len() as f64;

    let action_count = bullets
        .iter()
        .filter(|b| starts_with_action_verb(b))
        .count() as f64;
    let action_ratio = action_count / total;
    if action_ratio >= 0.8 {
        score += 15;
    } else if action_ratio >= 0.5 {
        score += 10;
        hints.push(Hint::new(
            HintSeverity::Recommended,
            "content",
            "Start more bullets with a strong action verb.".to_string(),
        ));
    } else {
        score += 5;
        hints.push(Hint::new(
            HintSeverity::Important,
            "content",
            "Most bullets should open with an action verb like 'Led' or 'Built'.".to_string(),
        ));
    }

    let metric_count = bullets
        .iter()
        .filter(|b| METRIC_PATTERN.is_match(b))
        .count() as f64;
    let metric_ratio = metric_count / total;
    if metric_ratio >= 0.3 {
        score += 15;
    } else if metric_ratio >= 0.15 {
        score += 10;
        hints.push(Hint::new(
            HintSeverity::Recommended,
            "content",
            "Quantify more bullets with numbers, percentages, or amounts.".to_string(),
        ));
    } else {
        score += 5;
        hints.push(Hint::new(
            HintSeverity::Important,
            "content",
            "Add measurable results to your bullets, e.g. 'reduced costs by 20%'.".to_string(),
        ));
    }

    if !resume.experiences.is_empty() {
        let exp_bullets: usize = resume.experiences.iter().map(|e| e.bullets.len()).sum();
        let density = exp_bullets as f64 / resume.experiences.len() as f64;
        if (3.0..=6.0).contains(&density) {
            score += 10;
        } else if density >= 2.0 {
            score += 6;
            hints.push(Hint::new(
                HintSeverity::NiceToHave,
                "experience",
                "Aim for three to six bullets per experience.".to_string(),
            ));
        } else {
            score += 2;
            hints.push(Hint::new(
                HintSeverity::Recommended,
                "experience",
                "Experiences look thin; add more bullets describing your impact.".to_string(),
            ));
        }
    }

    (score, hints)
}

/// Formatting: 0–20. Overall length 10, name 5, location 5.
fn score_formatting(resume: &Resume) -> (u32, Vec<Hint>) {
    let mut score = 0;
    let mut hints = Vec::new();

    let words = total_word_count(resume);
    if (350..=800).contains(&words) {
        score += 10;
    } else if (200..=1000).contains(&words) {
        score += 6;
        let message = if words < 350 {
            format!("Résumé is on the short side at {words} words; 350 to 800 reads best.")
        } else {
            format!("Résumé is on the long side at {words} words; 350 to 800 reads best.")
        };
        hints.push(Hint::new(HintSeverity::Recommended, "formatting", message));
    } else {
        score += 2;
        let message = if words < 200 {
            format!("Résumé is very short at {words} words; aim for 350 to 800.")
        } else {
            format!("Résumé is very long at {words} words; aim for 350 to 800.")
        };
        hints.push(Hint::new(HintSeverity::Important, "formatting", message));
    }

    if resume.header.full_name.trim().is_empty() {
        hints.push(
            Hint::new(
                HintSeverity::Important,
                "header",
                "Add your full name to the header.".to_string(),
            )
            .with_action("Edit header"),
        );
    } else {
        score += 5;
    }

    if resume.header.location.trim().is_empty() {
        hints.push(Hint::new(
            HintSeverity::NiceToHave,
            "header",
            "Add your location to the header.".to_string(),
        ));
    } else {
        score += 5;
    }

    (score, hints)
}

/// Total word count across the rendered sections; each skill item counts
/// as one word.
fn total_word_count(resume: &Resume) -> usize {
    let mut words = count_words(&resume.summary) + count_words(&resume.header.full_name);
    for exp in &resume.experiences {
        words += count_words(&exp.title) + count_words(&exp.company);
        words += exp.bullets.iter().map(|b| count_words(b)).sum::<usize>();
    }
    for edu in &resume.education {
        words += count_words(&edu.degree) + count_words(&edu.institution);
    }
    words += resume
        .skill_categories
        .iter()
        .map(|c| c.skills.len())
        .sum::<usize>();
    words
}

fn starts_with_action_verb(bullet: &str) -> bool {
    let Some(first) = bullet.split_whitespace().next() else {
        return false;
    };
    let word: String = first
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphabetic())
        .collect();
    ACTION_VERBS.contains(word.as_str())
}

/// Presentation label for a total score.
pub fn get_score_label(score: u32) -> &'static str {
    match score {
        90..=u32::MAX => "Excellent",
        75..=89 => "Good",
        60..=74 => "Fair",
        40..=59 => "Needs Improvement",
        _ => "Needs Work",
    }
}

/// Presentation color for a total score, same bands as the label.
pub fn get_score_color(score: u32) -> &'static str {
    match score {
        90..=u32::MAX => "#16a34a",
        75..=89 => "#65a30d",
        60..=74 => "#ca8a04",
        40..=59 => "#ea580c",
        _ => "#dc2626",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::{
        Education, Experience, Resume, ResumeHeader, SkillCategory,
    };

    fn filler_words(n: usize) -> String {
        vec!["delivery"; n].join(" ")
    }

    /// 40-word bullet opening with an action verb; optionally quantified.
    fn bullet(verb: &str, with_metric: bool) -> String {
        let metric = if with_metric { "by 40%" } else { "across regions" };
        format!("{verb} platform throughput {metric} {}", filler_words(35))
    }

    fn strong_resume() -> Resume {
        let exp = |id: &str, bullets: Vec<String>| Experience {
            id: id.to_string(),
            title: "Senior Engineer".to_string(),
            company: "Acme Corp".to_string(),
            location: "Remote".to_string(),
            start_date: "2020-01".to_string(),
            end_date: "2023-01".to_string(),
            bullets,
        };
        Resume {
            header: ResumeHeader {
                full_name: "Jordan Reyes".to_string(),
                email: "jordan@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
                location: "Austin, TX".to_string(),
                links: vec!["https://github.com/jordan".to_string()],
            },
            summary: filler_words(30),
            skill_categories: vec![SkillCategory {
                name: "Technical".to_string(),
                skills: vec![
                    "Python".into(),
                    "SQL".into(),
                    "Docker".into(),
                    "Kubernetes".into(),
                    "Terraform".into(),
                    "Go".into(),
                ],
            }],
            experiences: vec![
                exp(
                    "exp-1",
                    vec![
                        bullet("Led", true),
                        bullet("Built", false),
                        bullet("Reduced", true),
                        bullet("Launched", false),
                    ],
                ),
                exp(
                    "exp-2",
                    vec![
                        bullet("Designed", true),
                        bullet("Implemented", false),
                        bullet("Automated", false),
                        bullet("Mentored", false),
                    ],
                ),
            ],
            education: vec![Education {
                id: "edu-1".to_string(),
                degree: "BSc Computer Science".to_string(),
                institution: "State University".to_string(),
                ..Default::default()
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_resume_scores_low_but_valid() {
        let breakdown = score_resume(&Resume::default());
        assert_eq!(breakdown.completeness, 0);
        assert_eq!(breakdown.content_quality, 0);
        // Length + name + location all miss; only the 2-point length floor remains.
        assert_eq!(breakdown.formatting, 2);
        assert_eq!(
            breakdown.total,
            breakdown.completeness + breakdown.content_quality + breakdown.formatting
        );
        assert!(!breakdown.hints.is_empty());
    }

    #[test]
    fn test_strong_resume_maxes_every_component() {
        let breakdown = score_resume(&strong_resume());
        assert_eq!(breakdown.completeness, 40);
        assert_eq!(breakdown.content_quality, 40);
        assert_eq!(breakdown.formatting, 20);
        assert_eq!(breakdown.total, 100);
        assert!(breakdown.hints.is_empty());
    }

    #[test]
    fn test_total_is_sum_of_components() {
        let mut resume = strong_resume();
        resume.summary = filler_words(10); // out of band
        resume.header.phone = String::new();
        let breakdown = score_resume(&resume);
        assert_eq!(
            breakdown.total,
            breakdown.completeness + breakdown.content_quality + breakdown.formatting
        );
        assert!(breakdown.completeness <= 40);
        assert!(breakdown.content_quality <= 40);
        assert!(breakdown.formatting <= 20);
    }

    #[test]
    fn test_zero_bullets_means_zero_content_quality_and_no_content_hints() {
        let mut resume = strong_resume();
        for exp in &mut resume.experiences {
            exp.bullets.clear();
        }
        let breakdown = score_resume(&resume);
        assert_eq!(breakdown.content_quality, 0);
        assert!(breakdown.hints.iter().all(|h| h.section != "content"));
    }

    #[test]
    fn test_hints_sorted_by_severity() {
        // Out-of-band summary (important), missing phone (recommended),
        // missing links (nice_to_have) guarantee mixed severities.
        let mut resume = strong_resume();
        resume.summary = filler_words(5);
        resume.header.phone = String::new();
        resume.header.links.clear();
        let breakdown = score_resume(&resume);
        let ranks: Vec<u8> = breakdown.hints.iter().map(|h| h.severity.rank()).collect();
        let mut sorted = ranks.clone();
        sorted.sort();
        assert_eq!(ranks, sorted);
        assert!(ranks.contains(&0));
        assert!(ranks.contains(&1));
        assert!(ranks.contains(&2));
    }

    #[test]
    fn test_missing_summary_hint_is_important() {
        let breakdown = score_resume(&Resume::default());
        let summary_hint = breakdown
            .hints
            .iter()
            .find(|h| h.section == "summary")
            .unwrap();
        assert_eq!(summary_hint.severity, HintSeverity::Important);
    }

    #[test]
    fn test_short_summary_hint_names_count() {
        let mut resume = strong_resume();
        resume.summary = filler_words(7);
        let breakdown = score_resume(&resume);
        assert!(breakdown
            .hints
            .iter()
            .any(|h| h.section == "summary" && h.message.contains('7')));
    }

    #[test]
    fn test_single_bullet_experience_loses_bullet_bonus() {
        let mut resume = strong_resume();
        resume.experiences[0].bullets.truncate(1);
        let breakdown = score_resume(&resume);
        assert!(breakdown.completeness < 40);
        assert!(breakdown
            .hints
            .iter()
            .any(|h| h.section == "experience" && h.severity == HintSeverity::Recommended));
    }

    #[test]
    fn test_metric_pattern_variants() {
        assert!(METRIC_PATTERN.is_match("cut latency by 35%"));
        assert!(METRIC_PATTERN.is_match("managed a $2M budget"));
        assert!(METRIC_PATTERN.is_match("served 10k requests per second"));
        assert!(METRIC_PATTERN.is_match("onboarded 120 customers"));
        assert!(!METRIC_PATTERN.is_match("improved performance significantly"));
    }

    #[test]
    fn test_action_verb_detection_strips_punctuation() {
        assert!(starts_with_action_verb("Led: migration to Kubernetes"));
        assert!(starts_with_action_verb("built the pipeline"));
        assert!(!starts_with_action_verb("Was responsible for builds"));
        assert!(!starts_with_action_verb(""));
    }

    #[test]
    fn test_score_labels() {
        assert_eq!(get_score_label(95), "Excellent");
        assert_eq!(get_score_label(90), "Excellent");
        assert_eq!(get_score_label(75), "Good");
        assert_eq!(get_score_label(60), "Fair");
        assert_eq!(get_score_label(40), "Needs Improvement");
        assert_eq!(get_score_label(39), "Needs Work");
        assert_eq!(get_score_label(0), "Needs Work");
    }

    #[test]
    fn test_score_color_bands_match_labels() {
        assert_eq!(get_score_color(92), "#16a34a");
        assert_eq!(get_score_color(10), "#dc2626");
    }
}
