use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::builder::jd_match::{match_resume_with_jd, JdMatchReport};
use crate::builder::language::{detect_avoided_words, get_replacement_suggestions, AvoidedWordMatch};
use crate::builder::quality::{get_score_color, get_score_label, score_resume, ScoreBreakdown};
use crate::errors::AppError;
use crate::models::resume::Resume;

#[derive(Debug, Deserialize)]
pub struct ScoreRequest {
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct ScoreResponse {
    #[serde(flatten)]
    pub breakdown: ScoreBreakdown,
    pub label: &'static str,
    pub color: &'static str,
}

/// POST /api/v1/resume/score
pub async fn handle_score(Json(req): Json<ScoreRequest>) -> Json<ScoreResponse> {
    let breakdown = score_resume(&req.resume);
    debug!(total = breakdown.total, "resume scored");
    let label = get_score_label(breakdown.total);
    let color = get_score_color(breakdown.total);
    Json(ScoreResponse {
        breakdown,
        label,
        color,
    })
}

#[derive(Debug, Deserialize)]
pub struct MatchRequest {
    pub resume: Resume,
    pub job_description: String,
}

/// POST /api/v1/resume/match
pub async fn handle_match(
    Json(req): Json<MatchRequest>,
) -> Result<Json<JdMatchReport>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".to_string(),
        ));
    }
    let report = match_resume_with_jd(&req.resume, &req.job_description);
    debug!(score = report.match_score, "resume matched against JD");
    Ok(Json(report))
}

#[derive(Debug, Deserialize)]
pub struct LanguageRequest {
    pub resume: Resume,
}

#[derive(Debug, Serialize)]
pub struct FlaggedWord {
    #[serde(flatten)]
    pub found: AvoidedWordMatch,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct LanguageResponse {
    pub matches: Vec<FlaggedWord>,
}

/// POST /api/v1/resume/language
pub async fn handle_language(Json(req): Json<LanguageRequest>) -> Json<LanguageResponse> {
    let matches = detect_avoided_words(&req.resume)
        .into_iter()
        .map(|found| {
            let suggestions = get_replacement_suggestions(&found.word);
            FlaggedWord { found, suggestions }
        })
        .collect();
    Json(LanguageResponse { matches })
}
