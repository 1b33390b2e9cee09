use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;
use crate::scanner::extract::extract_keywords;
use crate::scanner::scoring::calculate_score;

/// Display cap for matched/missing keyword lists. The scoring core keeps
/// its lists unbounded; truncation happens here at the edge.
const MAX_LISTED_KEYWORDS: usize = 20;

#[derive(Debug, Deserialize)]
pub struct ScanRequest {
    pub job_description: String,
    pub resume_text: String,
}

#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub score: u32,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// POST /api/v1/scan
pub async fn handle_scan(Json(req): Json<ScanRequest>) -> Result<Json<ScanResponse>, AppError> {
    if req.job_description.trim().is_empty() {
        return Err(AppError::Validation(
            "job_description must not be empty".to_string(),
        ));
    }

    let job_keywords = extract_keywords(&req.job_description);
    let resume_keywords = extract_keywords(&req.resume_text);
    let mut result = calculate_score(&job_keywords, &resume_keywords);
    debug!(
        score = result.score,
        matched = result.matched.len(),
        missing = result.missing.len(),
        "scan complete"
    );

    result.matched.truncate(MAX_LISTED_KEYWORDS);
    result.missing.truncate(MAX_LISTED_KEYWORDS);
    Ok(Json(ScanResponse {
        score: result.score,
        matched: result.matched,
        missing: result.missing,
    }))
}
