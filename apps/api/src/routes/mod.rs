pub mod health;

use axum::{routing::get, routing::post, Router};

use crate::builder::handlers as builder_handlers;
use crate::scanner::handlers as scanner_handlers;

pub fn build_router() -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scanner engine: JD vs résumé text
        .route("/api/v1/scan", post(scanner_handlers::handle_scan))
        // Résumé builder: quality score, JD match, language check
        .route(
            "/api/v1/resume/score",
            post(builder_handlers::handle_score),
        )
        .route(
            "/api/v1/resume/match",
            post(builder_handlers::handle_match),
        )
        .route(
            "/api/v1/resume/language",
            post(builder_handlers::handle_language),
        )
}
