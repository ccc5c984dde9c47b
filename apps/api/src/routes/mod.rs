pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Scoring API
        .route(
            "/api/v1/score/keywords",
            post(handlers::handle_score_keywords),
        )
        .route("/api/v1/score/resume", post(handlers::handle_score_resume))
        .route("/api/v1/score/voice", post(handlers::handle_score_voice))
        .route(
            "/api/v1/score/section-quality",
            post(handlers::handle_section_quality),
        )
        .route(
            "/api/v1/score/compare",
            post(handlers::handle_compare_versions),
        )
        .with_state(state)
}
