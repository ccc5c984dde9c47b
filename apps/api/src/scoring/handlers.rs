//! Axum route handlers for the Scoring API.
//!
//! Handlers validate, delegate to the engine, and serialize — no scoring
//! logic lives here.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::compare::{compare_versions, VersionComparison};
use crate::scoring::extractor::{extract, KeywordSet};
use crate::scoring::matcher::{match_keywords, KeywordMatchReport};
use crate::scoring::quality::{QualityInput, QualityScoreResult};
use crate::scoring::score::{
    calculate_resume_score, EvidenceClaim, JDRequirement, KeywordDecision, ScoreBreakdown,
};
use crate::scoring::voice::human_voice_score;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct KeywordScoreRequest {
    pub resume_text: String,
    pub jd_text: String,
}

#[derive(Debug, Serialize)]
pub struct KeywordScoreResponse {
    pub jd_keywords: KeywordSet,
    pub resume_keywords: KeywordSet,
    pub match_report: KeywordMatchReport,
}

#[derive(Debug, Deserialize)]
pub struct ResumeScoreRequest {
    pub keyword_decisions: Vec<KeywordDecision>,
    pub requirements: Vec<JDRequirement>,
    pub evidence: Vec<EvidenceClaim>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct VoiceScoreRequest {
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct VoiceScoreResponse {
    pub score: u32,
}

#[derive(Debug, Deserialize)]
pub struct CompareRequest {
    pub ideal: QualityScoreResult,
    pub personalized: QualityScoreResult,
    pub resume_strength: u32,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/score/keywords
///
/// Extracts categorized keywords from both texts and matches them.
pub async fn handle_score_keywords(
    State(state): State<AppState>,
    Json(request): Json<KeywordScoreRequest>,
) -> Result<Json<KeywordScoreResponse>, AppError> {
    if request.jd_text.trim().is_empty() {
        return Err(AppError::Validation("jd_text cannot be empty".to_string()));
    }
    if request.resume_text.trim().is_empty() {
        return Err(AppError::Validation(
            "resume_text cannot be empty".to_string(),
        ));
    }

    let jd_keywords = extract(&request.jd_text, &state.vocab);
    let resume_keywords = extract(&request.resume_text, &state.vocab);
    let match_report = match_keywords(&jd_keywords, &resume_keywords);

    Ok(Json(KeywordScoreResponse {
        jd_keywords,
        resume_keywords,
        match_report,
    }))
}

/// POST /api/v1/score/resume
///
/// Deterministic resume score from keyword decisions, JD requirements, and
/// evidence claims.
pub async fn handle_score_resume(
    Json(request): Json<ResumeScoreRequest>,
) -> Result<Json<ScoreBreakdown>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let breakdown = calculate_resume_score(
        &request.keyword_decisions,
        &request.requirements,
        &request.evidence,
        &request.content,
    );

    Ok(Json(breakdown))
}

/// POST /api/v1/score/voice
///
/// Human-voice heuristic. Short texts are a documented neutral 50, so no
/// emptiness validation here.
pub async fn handle_score_voice(
    Json(request): Json<VoiceScoreRequest>,
) -> Result<Json<VoiceScoreResponse>, AppError> {
    Ok(Json(VoiceScoreResponse {
        score: human_voice_score(&request.content),
    }))
}

/// POST /api/v1/score/section-quality
///
/// AI-augmented quality breakdown, served through the orchestrator's cache.
/// Analyzer failures surface as the zero-confidence fallback, never as an
/// error response.
pub async fn handle_section_quality(
    State(state): State<AppState>,
    Json(request): Json<QualityInput>,
) -> Result<Json<QualityScoreResult>, AppError> {
    if request.content.trim().is_empty() {
        return Err(AppError::Validation("content cannot be empty".to_string()));
    }

    let result = state.quality.score_section(&request).await;
    Ok(Json(result))
}

/// POST /api/v1/score/compare
///
/// Recommends ideal / personalized / blend for two scored variants.
pub async fn handle_compare_versions(
    Json(request): Json<CompareRequest>,
) -> Result<Json<VersionComparison>, AppError> {
    Ok(Json(compare_versions(
        &request.ideal,
        &request.personalized,
        request.resume_strength,
    )))
}
