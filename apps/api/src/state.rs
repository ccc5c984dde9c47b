use std::sync::Arc;

use crate::scoring::quality::SectionQualityScorer;
use crate::scoring::vocab::ExtractorVocab;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Extraction vocabularies, loaded once at startup.
    pub vocab: Arc<ExtractorVocab>,
    /// Section quality orchestrator. Owns the TTL cache and the pluggable
    /// analyzer backend (LLM-backed in production, stubbed in tests).
    pub quality: Arc<SectionQualityScorer>,
}
