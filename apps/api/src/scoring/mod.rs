// Match Scoring Engine
// Implements: text normalization, keyword extraction and matching,
// deterministic resume scoring, the human-voice heuristic, section quality
// orchestration, and version comparison.
// Everything here is pure and synchronous except the quality orchestrator,
// whose only suspending point is the analyzer call through llm_client.

pub mod compare;
pub mod extractor;
pub mod handlers;
pub mod matcher;
pub mod normalize;
pub mod prompts;
pub mod quality;
pub mod score;
pub mod vocab;
pub mod voice;
