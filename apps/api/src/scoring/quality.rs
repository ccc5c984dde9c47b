//! Section Quality Orchestrator — composes the deterministic signals with an
//! external "AI quality" capability behind a time-bounded cache.
//!
//! The analyzer is a pluggable trait (`QualityAnalyzer`), carried as
//! `Arc<dyn QualityAnalyzer>` so handlers and tests can swap backends.
//! On analyzer failure the orchestrator returns a zero-confidence fallback:
//! a 0 score is a signal of "could not evaluate", never silently presented
//! as "evaluated as poor".

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::llm_client::{LlmClient, LlmError};
use crate::scoring::prompts::{QUALITY_PROMPT_TEMPLATE, QUALITY_SYSTEM};

/// Floor values for the fallback result.
const FALLBACK_SCORE: u32 = 0;
const FALLBACK_STRENGTH: u8 = 1;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Role context forwarded to the analyzer verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JobAnalysis {
    pub seniority: String,
    pub industry: String,
    pub job_title: String,
}

/// Input to one quality evaluation. The cache key is a stable hash of the
/// whole struct, so any field change is a distinct cache entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityInput {
    pub content: String,
    pub ats_keywords: Vec<String>,
    pub requirements: Vec<String>,
    #[serde(default)]
    pub job_analysis: Option<JobAnalysis>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordCoverage {
    pub matched: Vec<String>,
    pub missing: Vec<String>,
}

/// AI-augmented quality breakdown for one resume section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityScoreResult {
    pub overall_score: u32,
    pub ats_match_percentage: u32,
    pub requirements_coverage: u32,
    /// 1–5 star competitive rating.
    pub competitive_strength: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub keywords: KeywordCoverage,
}

// ────────────────────────────────────────────────────────────────────────────
// Analyzer trait + LLM backend
// ────────────────────────────────────────────────────────────────────────────

/// The external AI quality capability. The orchestrator only consumes the
/// structured result or the error; transport concerns stay behind this trait.
#[async_trait]
pub trait QualityAnalyzer: Send + Sync {
    async fn analyze(&self, input: &QualityInput) -> Result<QualityScoreResult, LlmError>;
}

/// Production analyzer backed by the Claude API via `LlmClient`.
pub struct LlmQualityAnalyzer {
    llm: LlmClient,
}

impl LlmQualityAnalyzer {
    pub fn new(llm: LlmClient) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl QualityAnalyzer for LlmQualityAnalyzer {
    async fn analyze(&self, input: &QualityInput) -> Result<QualityScoreResult, LlmError> {
        let job = input.job_analysis.clone().unwrap_or_default();
        let prompt = QUALITY_PROMPT_TEMPLATE
            .replace("{seniority}", or_unspecified(&job.seniority))
            .replace("{job_title}", or_unspecified(&job.job_title))
            .replace("{industry}", or_unspecified(&job.industry))
            .replace("{requirements}", &bullet_list(&input.requirements))
            .replace("{ats_keywords}", &bullet_list(&input.ats_keywords))
            .replace("{content}", &input.content);

        self.llm
            .call_json::<QualityScoreResult>(&prompt, QUALITY_SYSTEM)
            .await
    }
}

fn or_unspecified(value: &str) -> &str {
    if value.trim().is_empty() {
        "unspecified"
    } else {
        value
    }
}

fn bullet_list(items: &[String]) -> String {
    if items.is_empty() {
        return "(none provided)".to_string();
    }
    items
        .iter()
        .map(|i| format!("- {i}"))
        .collect::<Vec<_>>()
        .join("\n")
}

// ────────────────────────────────────────────────────────────────────────────
// Orchestrator with TTL cache
// ────────────────────────────────────────────────────────────────────────────

struct CacheEntry {
    value: QualityScoreResult,
    expires_at: DateTime<Utc>,
}

/// Orchestrates quality evaluation: cache lookup, analyzer call, fallback.
///
/// The cache is owned by this instance (not module-global) so lifecycle and
/// test isolation stay controllable. Entries are evicted lazily on lookup;
/// there is no background sweep. Concurrent calls with the same key before
/// the first completes each invoke the analyzer — at-most-one-in-flight is
/// not part of the contract.
pub struct SectionQualityScorer {
    analyzer: Arc<dyn QualityAnalyzer>,
    cache: Mutex<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl SectionQualityScorer {
    /// Default 30-minute TTL.
    pub fn new(analyzer: Arc<dyn QualityAnalyzer>) -> Self {
        Self::with_ttl(analyzer, Duration::minutes(30))
    }

    pub fn with_ttl(analyzer: Arc<dyn QualityAnalyzer>, ttl: Duration) -> Self {
        Self {
            analyzer,
            cache: Mutex::new(HashMap::new()),
            ttl,
        }
    }

    /// Evaluates one section, serving unexpired cache hits unmodified and
    /// degrading to the zero-confidence fallback when the analyzer fails.
    /// Never returns an error to the caller.
    pub async fn score_section(&self, input: &QualityInput) -> QualityScoreResult {
        let key = cache_key(input);

        if let Some(hit) = self.lookup(&key) {
            debug!("quality cache hit for {key}");
            return hit;
        }

        match self.analyzer.analyze(input).await {
            Ok(result) => {
                self.store(key, result.clone());
                result
            }
            Err(e) => {
                warn!("quality analysis failed, returning fallback: {e}");
                fallback_result(&e)
            }
        }
    }

    /// Returns the cached value if present and unexpired; expired entries are
    /// removed on the way out.
    fn lookup(&self, key: &str) -> Option<QualityScoreResult> {
        let mut cache = self.cache.lock().expect("quality cache mutex poisoned");
        match cache.get(key) {
            Some(entry) if entry.expires_at > Utc::now() => Some(entry.value.clone()),
            Some(_) => {
                cache.remove(key);
                None
            }
            None => None,
        }
    }

    fn store(&self, key: String, value: QualityScoreResult) {
        let mut cache = self.cache.lock().expect("quality cache mutex poisoned");
        cache.insert(
            key,
            CacheEntry {
                value,
                expires_at: Utc::now() + self.ttl,
            },
        );
    }
}

/// Stable key over the full input. Field order is fixed by the struct
/// definition, so identical inputs always hash identically.
fn cache_key(input: &QualityInput) -> String {
    let bytes = serde_json::to_vec(input).unwrap_or_default();
    blake3::hash(&bytes).to_hex().to_string()
}

/// The documented "could not evaluate" result: all numeric fields at the
/// floor, star rating 1, and a human-readable reason in `weaknesses`.
pub fn fallback_result(error: &LlmError) -> QualityScoreResult {
    QualityScoreResult {
        overall_score: FALLBACK_SCORE,
        ats_match_percentage: FALLBACK_SCORE,
        requirements_coverage: FALLBACK_SCORE,
        competitive_strength: FALLBACK_STRENGTH,
        strengths: Vec::new(),
        weaknesses: vec![failure_reason(error)],
        keywords: KeywordCoverage {
            matched: Vec::new(),
            missing: Vec::new(),
        },
    }
}

/// Classifies an analyzer failure into a human-readable reason by status and
/// message sniffing.
fn failure_reason(error: &LlmError) -> String {
    let classified = match error {
        LlmError::Timeout => Some(reason_timeout()),
        LlmError::RateLimited { .. } => Some(reason_rate_limited()),
        LlmError::Api { status: 429, .. } => Some(reason_rate_limited()),
        LlmError::Api { status: 402, .. } => Some(reason_payment()),
        _ => None,
    };
    if let Some(reason) = classified {
        return reason;
    }

    let message = error.to_string().to_lowercase();
    if message.contains("timeout") || message.contains("timed out") {
        reason_timeout()
    } else if message.contains("429") || message.contains("rate") {
        reason_rate_limited()
    } else if message.contains("402") || message.contains("payment") || message.contains("billing")
    {
        reason_payment()
    } else {
        "Quality analysis is temporarily unavailable. This score reflects an unevaluated \
         section, not a poor one."
            .to_string()
    }
}

fn reason_timeout() -> String {
    "Quality analysis timed out before completing. This score reflects an unevaluated \
     section, not a poor one."
        .to_string()
}

fn reason_rate_limited() -> String {
    "Quality analysis is rate limited right now. This score reflects an unevaluated \
     section, not a poor one."
        .to_string()
}

fn reason_payment() -> String {
    "Quality analysis is unavailable: the AI provider reported a billing problem. This \
     score reflects an unevaluated section, not a poor one."
        .to_string()
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Counting stub analyzer: succeeds with a canned result or fails with a
    /// configured error.
    struct StubAnalyzer {
        calls: AtomicUsize,
        fail_with: Option<fn() -> LlmError>,
    }

    impl StubAnalyzer {
        fn succeeding() -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: None,
            }
        }

        fn failing(make_error: fn() -> LlmError) -> Self {
            Self {
                calls: AtomicUsize::new(0),
                fail_with: Some(make_error),
            }
        }

        fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QualityAnalyzer for StubAnalyzer {
        async fn analyze(&self, _input: &QualityInput) -> Result<QualityScoreResult, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(make_error) = self.fail_with {
                return Err(make_error());
            }
            Ok(canned_result())
        }
    }

    fn canned_result() -> QualityScoreResult {
        QualityScoreResult {
            overall_score: 72,
            ats_match_percentage: 64,
            requirements_coverage: 70,
            competitive_strength: 4,
            strengths: vec!["Concrete metrics".to_string()],
            weaknesses: vec!["Missing Terraform".to_string()],
            keywords: KeywordCoverage {
                matched: vec!["Python".to_string()],
                missing: vec!["Terraform".to_string()],
            },
        }
    }

    fn input(content: &str) -> QualityInput {
        QualityInput {
            content: content.to_string(),
            ats_keywords: vec!["Python".to_string()],
            requirements: vec!["3+ years Python".to_string()],
            job_analysis: Some(JobAnalysis {
                seniority: "senior".to_string(),
                industry: "fintech".to_string(),
                job_title: "backend engineer".to_string(),
            }),
        }
    }

    #[tokio::test]
    async fn test_cache_hit_within_ttl_skips_analyzer() {
        let analyzer = Arc::new(StubAnalyzer::succeeding());
        let scorer = SectionQualityScorer::new(analyzer.clone());

        let first = scorer.score_section(&input("Shipped the payments service")).await;
        let second = scorer.score_section(&input("Shipped the payments service")).await;

        assert_eq!(first, second, "cached result must be returned unmodified");
        assert_eq!(analyzer.call_count(), 1, "second call must be served from cache");
    }

    #[tokio::test]
    async fn test_cache_expiry_reinvokes_analyzer() {
        let analyzer = Arc::new(StubAnalyzer::succeeding());
        let scorer =
            SectionQualityScorer::with_ttl(analyzer.clone(), Duration::milliseconds(30));

        let _ = scorer.score_section(&input("Shipped the payments service")).await;
        tokio::time::sleep(std::time::Duration::from_millis(60)).await;
        let _ = scorer.score_section(&input("Shipped the payments service")).await;

        assert_eq!(analyzer.call_count(), 2, "expired entry must re-invoke the analyzer");
    }

    #[tokio::test]
    async fn test_different_inputs_do_not_share_cache_entries() {
        let analyzer = Arc::new(StubAnalyzer::succeeding());
        let scorer = SectionQualityScorer::new(analyzer.clone());

        let _ = scorer.score_section(&input("Section A")).await;
        let _ = scorer.score_section(&input("Section B")).await;

        assert_eq!(analyzer.call_count(), 2);
    }

    #[tokio::test]
    async fn test_failure_returns_zero_confidence_fallback() {
        let analyzer = Arc::new(StubAnalyzer::failing(|| LlmError::EmptyContent));
        let scorer = SectionQualityScorer::new(analyzer);

        let result = scorer.score_section(&input("Anything")).await;

        assert_eq!(result.overall_score, 0);
        assert_eq!(result.ats_match_percentage, 0);
        assert_eq!(result.requirements_coverage, 0);
        assert_eq!(result.competitive_strength, 1);
        assert!(result.strengths.is_empty());
        assert!(!result.weaknesses.is_empty(), "fallback must explain itself");
    }

    #[tokio::test]
    async fn test_failures_are_not_cached() {
        let analyzer = Arc::new(StubAnalyzer::failing(|| LlmError::EmptyContent));
        let scorer = SectionQualityScorer::new(analyzer.clone());

        let _ = scorer.score_section(&input("Anything")).await;
        let _ = scorer.score_section(&input("Anything")).await;

        assert_eq!(
            analyzer.call_count(),
            2,
            "a failed analysis must not poison the cache"
        );
    }

    #[test]
    fn test_failure_reason_rate_limited() {
        let reason = failure_reason(&LlmError::RateLimited { retries: 3 });
        assert!(reason.contains("rate limited"), "got: {reason}");

        let reason = failure_reason(&LlmError::Api {
            status: 429,
            message: "too many requests".to_string(),
        });
        assert!(reason.contains("rate limited"), "got: {reason}");
    }

    #[test]
    fn test_failure_reason_payment_required() {
        let reason = failure_reason(&LlmError::Api {
            status: 402,
            message: "payment required".to_string(),
        });
        assert!(reason.contains("billing"), "got: {reason}");
    }

    #[test]
    fn test_failure_reason_timeout() {
        let reason = failure_reason(&LlmError::Timeout);
        assert!(reason.contains("timed out"), "got: {reason}");
    }

    #[test]
    fn test_failure_reason_generic() {
        let reason = failure_reason(&LlmError::EmptyContent);
        assert!(reason.contains("unavailable"), "got: {reason}");
    }

    #[test]
    fn test_failure_reason_sniffs_message_text() {
        let reason = failure_reason(&LlmError::Api {
            status: 500,
            message: "upstream gateway timeout".to_string(),
        });
        assert!(reason.contains("timed out"), "got: {reason}");
    }

    #[test]
    fn test_cache_key_stable_and_input_sensitive() {
        let a = cache_key(&input("Section A"));
        let a_again = cache_key(&input("Section A"));
        let b = cache_key(&input("Section B"));
        assert_eq!(a, a_again);
        assert_ne!(a, b);
    }
}
