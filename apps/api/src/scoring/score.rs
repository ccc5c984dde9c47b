//! Deterministic Score Calculator — combines keyword-decision coverage,
//! weighted requirement coverage, and evidence confidence into one 0–100
//! score via fixed weights.
//!
//! Pure: no I/O, no mutation of inputs, same output for the same inputs.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::scoring::normalize::normalize;

/// Fixed blend weights for the overall score.
const KEYWORD_WEIGHT: f64 = 0.30;
const REQUIREMENT_WEIGHT: f64 = 0.50;
const EVIDENCE_WEIGHT: f64 = 0.20;

/// Neutral score when there are no active evidence claims: absence of
/// evidence is neither proof nor disproof.
const EVIDENCE_NEUTRAL: u32 = 50;

/// Requirement words at or below this length are skipped by the
/// content-presence fallback check.
const MIN_REQUIREMENT_WORD_LEN: usize = 3;

// ────────────────────────────────────────────────────────────────────────────
// Input records (read-only for one scoring pass)
// ────────────────────────────────────────────────────────────────────────────

/// User/AI adjudication of one candidate keyword. The scorer never mutates
/// decisions; only explicit user or AI-suggestion action does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Decision {
    Add,
    NotTrue,
    Ignore,
    Pending,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordDecision {
    pub keyword: String,
    pub decision: Decision,
}

/// Categories of an atomic JD requirement, each with a fixed importance
/// weight used in weighted coverage.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequirementCategory {
    HardSkill,
    Tool,
    Domain,
    Responsibility,
    Outcome,
    Education,
    Title,
    SoftSkill,
}

impl RequirementCategory {
    /// Importance weight for weighted requirement coverage.
    pub fn weight(&self) -> u32 {
        match self {
            RequirementCategory::HardSkill => 3,
            RequirementCategory::Responsibility => 3,
            RequirementCategory::Tool => 2,
            RequirementCategory::Domain => 2,
            RequirementCategory::Outcome => 2,
            RequirementCategory::Education => 2,
            RequirementCategory::Title => 1,
            RequirementCategory::SoftSkill => 1,
        }
    }
}

/// One atomic requirement extracted from a job description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JDRequirement {
    pub text: String,
    pub category: RequirementCategory,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Confidence {
    High,
    Medium,
    Low,
}

impl Confidence {
    pub fn weight(&self) -> f64 {
        match self {
            Confidence::High => 1.0,
            Confidence::Medium => 0.7,
            Confidence::Low => 0.4,
        }
    }
}

/// A factual claim supporting resume content. Inactive claims are excluded
/// from the evidence sub-score entirely.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvidenceClaim {
    #[serde(default)]
    pub id: Option<Uuid>,
    pub claim_text: String,
    pub confidence: Confidence,
    pub is_active: bool,
    #[serde(default)]
    pub source: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Output
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubScores {
    pub keyword_score: u32,
    pub requirement_score: u32,
    pub evidence_score: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreDetails {
    pub matched_keywords: usize,
    pub total_keywords: usize,
    pub met_requirements: usize,
    pub total_requirements: usize,
    pub verified_claims: usize,
    pub total_claims: usize,
}

/// Output of the deterministic calculator. Created fresh per invocation and
/// never mutated after construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub score: u32,
    pub breakdown: SubScores,
    pub details: ScoreDetails,
}

// ────────────────────────────────────────────────────────────────────────────
// Calculator
// ────────────────────────────────────────────────────────────────────────────

/// Computes the deterministic resume score for one resume/job pairing.
///
/// Sub-scores: approved-keyword coverage of the content (30%), weighted JD
/// requirement coverage (50%), evidence confidence (20%).
pub fn calculate_resume_score(
    decisions: &[KeywordDecision],
    requirements: &[JDRequirement],
    evidence: &[EvidenceClaim],
    content: &str,
) -> ScoreBreakdown {
    let normalized_content = normalize(content);

    let (keyword_score, matched_keywords, total_keywords) =
        keyword_sub_score(decisions, &normalized_content);
    let (requirement_score, met_requirements) =
        requirement_sub_score(requirements, evidence, &normalized_content);
    let (evidence_score, verified_claims) = evidence_sub_score(evidence);

    let overall = keyword_score as f64 * KEYWORD_WEIGHT
        + requirement_score as f64 * REQUIREMENT_WEIGHT
        + evidence_score as f64 * EVIDENCE_WEIGHT;
    let score = (overall.round() as i64).clamp(0, 100) as u32;

    ScoreBreakdown {
        score,
        breakdown: SubScores {
            keyword_score,
            requirement_score,
            evidence_score,
        },
        details: ScoreDetails {
            matched_keywords,
            total_keywords,
            met_requirements,
            total_requirements: requirements.len(),
            verified_claims,
            total_claims: evidence.len(),
        },
    }
}

/// Coverage of approved keywords in the content. Only `add` decisions count;
/// zero approved keywords means there is nothing to satisfy, so 100.
fn keyword_sub_score(decisions: &[KeywordDecision], normalized_content: &str) -> (u32, usize, usize) {
    let approved: Vec<&KeywordDecision> = decisions
        .iter()
        .filter(|d| d.decision == Decision::Add)
        .collect();

    if approved.is_empty() {
        return (100, 0, 0);
    }

    let matched = approved
        .iter()
        .filter(|d| keyword_present(&d.keyword, normalized_content))
        .count();

    (
        percentage(matched, approved.len()),
        matched,
        approved.len(),
    )
}

/// Literal word-boundary presence of a keyword in normalized content.
fn keyword_present(keyword: &str, normalized_content: &str) -> bool {
    let normalized_keyword = normalize(keyword);
    if normalized_keyword.is_empty() {
        return false;
    }
    let pattern = format!(r"\b{}\b", regex::escape(&normalized_keyword));
    regex::Regex::new(&pattern)
        .expect("escaped keyword is a valid pattern")
        .is_match(normalized_content)
}

/// Weighted requirement coverage. A requirement is met when some evidence
/// claim's normalized text contains or is contained by the requirement's
/// normalized text (regardless of the claim's active flag), or when any
/// requirement word longer than 3 characters appears in the content.
fn requirement_sub_score(
    requirements: &[JDRequirement],
    evidence: &[EvidenceClaim],
    normalized_content: &str,
) -> (u32, usize) {
    if requirements.is_empty() {
        return (100, 0);
    }

    let normalized_claims: Vec<String> = evidence
        .iter()
        .map(|c| normalize(&c.claim_text))
        .filter(|c| !c.is_empty())
        .collect();

    let mut total_weight = 0u32;
    let mut earned_weight = 0u32;
    let mut met = 0usize;

    for requirement in requirements {
        let weight = requirement.category.weight();
        total_weight += weight;

        let normalized_requirement = normalize(&requirement.text);
        if normalized_requirement.is_empty() {
            continue;
        }

        let evidence_hit = normalized_claims.iter().any(|claim| {
            claim.contains(&normalized_requirement) || normalized_requirement.contains(claim)
        });

        let content_hit = normalized_requirement
            .split_whitespace()
            .any(|word| word.len() > MIN_REQUIREMENT_WORD_LEN && normalized_content.contains(word));

        if evidence_hit || content_hit {
            earned_weight += weight;
            met += 1;
        }
    }

    let score = if total_weight == 0 {
        100
    } else {
        ((earned_weight as f64 / total_weight as f64) * 100.0).round() as u32
    };
    (score, met)
}

/// Confidence-weighted evidence score over active claims only.
fn evidence_sub_score(evidence: &[EvidenceClaim]) -> (u32, usize) {
    let active: Vec<&EvidenceClaim> = evidence.iter().filter(|c| c.is_active).collect();

    if active.is_empty() {
        return (EVIDENCE_NEUTRAL, 0);
    }

    let weight_sum: f64 = active.iter().map(|c| c.confidence.weight()).sum();
    let score = ((weight_sum / active.len() as f64) * 100.0).round() as u32;
    (score.min(100), active.len())
}

fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 100;
    }
    ((numerator as f64 / denominator as f64) * 100.0).round() as u32
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
