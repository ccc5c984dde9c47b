//! AI-Pattern / Human-Voice Heuristic — a light signal against templated,
//! AI-sounding phrasing.
//!
//! Pure scoring function: no network call, no model. Cliché phrases subtract,
//! concrete quantified language adds, and the result is clamped to [0, 100].

use once_cell::sync::Lazy;
use regex::Regex;

/// Texts shorter than this carry too little signal to judge; they
/// short-circuit to a neutral 50.
const MIN_SIGNAL_LEN: usize = 50;

const BASE_SCORE: i64 = 100;
const CLICHE_PENALTY: i64 = 5;
const SPECIFICITY_BONUS: i64 = 3;

/// Phrases that read as AI boilerplate. Each occurrence costs 5 points.
static AI_CLICHE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"(?i)\bleverag(?:e|ed|es|ing)\b",
        r"(?i)\bsynerg(?:y|ies|istic)\b",
        r"(?i)\bseamless(?:ly)?\b",
        r"(?i)\bcutting[- ]edge\b",
        r"(?i)\bresults[- ]driven\b",
        r"(?i)\bpassionate about\b",
        r"(?i)\bproven track record\b",
        r"(?i)\bdynamic environment\b",
        r"(?i)\bthink(?:ing)? outside the box\b",
        r"(?i)\bdetail[- ]oriented\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Concrete, quantified language. Each occurrence earns 3 points.
static SPECIFICITY_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        // Dollar amounts: $2M, $450,000, $3.5k
        r"\$\d[\d,]*(?:\.\d+)?\s*[kKmMbB]?",
        // Percentages: 40%, 3.5%
        r"\d+(?:\.\d+)?%",
        // Team sizes: "team of 12"
        r"(?i)\bteam of \d+\b",
        // Quantified outcomes: "reduced latency by 30", "grew revenue to 5"
        r"(?i)\b(?:increased|decreased|reduced|grew|improved|saved|cut|boosted)\b[^.]{0,40}?\d",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Scores how "non-templated" a piece of text sounds, 0–100.
///
/// Deterministic and total; higher is more human.
pub fn human_voice_score(content: &str) -> u32 {
    if content.chars().count() < MIN_SIGNAL_LEN {
        return 50;
    }

    let mut score = BASE_SCORE;

    for pattern in AI_CLICHE_PATTERNS.iter() {
        score -= CLICHE_PENALTY * pattern.find_iter(content).count() as i64;
    }

    for pattern in SPECIFICITY_PATTERNS.iter() {
        score += SPECIFICITY_BONUS * pattern.find_iter(content).count() as i64;
    }

    score.clamp(0, 100) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_text_is_neutral() {
        assert_eq!(human_voice_score(""), 50);
        assert_eq!(human_voice_score("Led a team."), 50);
    }

    #[test]
    fn test_plain_text_keeps_base_score() {
        let content = "Maintained the billing service and reviewed pull requests weekly.";
        assert_eq!(human_voice_score(content), 100);
    }

    #[test]
    fn test_cliches_subtract_five_each() {
        let content =
            "Leveraged synergy to deliver seamless results for stakeholders across the org.";
        // leverage + synergy + seamless = 3 clichés
        assert_eq!(human_voice_score(content), 85);
    }

    #[test]
    fn test_repeated_cliche_counts_per_occurrence() {
        let content =
            "Leveraged data pipelines and leveraged dashboards while leveraging goodwill daily.";
        assert_eq!(human_voice_score(content), 85);
    }

    #[test]
    fn test_specificity_adds_three_each_with_clamp_at_100() {
        let content =
            "Reduced infrastructure spend by 40% saving $2M annually with a team of 12 engineers.";
        // 40% + $2M + team of 12 + "Reduced ... 40" = 4 bonuses, clamped at 100
        assert_eq!(human_voice_score(content), 100);
    }

    #[test]
    fn test_mixed_text_balances_penalties_and_bonuses() {
        let content =
            "Leveraged cutting-edge tooling in a dynamic environment to cut costs by 15% overall.";
        // 3 clichés (-15), percent + quantified outcome (+6) → 91
        assert_eq!(human_voice_score(content), 91);
    }

    #[test]
    fn test_score_clamped_at_zero() {
        let cliche = "Leveraged synergy for seamless cutting-edge results-driven work. ";
        let content = cliche.repeat(10);
        assert_eq!(human_voice_score(&content), 0);
    }

    #[test]
    fn test_deterministic() {
        let content = "Grew adoption by 300% while mentoring a team of 4 analysts every quarter.";
        assert_eq!(human_voice_score(content), human_voice_score(content));
    }
}
