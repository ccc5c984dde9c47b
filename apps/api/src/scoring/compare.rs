//! Version/Recommendation Comparator — picks between an ideal (JD-first) and
//! a personalized (history-first) scored variant.
//!
//! Pure, deterministic, total. The thresholds are fixed constants and must be
//! preserved exactly for behavioral compatibility.

use serde::{Deserialize, Serialize};

use crate::scoring::quality::QualityScoreResult;

/// Below this resume strength the source data is too thin to trust
/// personalization, so the ideal version wins regardless of scores.
pub const MIN_STRENGTH_FOR_PERSONALIZATION: u32 = 40;

/// A variant must outscore the other by more than this to be recommended
/// outright; anything inside the band is a blend.
pub const RECOMMENDATION_DELTA: i64 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Recommendation {
    Ideal,
    Personalized,
    Blend,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VersionComparison {
    pub recommendation: Recommendation,
    pub reason: String,
    /// personalized.overall_score - ideal.overall_score
    pub score_difference: i64,
}

/// Compares two scored variants and recommends which to present.
pub fn compare_versions(
    ideal: &QualityScoreResult,
    personalized: &QualityScoreResult,
    resume_strength: u32,
) -> VersionComparison {
    let score_difference = personalized.overall_score as i64 - ideal.overall_score as i64;

    if resume_strength < MIN_STRENGTH_FOR_PERSONALIZATION {
        return VersionComparison {
            recommendation: Recommendation::Ideal,
            reason: format!(
                "Resume strength {resume_strength} is below {MIN_STRENGTH_FOR_PERSONALIZATION}; \
                 there is not enough source material to trust the personalized version."
            ),
            score_difference,
        };
    }

    let (recommendation, reason) = if score_difference > RECOMMENDATION_DELTA {
        (
            Recommendation::Personalized,
            format!(
                "The personalized version scores {score_difference} points higher; \
                 your own material outperforms the template."
            ),
        )
    } else if score_difference < -RECOMMENDATION_DELTA {
        (
            Recommendation::Ideal,
            format!(
                "The ideal version scores {} points higher; the JD-shaped draft is stronger here.",
                -score_difference
            ),
        )
    } else {
        (
            Recommendation::Blend,
            "The versions score within 10 points of each other; blend the strongest \
             bullets of both."
                .to_string(),
        )
    };

    VersionComparison {
        recommendation,
        reason,
        score_difference,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::quality::KeywordCoverage;

    fn scored(overall_score: u32) -> QualityScoreResult {
        QualityScoreResult {
            overall_score,
            ats_match_percentage: overall_score,
            requirements_coverage: overall_score,
            competitive_strength: 3,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            keywords: KeywordCoverage {
                matched: Vec::new(),
                missing: Vec::new(),
            },
        }
    }

    #[test]
    fn test_low_strength_overrides_scores() {
        let result = compare_versions(&scored(50), &scored(80), 30);
        assert_eq!(result.recommendation, Recommendation::Ideal);
        assert_eq!(result.score_difference, 30);
    }

    #[test]
    fn test_personalized_wins_above_delta() {
        let result = compare_versions(&scored(50), &scored(65), 70);
        assert_eq!(result.recommendation, Recommendation::Personalized);
        assert_eq!(result.score_difference, 15);
    }

    #[test]
    fn test_ideal_wins_below_negative_delta() {
        let result = compare_versions(&scored(70), &scored(55), 70);
        assert_eq!(result.recommendation, Recommendation::Ideal);
        assert_eq!(result.score_difference, -15);
    }

    #[test]
    fn test_blend_within_band() {
        let result = compare_versions(&scored(60), &scored(65), 70);
        assert_eq!(result.recommendation, Recommendation::Blend);
        assert_eq!(result.score_difference, 5);
    }

    #[test]
    fn test_exact_delta_is_still_blend() {
        // The band is strict: a difference of exactly ±10 blends.
        let result = compare_versions(&scored(50), &scored(60), 70);
        assert_eq!(result.recommendation, Recommendation::Blend);

        let result = compare_versions(&scored(60), &scored(50), 70);
        assert_eq!(result.recommendation, Recommendation::Blend);
    }

    #[test]
    fn test_strength_boundary_at_40_allows_personalization() {
        let result = compare_versions(&scored(50), &scored(65), 40);
        assert_eq!(
            result.recommendation,
            Recommendation::Personalized,
            "strength 40 is not below the threshold"
        );
    }

    #[test]
    fn test_reason_is_populated() {
        for (ideal, personalized, strength) in [(50, 80, 30), (50, 65, 70), (70, 55, 70), (60, 65, 70)] {
            let result = compare_versions(&scored(ideal), &scored(personalized), strength);
            assert!(!result.reason.is_empty());
        }
    }
}
