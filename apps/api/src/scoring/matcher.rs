//! Keyword Matcher — compares a JD keyword set against a resume keyword set,
//! category by category.
//!
//! Matching is deliberately loose: a JD term counts as found when it is a
//! case-insensitive substring of some resume term or vice versa, tolerating
//! phrasing differences like "Python" vs "Python 3". Tightening this is a
//! product decision, not a bug fix.

use serde::{Deserialize, Serialize};

use crate::scoring::extractor::KeywordSet;

/// Found/missing terms and a rounded percentage for one category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchResult {
    pub found: Vec<String>,
    pub missing: Vec<String>,
    /// round(found / (found + missing) * 100); 100 when the JD category is
    /// empty — nothing required means nothing missing.
    pub match_percentage: u32,
}

/// Per-category results plus the term-count-weighted overall.
/// Job titles and `other` are intentionally excluded from `overall`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeywordMatchReport {
    pub hard_skills: KeywordMatchResult,
    pub soft_skills: KeywordMatchResult,
    pub education: KeywordMatchResult,
    pub overall: KeywordMatchResult,
}

/// Matches JD keywords against resume keywords.
pub fn match_keywords(jd: &KeywordSet, resume: &KeywordSet) -> KeywordMatchReport {
    let hard_skills = match_category(&jd.hard_skills, &resume.hard_skills);
    let soft_skills = match_category(&jd.soft_skills, &resume.soft_skills);
    let education = match_category(&jd.education, &resume.education);

    // Overall is weighted by JD term count across the included categories,
    // not an average of the category percentages.
    let mut found = Vec::new();
    let mut missing = Vec::new();
    for result in [&hard_skills, &soft_skills, &education] {
        found.extend(result.found.iter().cloned());
        missing.extend(result.missing.iter().cloned());
    }
    let match_percentage = percentage(found.len(), found.len() + missing.len());

    KeywordMatchReport {
        hard_skills,
        soft_skills,
        education,
        overall: KeywordMatchResult {
            found,
            missing,
            match_percentage,
        },
    }
}

fn match_category(jd_terms: &[String], resume_terms: &[String]) -> KeywordMatchResult {
    let mut found = Vec::new();
    let mut missing = Vec::new();

    for jd_term in jd_terms {
        let jd_lower = jd_term.to_lowercase();
        let hit = resume_terms.iter().any(|resume_term| {
            let resume_lower = resume_term.to_lowercase();
            resume_lower.contains(&jd_lower) || jd_lower.contains(&resume_lower)
        });
        if hit {
            found.push(jd_term.clone());
        } else {
            missing.push(jd_term.clone());
        }
    }

    let match_percentage = percentage(found.len(), jd_terms.len());
    KeywordMatchResult {
        found,
        missing,
        match_percentage,
    }
}

/// Rounded percentage with the vacuous full-match policy for an empty denominator.
fn percentage(numerator: usize, denominator: usize) -> u32 {
    if denominator == 0 {
        return 100;
    }
    ((numerator as f64 / denominator as f64) * 100.0).round() as u32
}
