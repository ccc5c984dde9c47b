//! Keyword Extractor — classifies raw text into keyword categories using
//! static vocabularies and regex heuristics.
//!
//! Pure function of the input text and vocabulary. Terms keep their display
//! casing but are deduplicated and compared case-insensitively; a term
//! classified as a soft skill or education term in the same pass is never
//! also emitted as a hard skill.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::scoring::vocab::ExtractorVocab;

/// Hard-skill output is truncated to this many terms to bound output size.
const HARD_SKILL_CAP: usize = 50;
/// Title spans at or below this length after trimming are discarded as noise.
const TITLE_NOISE_LEN: usize = 3;

/// Capitalized-word heuristic for hard skills. Requires at least two
/// characters, so single capitals ("A", "I") never register.
static CAPITALIZED_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Z][A-Za-z0-9+#]+\b").unwrap());

/// Categorized terms extracted from one text blob. Created fresh per scoring
/// call; never persisted by the engine.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct KeywordSet {
    pub hard_skills: Vec<String>,
    pub soft_skills: Vec<String>,
    pub job_titles: Vec<String>,
    pub education: Vec<String>,
    /// Caller-supplied extras. Extraction never writes this category and the
    /// matcher's overall percentage excludes it.
    pub other: Vec<String>,
}

/// Extracts a categorized keyword set from raw text.
///
/// Empty or very short text (<2 chars) yields empty sets, not an error.
pub fn extract(text: &str, vocab: &ExtractorVocab) -> KeywordSet {
    if text.trim().chars().count() < 2 {
        return KeywordSet::default();
    }

    let lowered = text.to_lowercase();

    // Soft skills: case-insensitive substring match against the vocabulary.
    let mut soft_skills = Vec::new();
    let mut seen_soft = HashSet::new();
    for term in &vocab.soft_skills {
        if lowered.contains(&term.to_lowercase()) {
            push_unique(&mut soft_skills, &mut seen_soft, term);
        }
    }

    // Education: word-boundary match against degree/certification names.
    let mut education = Vec::new();
    let mut seen_education = HashSet::new();
    for term in &vocab.education_terms {
        if word_boundary_regex(term).is_match(text) {
            push_unique(&mut education, &mut seen_education, term);
        }
    }

    let job_titles = extract_job_titles(text, vocab);

    // Hard skills: capitalized-word heuristic plus the language / framework /
    // tool vocabularies, excluding anything already classified above.
    let excluded: HashSet<String> = soft_skills
        .iter()
        .chain(education.iter())
        .map(|t| t.to_lowercase())
        .collect();

    let mut hard_skills = Vec::new();
    let mut seen_hard = HashSet::new();

    for m in CAPITALIZED_RE.find_iter(text) {
        let term = m.as_str();
        if excluded.contains(&term.to_lowercase()) {
            continue;
        }
        push_unique(&mut hard_skills, &mut seen_hard, term);
    }

    for term in vocab
        .languages
        .iter()
        .chain(vocab.frameworks.iter())
        .chain(vocab.tools.iter())
    {
        if excluded.contains(&term.to_lowercase()) {
            continue;
        }
        if word_boundary_regex(term).is_match(text) {
            push_unique(&mut hard_skills, &mut seen_hard, term);
        }
    }

    hard_skills.truncate(HARD_SKILL_CAP);

    KeywordSet {
        hard_skills,
        soft_skills,
        job_titles,
        education,
        other: Vec::new(),
    }
}

/// Captures an optional word on either side of each title-indicator noun,
/// e.g. "Product Manager with". Spans that trim to 3 characters or fewer are
/// dropped as noise.
fn extract_job_titles(text: &str, vocab: &ExtractorVocab) -> Vec<String> {
    if vocab.title_indicators.is_empty() {
        return Vec::new();
    }

    let alternation = vocab
        .title_indicators
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    // [ \t] rather than \s: a title phrase never spans a line break.
    let pattern = format!(r"(?i)\b(?:[A-Za-z]+[ \t]+)?(?:{alternation})(?:[ \t]+[A-Za-z]+)?\b");
    let title_re = Regex::new(&pattern).expect("escaped title alternation is a valid pattern");

    let mut titles = Vec::new();
    let mut seen = HashSet::new();
    for m in title_re.find_iter(text) {
        let span = m.as_str().trim();
        if span.chars().count() <= TITLE_NOISE_LEN {
            continue;
        }
        push_unique(&mut titles, &mut seen, span);
    }
    titles
}

/// Builds a case-insensitive word-boundary pattern for a literal term.
///
/// `\b` only anchors against word characters, so terms that begin or end with
/// a symbol ("C++", ".NET") get the boundary on the word side only.
fn word_boundary_regex(term: &str) -> Regex {
    let escaped = regex::escape(term);
    let lead = if term.starts_with(is_word_char) { r"\b" } else { "" };
    let tail = if term.ends_with(is_word_char) { r"\b" } else { "" };
    Regex::new(&format!("(?i){lead}{escaped}{tail}")).expect("escaped term is a valid pattern")
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Appends `term` unless a case-insensitive duplicate was already recorded.
fn push_unique(list: &mut Vec<String>, seen: &mut HashSet<String>, term: &str) {
    if seen.insert(term.to_lowercase()) {
        list.push(term.to_string());
    }
}
