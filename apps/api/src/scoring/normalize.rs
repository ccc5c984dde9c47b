//! Text Normalizer — the single canonical form used by every matcher.
//!
//! Every comparison in the scoring engine runs over normalized text so that
//! punctuation and casing differences never change a score.

use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^\w\s]").unwrap());
static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Lowercases, replaces non-word/non-space characters with a space, collapses
/// whitespace runs to a single space, and trims.
///
/// Total and idempotent: `normalize(normalize(x)) == normalize(x)` for all input.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = NON_WORD_RE.replace_all(&lowered, " ");
    let collapsed = WHITESPACE_RE.replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
