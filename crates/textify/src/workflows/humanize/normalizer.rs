//! Light preprocessing applied before any tone transform: filler removal,
//! trivial passive simplification, and contraction expansion. Every step is
//! total; text with no matching pattern passes through unchanged.

use once_cell::sync::Lazy;
use regex::Regex;

static FILLER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)basically|literally|actually|in my opinion|as a matter of fact")
        .expect("valid filler pattern")
});

static IS_BEING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)is being").expect("valid passive pattern"));

static WAS_BEING_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)was being").expect("valid passive pattern"));

static CANT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)can't").expect("valid contraction pattern"));

static WONT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)won't").expect("valid contraction pattern"));

static DONT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)don't").expect("valid contraction pattern"));

/// Normalize raw input. Order matters only in that contraction expansion must
/// not be undone by the earlier passes: fillers, then passives, then
/// contractions, then a final trim.
pub fn normalize(text: &str) -> String {
    let stripped = FILLER_RE.replace_all(text, "");

    let simplified = IS_BEING_RE.replace_all(&stripped, "is");
    let simplified = WAS_BEING_RE.replace_all(&simplified, "was");

    let expanded = CANT_RE.replace_all(&simplified, "cannot");
    let expanded = WONT_RE.replace_all(&expanded, "will not");
    let expanded = DONT_RE.replace_all(&expanded, "do not");

    expanded.trim().to_string()
}
