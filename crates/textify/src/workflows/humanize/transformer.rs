//! Table-driven tone transformer. Runs each profile rule in order over the
//! cumulative text, drawing an independent uniform candidate per match, then
//! applies the tone's structural edit. Total: unknown tones and empty input
//! both degrade to the identity transform.

use std::sync::Mutex;

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use regex::{Captures, Regex};

use super::domain::Tone;
use super::tones::{profile_for, StructuralEdit, ToneProfile};

/// Longest sentence, in words, the concise edit will keep unshortened.
const CONCISE_WORD_CAP: usize = 8;
/// Fraction of an over-long sentence retained before the cap applies.
const CONCISE_KEEP_RATIO: f64 = 0.7;

static TERMINAL_PERIOD_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(\s|$)").expect("valid terminal period pattern"));

pub struct ToneTransformer {
    rng: Mutex<StdRng>,
}

impl ToneTransformer {
    /// Process-wide transformer drawing from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Deterministic transformer for reproducible runs and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Rewrite `text` in the given tone.
    pub fn transform(&self, text: &str, tone: Tone) -> String {
        if text.is_empty() {
            return String::new();
        }

        let profile = profile_for(tone);
        let substituted = self.apply_rules(text, profile);
        match profile.structure() {
            StructuralEdit::None => substituted,
            StructuralEdit::CapSentences => cap_sentences(&substituted),
            StructuralEdit::ExclaimTerminals => exclaim_terminals(&substituted),
        }
    }

    /// Rewrite using a wire label; unrecognized labels pass text through
    /// unchanged. Callers log the degradation, not this component.
    pub fn transform_labeled(&self, text: &str, tone_label: &str) -> String {
        match Tone::parse(tone_label) {
            Some(tone) => self.transform(text, tone),
            None => text.to_string(),
        }
    }

    fn apply_rules(&self, text: &str, profile: &ToneProfile) -> String {
        let mut rng = self.rng.lock().expect("transformer rng poisoned");
        let mut current = text.to_string();
        for rule in profile.rules() {
            let candidates = rule.candidates();
            current = rule
                .pattern()
                .replace_all(&current, |_: &Captures<'_>| {
                    candidates[rng.gen_range(0..candidates.len())].to_string()
                })
                .into_owned();
        }
        current
    }
}

/// Concise structural edit: sentences over the word cap keep their first
/// `min(cap, floor(words * 0.7))` words; every surviving sentence is
/// re-terminated with a period and joined by single spaces.
fn cap_sentences(text: &str) -> String {
    text.split(['.', '\n'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .map(|sentence| {
            let words: Vec<&str> = sentence.split_whitespace().collect();
            if words.len() > CONCISE_WORD_CAP {
                let keep = usize::min(
                    CONCISE_WORD_CAP,
                    (words.len() as f64 * CONCISE_KEEP_RATIO).floor() as usize,
                );
                format!("{}.", words[..keep].join(" "))
            } else {
                format!("{}.", sentence)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Persuasive structural edit: sentence-terminal periods become exclamation
/// marks. Periods inside tokens (decimals, abbreviations) are left alone.
fn exclaim_terminals(text: &str) -> String {
    TERMINAL_PERIOD_RE.replace_all(text, "!$1").into_owned()
}
