use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The five supported rewriting styles. Each selects its own replacement
/// table and, for some tones, a structural edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Formal,
    Friendly,
    Concise,
    Persuasive,
    Creative,
}

impl Tone {
    pub const ALL: [Tone; 5] = [
        Tone::Formal,
        Tone::Friendly,
        Tone::Concise,
        Tone::Persuasive,
        Tone::Creative,
    ];

    /// Parse the wire label. Unknown labels return `None` so callers can
    /// degrade to the identity transform instead of failing.
    pub fn parse(label: &str) -> Option<Self> {
        match label.trim().to_ascii_lowercase().as_str() {
            "formal" => Some(Tone::Formal),
            "friendly" => Some(Tone::Friendly),
            "concise" => Some(Tone::Concise),
            "persuasive" => Some(Tone::Persuasive),
            "creative" => Some(Tone::Creative),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Concise => "concise",
            Tone::Persuasive => "persuasive",
            Tone::Creative => "creative",
        }
    }

    /// Short description shown by tone pickers.
    pub const fn blurb(self) -> &'static str {
        match self {
            Tone::Formal => "Professional phrasing suitable for business communication",
            Tone::Friendly => "Warm, casual phrasing as if talking to a friend",
            Tone::Concise => "Brief and to the point, trimming verbose constructions",
            Tone::Persuasive => "Convincing language with emphatic punctuation",
            Tone::Creative => "Vivid, imaginative word choices and imagery",
        }
    }
}

/// Which component produced a rewrite: the local engine or an upstream
/// rewrite service that bypassed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RewriteSource {
    Engine,
    External,
}

impl RewriteSource {
    pub const fn label(self) -> &'static str {
        match self {
            RewriteSource::Engine => "engine",
            RewriteSource::External => "external",
        }
    }
}

/// Immutable bundle produced once per humanize request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransformationResult {
    pub original_text: String,
    pub humanized_text: String,
    pub tone: String,
    pub source: RewriteSource,
    pub originality_level: Option<u8>,
}

/// A flagged substring of rewritten text, with byte offsets into that text.
/// Offsets always satisfy `start < end <= text.len()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalitySpan {
    pub text: String,
    pub confidence: f64,
    pub start: usize,
    pub end: usize,
}

/// Originality verdict: level 1 (most original) through 10, optional flagged
/// spans, and the raw detector score when one was available.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OriginalityAssessment {
    pub level: u8,
    pub spans: Vec<OriginalitySpan>,
    pub raw_score: Option<f64>,
}

/// Which path produced an originality assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssessmentSource {
    Heuristic,
    Detector,
}

impl AssessmentSource {
    pub const fn label(self) -> &'static str {
        match self {
            AssessmentSource::Heuristic => "heuristic",
            AssessmentSource::Detector => "detector",
        }
    }
}

/// Identifier wrapper for stored history entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub String);

/// One persisted humanization, append-only apart from favorite-toggle and
/// delete.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: EntryId,
    pub original_text: String,
    pub humanized_text: String,
    pub tone: String,
    pub recorded_at: DateTime<Utc>,
    pub is_favorite: bool,
    pub originality_level: Option<u8>,
    pub source: RewriteSource,
}

/// Word counts and overlap between an original and its rewrite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RewriteStats {
    pub original_words: usize,
    pub humanized_words: usize,
    pub similarity: f64,
}

impl RewriteStats {
    /// Jaccard overlap over lowercase words longer than three characters,
    /// alongside plain word counts.
    pub fn compare(original: &str, humanized: &str) -> Self {
        let original_set = significant_words(original);
        let humanized_set = significant_words(humanized);

        let intersection = original_set.intersection(&humanized_set).count();
        let union = original_set.union(&humanized_set).count();
        let similarity = if union == 0 {
            0.0
        } else {
            intersection as f64 / union as f64
        };

        Self {
            original_words: word_count(original),
            humanized_words: word_count(humanized),
            similarity,
        }
    }
}

fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

fn significant_words(text: &str) -> std::collections::HashSet<String> {
    text.to_lowercase()
        .split_whitespace()
        .filter(|word| word.len() > 3)
        .map(str::to_string)
        .collect()
}
