//! Originality heuristics. The local estimator is the fallback scorer when no
//! external detector is reachable; it counts academic-marker phrases and
//! sentence length, nothing more. The thresholds intentionally mirror the
//! behavior callers already depend on rather than any real detection model.

use once_cell::sync::Lazy;
use regex::Regex;

use super::domain::{OriginalityAssessment, OriginalitySpan};
use super::gateway::DetectionReport;

/// Fixed marker list; occurrences are counted case-insensitively over the
/// whole text.
const ACADEMIC_MARKERS: &[&str] = &[
    "according to",
    "research shows",
    "studies indicate",
    "therefore",
    "thus",
    "hence",
    "consequently",
    "furthermore",
    "moreover",
    "in conclusion",
];

/// Marker contribution is worth half a level each, capped at three levels.
const MARKER_WEIGHT: f64 = 0.5;
const MARKER_CAP: f64 = 3.0;

/// Heuristic levels stay within [1, 9]; only a real detector may report 10.
const HEURISTIC_MIN_LEVEL: u8 = 1;
const HEURISTIC_MAX_LEVEL: u8 = 9;
const DETECTOR_MAX_LEVEL: u8 = 10;

/// Sections below this confidence are not worth flagging.
const SPAN_CONFIDENCE_FLOOR: f64 = 0.5;

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    let alternation = ACADEMIC_MARKERS.join("|");
    Regex::new(&format!(r"(?i)\b(?:{alternation})\b")).expect("valid marker pattern")
});

/// Score text with the local heuristic. Never fails; empty input maps to the
/// most-original level with no spans. Spans require the external detector's
/// sentence breakdown, so this path always returns an empty list.
pub fn estimate(text: &str) -> OriginalityAssessment {
    if text.trim().is_empty() {
        return OriginalityAssessment {
            level: HEURISTIC_MIN_LEVEL,
            spans: Vec::new(),
            raw_score: None,
        };
    }

    let sentences: Vec<&str> = text
        .split(['.', '!', '?'])
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .collect();

    let marker_count = MARKER_RE.find_iter(text).count();

    let average_sentence_words = if sentences.is_empty() {
        0.0
    } else {
        let total_words: usize = sentences
            .iter()
            .map(|sentence| sentence.split_whitespace().count())
            .sum();
        total_words as f64 / sentences.len() as f64
    };

    let length_bonus = if average_sentence_words > 25.0 {
        3.0
    } else if average_sentence_words > 20.0 {
        2.0
    } else if average_sentence_words > 15.0 {
        1.0
    } else {
        0.0
    };

    let raw_level =
        1.0 + f64::min(MARKER_WEIGHT * marker_count as f64, MARKER_CAP) + length_bonus;
    let level = (raw_level.round() as i64).clamp(
        i64::from(HEURISTIC_MIN_LEVEL),
        i64::from(HEURISTIC_MAX_LEVEL),
    ) as u8;

    OriginalityAssessment {
        level,
        spans: Vec::new(),
        raw_score: None,
    }
}

/// Convert an external detector report into the shared assessment shape.
/// The detector's continuous score in [0, 1] maps onto the 1-10 scale, and
/// confident sentence sections become spans sorted by start offset. Sections
/// with offsets that do not fit `text` are dropped rather than propagated.
pub fn assessment_from_report(text: &str, report: &DetectionReport) -> OriginalityAssessment {
    let raw = report.original_score.clamp(0.0, 1.0);
    let level = ((raw * 10.0).round() as i64).clamp(
        i64::from(HEURISTIC_MIN_LEVEL),
        i64::from(DETECTOR_MAX_LEVEL),
    ) as u8;

    let mut spans: Vec<OriginalitySpan> = report
        .sections
        .iter()
        .filter(|section| section.score > SPAN_CONFIDENCE_FLOOR)
        .filter(|section| section.start_index < section.end_index)
        .filter(|section| section.end_index <= text.len())
        .map(|section| OriginalitySpan {
            text: section.text.clone(),
            confidence: section.score.clamp(0.0, 1.0),
            start: section.start_index,
            end: section.end_index,
        })
        .collect();
    spans.sort_by_key(|span| span.start);

    OriginalityAssessment {
        level,
        spans,
        raw_score: Some(raw),
    }
}
