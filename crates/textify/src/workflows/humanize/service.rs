use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use tracing::warn;

use super::domain::{
    AssessmentSource, EntryId, HistoryEntry, OriginalityAssessment, RewriteSource, RewriteStats,
    Tone, TransformationResult,
};
use super::estimator;
use super::gateway::{DetectionGateway, RewriteGateway};
use super::normalizer;
use super::repository::{HistoryError, HistoryRepository};
use super::transformer::ToneTransformer;

/// Service composing the normalizer, external gateways, local engine, and
/// history repository. Gateway failures never surface to callers; they
/// degrade to the local pipeline and tag the result so the caller can tell
/// the user.
pub struct HumanizeService<R> {
    transformer: ToneTransformer,
    rewriter: Box<dyn RewriteGateway>,
    detector: Box<dyn DetectionGateway>,
    repository: Arc<R>,
}

static ENTRY_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_entry_id() -> EntryId {
    let id = ENTRY_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    EntryId(format!("entry-{id:06}"))
}

/// Incoming humanize request: raw text plus the wire tone label.
#[derive(Debug, Clone)]
pub struct HumanizeRequest {
    pub text: String,
    pub tone: String,
}

/// Result bundle handed back per request.
#[derive(Debug, Clone)]
pub struct HumanizeOutcome {
    pub entry: HistoryEntry,
    pub result: TransformationResult,
    pub stats: RewriteStats,
}

/// Originality verdict plus which path produced it.
#[derive(Debug, Clone)]
pub struct OriginalityCheck {
    pub source: AssessmentSource,
    pub assessment: OriginalityAssessment,
}

/// Error raised by the humanize service. The pipeline itself is total; only
/// intake validation and the history store can fail.
#[derive(Debug, thiserror::Error)]
pub enum HumanizeServiceError {
    #[error("text is required")]
    EmptyText,
    #[error(transparent)]
    History(#[from] HistoryError),
}

impl<R> HumanizeService<R>
where
    R: HistoryRepository + 'static,
{
    pub fn new(
        repository: Arc<R>,
        rewriter: Box<dyn RewriteGateway>,
        detector: Box<dyn DetectionGateway>,
    ) -> Self {
        Self::with_transformer(ToneTransformer::from_entropy(), repository, rewriter, detector)
    }

    /// Build with an explicit transformer, letting callers seed the candidate
    /// selection for reproducible output.
    pub fn with_transformer(
        transformer: ToneTransformer,
        repository: Arc<R>,
        rewriter: Box<dyn RewriteGateway>,
        detector: Box<dyn DetectionGateway>,
    ) -> Self {
        Self {
            transformer,
            rewriter,
            detector,
            repository,
        }
    }

    /// Humanize one text: normalize, rewrite through the external service or
    /// the local engine, score, and record the entry.
    pub fn humanize(
        &self,
        request: HumanizeRequest,
    ) -> Result<HumanizeOutcome, HumanizeServiceError> {
        if request.text.trim().is_empty() {
            return Err(HumanizeServiceError::EmptyText);
        }

        let tone = Tone::parse(&request.tone);
        if tone.is_none() {
            warn!(tone = %request.tone, "unknown tone label, applying identity transform");
        }

        let normalized = normalizer::normalize(&request.text);

        let (humanized_text, originality_level, source) =
            match self.rewriter.rewrite(&normalized, tone) {
                Ok(outcome) => {
                    let level = outcome
                        .originality_level
                        .unwrap_or_else(|| estimator::estimate(&outcome.humanized_text).level);
                    (outcome.humanized_text, level, RewriteSource::External)
                }
                Err(err) => {
                    warn!(error = %err, "rewrite service unavailable, using local engine");
                    let rewritten = match tone {
                        Some(tone) => self.transformer.transform(&normalized, tone),
                        None => normalized.clone(),
                    };
                    let level = estimator::estimate(&rewritten).level;
                    (rewritten, level, RewriteSource::Engine)
                }
            };

        let tone_label = tone
            .map(|tone| tone.label().to_string())
            .unwrap_or_else(|| request.tone.clone());
        let stats = RewriteStats::compare(&request.text, &humanized_text);

        let entry = HistoryEntry {
            id: next_entry_id(),
            original_text: request.text.clone(),
            humanized_text: humanized_text.clone(),
            tone: tone_label.clone(),
            recorded_at: Utc::now(),
            is_favorite: false,
            originality_level: Some(originality_level),
            source,
        };
        let stored = self.repository.insert(entry)?;

        let result = TransformationResult {
            original_text: request.text,
            humanized_text,
            tone: tone_label,
            source,
            originality_level: Some(originality_level),
        };

        Ok(HumanizeOutcome {
            entry: stored,
            result,
            stats,
        })
    }

    /// Detailed originality check. The external detector supplies spans; when
    /// it is unreachable the local heuristic answers with the same shape.
    pub fn check_originality(&self, text: &str) -> OriginalityCheck {
        match self.detector.detect(text) {
            Ok(report) => OriginalityCheck {
                source: AssessmentSource::Detector,
                assessment: estimator::assessment_from_report(text, &report),
            },
            Err(err) => {
                warn!(error = %err, "detection service unavailable, using local heuristic");
                OriginalityCheck {
                    source: AssessmentSource::Heuristic,
                    assessment: estimator::estimate(text),
                }
            }
        }
    }

    /// History entries, newest first.
    pub fn history(&self) -> Result<Vec<HistoryEntry>, HumanizeServiceError> {
        Ok(self.repository.list()?)
    }

    pub fn toggle_favorite(&self, id: &EntryId) -> Result<HistoryEntry, HumanizeServiceError> {
        Ok(self.repository.toggle_favorite(id)?)
    }

    pub fn delete_entry(&self, id: &EntryId) -> Result<(), HumanizeServiceError> {
        Ok(self.repository.delete(id)?)
    }
}
