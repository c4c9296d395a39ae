//! Tone transformation and originality scoring pipeline.
//!
//! Raw text flows normalizer -> transformer -> estimator; when an external
//! rewrite service is configured it takes the transformer and estimator's
//! place, and any failure there falls back to the local engine with the
//! result tagged accordingly. One canonical rule table per tone backs both
//! paths.

pub mod domain;
pub mod estimator;
pub mod gateway;
pub mod normalizer;
pub mod repository;
pub mod router;
pub mod service;
pub mod tones;
pub mod transformer;

#[cfg(test)]
mod tests;

pub use domain::{
    AssessmentSource, EntryId, HistoryEntry, OriginalityAssessment, OriginalitySpan,
    RewriteSource, RewriteStats, Tone, TransformationResult,
};
pub use gateway::{
    DetectedSection, DetectionGateway, DetectionReport, GatewayError, HttpDetectionClient,
    HttpRewriteClient, OfflineDetectionGateway, OfflineRewriteGateway, ParsedRewrite,
    RewriteGateway, RewriteOutcome,
};
pub use repository::{HistoryEntryView, HistoryError, HistoryRepository};
pub use router::humanize_router;
pub use service::{
    HumanizeOutcome, HumanizeRequest, HumanizeService, HumanizeServiceError, OriginalityCheck,
};
pub use transformer::ToneTransformer;
