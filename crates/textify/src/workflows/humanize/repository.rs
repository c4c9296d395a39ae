use serde::Serialize;

use super::domain::{EntryId, HistoryEntry};

/// Storage abstraction for the humanization history so the service module can
/// be exercised in isolation. Entries are append-only apart from the favorite
/// toggle and delete.
pub trait HistoryRepository: Send + Sync {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryEntry, HistoryError>;
    fn fetch(&self, id: &EntryId) -> Result<Option<HistoryEntry>, HistoryError>;
    /// Entries ordered newest first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn toggle_favorite(&self, id: &EntryId) -> Result<HistoryEntry, HistoryError>;
    fn delete(&self, id: &EntryId) -> Result<(), HistoryError>;
}

/// Error enumeration for history storage failures.
#[derive(Debug, thiserror::Error)]
pub enum HistoryError {
    #[error("entry already exists")]
    Conflict,
    #[error("entry not found")]
    NotFound,
    #[error("history unavailable: {0}")]
    Unavailable(String),
}

/// Wire representation of a stored entry, matching the shape persisted by the
/// surrounding application.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntryView {
    pub id: String,
    pub original_text: String,
    pub humanized_text: String,
    pub tone: String,
    pub timestamp: String,
    pub is_favorite: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plagiarism_level: Option<u8>,
    pub source: &'static str,
}

impl HistoryEntry {
    pub fn view(&self) -> HistoryEntryView {
        HistoryEntryView {
            id: self.id.0.clone(),
            original_text: self.original_text.clone(),
            humanized_text: self.humanized_text.clone(),
            tone: self.tone.clone(),
            timestamp: self.recorded_at.to_rfc3339(),
            is_favorite: self.is_favorite,
            plagiarism_level: self.originality_level,
            source: self.source.label(),
        }
    }
}
