use std::sync::{Arc, Mutex};

use super::super::domain::{EntryId, HistoryEntry, Tone};
use super::super::gateway::{
    DetectionGateway, DetectionReport, GatewayError, RewriteGateway, RewriteOutcome,
};
use super::super::repository::{HistoryError, HistoryRepository};
use super::super::service::HumanizeService;
use super::super::transformer::ToneTransformer;

/// In-memory history keeping insertion order so `list` can return newest
/// first without timestamps mattering.
#[derive(Default, Clone)]
pub(super) struct MemoryHistory {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl HistoryRepository for MemoryHistory {
    fn insert(&self, entry: HistoryEntry) -> Result<HistoryEntry, HistoryError> {
        let mut guard = self.entries.lock().expect("history mutex poisoned");
        if guard.iter().any(|existing| existing.id == entry.id) {
            return Err(HistoryError::Conflict);
        }
        guard.insert(0, entry.clone());
        Ok(entry)
    }

    fn fetch(&self, id: &EntryId) -> Result<Option<HistoryEntry>, HistoryError> {
        let guard = self.entries.lock().expect("history mutex poisoned");
        Ok(guard.iter().find(|entry| &entry.id == id).cloned())
    }

    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let guard = self.entries.lock().expect("history mutex poisoned");
        Ok(guard.clone())
    }

    fn toggle_favorite(&self, id: &EntryId) -> Result<HistoryEntry, HistoryError> {
        let mut guard = self.entries.lock().expect("history mutex poisoned");
        let entry = guard
            .iter_mut()
            .find(|entry| &entry.id == id)
            .ok_or(HistoryError::NotFound)?;
        entry.is_favorite = !entry.is_favorite;
        Ok(entry.clone())
    }

    fn delete(&self, id: &EntryId) -> Result<(), HistoryError> {
        let mut guard = self.entries.lock().expect("history mutex poisoned");
        let before = guard.len();
        guard.retain(|entry| &entry.id != id);
        if guard.len() == before {
            return Err(HistoryError::NotFound);
        }
        Ok(())
    }
}

/// Rewrite gateway that always fails, forcing the local engine.
pub(super) struct DownRewrite;

impl RewriteGateway for DownRewrite {
    fn rewrite(&self, _text: &str, _tone: Option<Tone>) -> Result<RewriteOutcome, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }
}

/// Rewrite gateway returning a canned upstream answer.
pub(super) struct CannedRewrite {
    pub(super) text: &'static str,
    pub(super) level: Option<u8>,
}

impl RewriteGateway for CannedRewrite {
    fn rewrite(&self, _text: &str, _tone: Option<Tone>) -> Result<RewriteOutcome, GatewayError> {
        Ok(RewriteOutcome {
            humanized_text: self.text.to_string(),
            originality_level: self.level,
        })
    }
}

/// Detection gateway that always fails, forcing the heuristic.
pub(super) struct DownDetection;

impl DetectionGateway for DownDetection {
    fn detect(&self, _text: &str) -> Result<DetectionReport, GatewayError> {
        Err(GatewayError::Transport("connection refused".to_string()))
    }
}

/// Detection gateway returning a canned report.
pub(super) struct CannedDetection {
    pub(super) report: DetectionReport,
}

impl DetectionGateway for CannedDetection {
    fn detect(&self, _text: &str) -> Result<DetectionReport, GatewayError> {
        Ok(self.report.clone())
    }
}

pub(super) fn offline_service(seed: u64) -> (HumanizeService<MemoryHistory>, Arc<MemoryHistory>) {
    let repository = Arc::new(MemoryHistory::default());
    let service = HumanizeService::with_transformer(
        ToneTransformer::seeded(seed),
        repository.clone(),
        Box::new(DownRewrite),
        Box::new(DownDetection),
    );
    (service, repository)
}
