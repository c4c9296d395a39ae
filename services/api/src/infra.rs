use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use textify::config::GatewayConfig;
use textify::workflows::humanize::{
    DetectionGateway, EntryId, HistoryEntry, HistoryError, HistoryRepository, HttpDetectionClient,
    HttpRewriteClient, OfflineDetectionGateway, OfflineRewriteGateway, RewriteGateway,
};
use tracing::warn;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// In-memory history. Newest entries sit at the front so `list` needs no
/// sorting.
#[derive(Default, Clone)]
pub(crate) struct InMemoryHistoryRepository {
    entries: Arc<Mutex<Vec<HistoryEntry>>>,
}

impl HistoryRepository for InMemoryHistoryRepository {
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

/// Build the gateway pair from config. Missing or unusable endpoints fall
/// back to the offline implementations so the service keeps working on the
/// local engine alone.
pub(crate) fn build_gateways(
    config: &GatewayConfig,
) -> (Box<dyn RewriteGateway>, Box<dyn DetectionGateway>) {
    let rewriter: Box<dyn RewriteGateway> = match &config.rewrite {
        Some(endpoint) => match HttpRewriteClient::new(endpoint.clone()) {
            Ok(client) => Box::new(client),
            Err(err) => {
                warn!(error = %err, "rewrite client unavailable, running offline");
                Box::new(OfflineRewriteGateway)
            }
        },
        None => Box::new(OfflineRewriteGateway),
    };

    let detector: Box<dyn DetectionGateway> = match &config.detection {
        Some(endpoint) => match HttpDetectionClient::new(endpoint.clone()) {
            Ok(client) => Box::new(client),
            Err(err) => {
                warn!(error = %err, "detection client unavailable, running offline");
                Box::new(OfflineDetectionGateway)
            }
        },
        None => Box::new(OfflineDetectionGateway),
    };

    (rewriter, detector)
}
