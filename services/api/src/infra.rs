use metrics_exporter_prometheus::PrometheusHandle;
use receipt_rewards::processing::{ReceiptId, RepositoryError, ScoreRecord, ScoreRepository};
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Volatile process-lifetime score store guarded by a single mutex.
///
/// Each insert is atomic with respect to identifier generation upstream;
/// readers observe a fully written record or nothing.
#[derive(Default, Clone)]
pub(crate) struct InMemoryScoreRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ScoreRecord>>>,
}

impl ScoreRepository for InMemoryScoreRepository {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}
