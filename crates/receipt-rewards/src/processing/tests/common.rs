use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::processing::domain::{ItemSubmission, ReceiptId, ReceiptSubmission};
use crate::processing::repository::{RepositoryError, ScoreRecord, ScoreRepository};
use crate::processing::service::ReceiptService;

pub(super) fn item(short_description: &str, price: &str) -> ItemSubmission {
    ItemSubmission {
        short_description: short_description.to_string(),
        price: price.to_string(),
    }
}

/// Five-item morning receipt: 6 retailer chars, 2 pairs, two description
/// bonuses (3 + 3), odd day. Expected score 28.
pub(super) fn target_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "Target".to_string(),
        purchase_date: "2022-01-01".to_string(),
        purchase_time: "13:01".to_string(),
        items: vec![
            item("Mountain Dew 12PK", "6.49"),
            item("Emils Cheese Pizza", "12.25"),
            item("Knorr Creamy Chicken", "1.26"),
            item("Doritos Nacho Cheese", "3.35"),
            item("   Klarbrunn 12-PK 12 FL OZ  ", "12.00"),
        ],
        total: "35.35".to_string(),
    }
}

/// Round-dollar afternoon receipt: 14 retailer chars, +50 round dollar,
/// +25 quarter multiple, 2 pairs, in-window time. Expected score 109.
pub(super) fn market_submission() -> ReceiptSubmission {
    ReceiptSubmission {
        retailer: "M&M Corner Market".to_string(),
        purchase_date: "2022-03-20".to_string(),
        purchase_time: "14:33".to_string(),
        items: vec![
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
            item("Gatorade", "2.25"),
        ],
        total: "9.00".to_string(),
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    records: Arc<Mutex<HashMap<ReceiptId, ScoreRecord>>>,
}

impl MemoryRepository {
    pub(super) fn len(&self) -> usize {
        self.records.lock().expect("lock").len()
    }
}

impl ScoreRepository for MemoryRepository {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("lock");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        let guard = self.records.lock().expect("lock");
        Ok(guard.get(id).cloned())
    }
}

pub(super) struct UnavailableRepository;

impl ScoreRepository for UnavailableRepository {
    fn insert(&self, _record: ScoreRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }

    fn fetch(&self, _id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("store offline".to_string()))
    }
}

pub(super) fn build_service() -> (ReceiptService<MemoryRepository>, Arc<MemoryRepository>) {
    let repository = Arc::new(MemoryRepository::default());
    (ReceiptService::new(repository.clone()), repository)
}
