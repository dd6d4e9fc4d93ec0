use serde::{Deserialize, Serialize};

use super::domain::ReceiptId;

/// Stored outcome of a processed receipt. Write-once: no update or delete
/// path exists, and records live only for the process lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    pub id: ReceiptId,
    pub points: u64,
}

/// Storage abstraction so the service module can be exercised in isolation.
///
/// Implementations must be safe under concurrent request handlers: `fetch`
/// observes a fully written record or nothing.
pub trait ScoreRepository: Send + Sync {
    fn insert(&self, record: ScoreRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &ReceiptId) -> Result<Option<ScoreRecord>, RepositoryError>;
}

/// Error enumeration for repository failures.
#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    #[error("repository unavailable: {0}")]
    Unavailable(String),
}
