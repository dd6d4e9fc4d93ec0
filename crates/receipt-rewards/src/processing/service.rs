use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{RepositoryError, ScoreRecord, ScoreRepository};
use super::scoring::ScoringEngine;
use super::validation::{validate_receipt, ValidationError};

/// Service composing validation, the scoring engine, and the score store.
pub struct ReceiptService<R> {
    repository: Arc<R>,
    engine: ScoringEngine,
}

impl<R> ReceiptService<R>
where
    R: ScoreRepository + 'static,
{
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            engine: ScoringEngine::new(),
        }
    }

    /// Validate, score, and store a submission, returning the stored record.
    ///
    /// The identifier is a freshly generated 128-bit random token; collisions
    /// are treated as negligible.
    pub fn submit(
        &self,
        submission: ReceiptSubmission,
    ) -> Result<ScoreRecord, ReceiptServiceError> {
        let receipt = validate_receipt(submission)?;
        let summary = self.engine.score(&receipt);

        let record = ScoreRecord {
            id: ReceiptId(Uuid::new_v4().to_string()),
            points: summary.total_points,
        };
        self.repository.insert(record.clone())?;

        info!(receipt_id = %record.id, points = record.points, "receipt processed");
        for line in summary.breakdown() {
            info!(receipt_id = %record.id, "{line}");
        }

        Ok(record)
    }

    /// Look up the points for a previously issued identifier.
    pub fn points(&self, id: &ReceiptId) -> Result<u64, ReceiptServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record.points)
    }
}

/// Error raised by the receipt service.
#[derive(Debug, thiserror::Error)]
pub enum ReceiptServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
