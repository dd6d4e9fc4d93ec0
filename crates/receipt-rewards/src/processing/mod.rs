//! Receipt intake, validation, points scoring, and score storage.

pub mod domain;
pub mod repository;
pub mod router;
pub mod scoring;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Item, ItemSubmission, Money, MoneyParseError, Receipt, ReceiptId, ReceiptSubmission,
};
pub use repository::{RepositoryError, ScoreRecord, ScoreRepository};
pub use router::{receipt_router, RequestError};
pub use scoring::{RuleKind, ScoreComponent, ScoreSummary, ScoringEngine};
pub use service::{ReceiptService, ReceiptServiceError};
pub use validation::{validate_price, validate_receipt, ValidationError};
