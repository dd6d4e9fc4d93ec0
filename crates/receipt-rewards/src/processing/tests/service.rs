use std::sync::Arc;

use super::common::*;
use crate::processing::domain::ReceiptId;
use crate::processing::repository::{RepositoryError, ScoreRepository};
use crate::processing::service::{ReceiptService, ReceiptServiceError};
use crate::processing::validation::ValidationError;

#[test]
fn submit_stores_and_returns_the_scored_record() {
    let (service, repository) = build_service();

    let record = service
        .submit(target_submission())
        .expect("submission succeeds");

    assert_eq!(record.points, 28);
    assert_eq!(repository.len(), 1);
    let stored = repository
        .fetch(&record.id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored, record);
}

#[test]
fn points_round_trip_after_submit() {
    let (service, _) = build_service();

    let record = service
        .submit(market_submission())
        .expect("submission succeeds");
    let points = service.points(&record.id).expect("points found");

    assert_eq!(points, 109);
}

#[test]
fn unknown_identifier_is_not_found() {
    let (service, _) = build_service();

    match service.points(&ReceiptId("never-issued".to_string())) {
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {}
        other => panic!("expected not found error, got {other:?}"),
    }
}

#[test]
fn submit_propagates_validation_errors() {
    let (service, repository) = build_service();

    let mut submission = target_submission();
    submission.purchase_time = "25:61".to_string();

    match service.submit(submission) {
        Err(ReceiptServiceError::Validation(ValidationError::InvalidTime { .. })) => {}
        other => panic!("expected validation error, got {other:?}"),
    }
    assert_eq!(repository.len(), 0, "rejected receipts must not be stored");
}

#[test]
fn submit_surfaces_repository_failures() {
    let service = ReceiptService::new(Arc::new(UnavailableRepository));

    match service.submit(target_submission()) {
        Err(ReceiptServiceError::Repository(RepositoryError::Unavailable(_))) => {}
        other => panic!("expected repository error, got {other:?}"),
    }
}

#[test]
fn mismatched_total_still_issues_an_identifier() {
    let (service, _) = build_service();

    let mut submission = target_submission();
    submission.total = "1.00".to_string();

    let record = service
        .submit(submission)
        .expect("mismatch is a warning, not a failure");
    assert!(!record.id.0.is_empty());
}

#[test]
fn identifiers_are_unique_across_submissions() {
    let (service, repository) = build_service();

    let first = service.submit(target_submission()).expect("first");
    let second = service.submit(target_submission()).expect("second");

    assert_ne!(first.id, second.id);
    assert_eq!(repository.len(), 2);
}
