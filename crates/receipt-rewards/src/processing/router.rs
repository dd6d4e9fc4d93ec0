use std::sync::Arc;

use axum::{
    extract::rejection::JsonRejection,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tracing::error;

use super::domain::{ReceiptId, ReceiptSubmission};
use super::repository::{RepositoryError, ScoreRepository};
use super::service::{ReceiptService, ReceiptServiceError};

const REQUIRED_FIELDS: [&str; 5] = ["retailer", "purchaseDate", "purchaseTime", "items", "total"];

/// Router builder exposing HTTP endpoints for submission and point lookup.
pub fn receipt_router<R>(service: Arc<ReceiptService<R>>) -> Router
where
    R: ScoreRepository + 'static,
{
    Router::new()
        .route("/receipts/process", post(process_handler::<R>))
        .route("/receipts/:receipt_id/points", get(points_handler::<R>))
        .with_state(service)
}

/// Transport-level rejections raised before a submission reaches the
/// validation model.
#[derive(Debug, thiserror::Error)]
pub enum RequestError {
    #[error("request body must be a JSON object")]
    MalformedBody,
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<String>),
    #[error("invalid receipt data: {0}")]
    InvalidShape(String),
}

fn decode_submission(
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<ReceiptSubmission, RequestError> {
    let Json(value) = payload.map_err(|_| RequestError::MalformedBody)?;
    if !value.is_object() {
        return Err(RequestError::MalformedBody);
    }

    let missing: Vec<String> = REQUIRED_FIELDS
        .iter()
        .filter(|field| value.get(**field).is_none())
        .map(|field| field.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(RequestError::MissingFields(missing));
    }

    serde_json::from_value(value).map_err(|err| RequestError::InvalidShape(err.to_string()))
}

pub(crate) async fn process_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let submission = match decode_submission(payload) {
        Ok(submission) => submission,
        Err(err) => {
            let payload = json!({ "error": err.to_string() });
            return (StatusCode::BAD_REQUEST, Json(payload)).into_response();
        }
    };

    match service.submit(submission) {
        Ok(record) => (StatusCode::OK, Json(json!({ "id": record.id }))).into_response(),
        Err(ReceiptServiceError::Validation(err)) => {
            let payload = json!({ "error": err.to_string() });
            (StatusCode::BAD_REQUEST, Json(payload)).into_response()
        }
        Err(ReceiptServiceError::Repository(err)) => {
            error!(%err, "failed to store processed receipt");
            let payload = json!({ "error": "failed to process receipt" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn points_handler<R>(
    State(service): State<Arc<ReceiptService<R>>>,
    Path(receipt_id): Path<String>,
) -> Response
where
    R: ScoreRepository + 'static,
{
    let id = ReceiptId(receipt_id);
    match service.points(&id) {
        Ok(points) => (StatusCode::OK, Json(json!({ "points": points }))).into_response(),
        Err(ReceiptServiceError::Repository(RepositoryError::NotFound)) => {
            let payload = json!({ "error": "receipt not found" });
            (StatusCode::NOT_FOUND, Json(payload)).into_response()
        }
        Err(err) => {
            error!(%err, receipt_id = %id, "failed to load receipt points");
            let payload = json!({ "error": "failed to get points" });
            (StatusCode::INTERNAL_SERVER_ERROR, Json(payload)).into_response()
        }
    }
}
