use super::AppState;
use super::error::METHOD_NOT_ALLOWED_MESSAGE;
use crate::domain::receipt::Receipt;
use crate::error::{ReceiptError, Result};
use axum::{
    Json,
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Response for a processed receipt.
#[derive(Debug, Serialize, Deserialize)]
pub struct ProcessResponse {
    pub id: String,
}

/// Response for a points lookup.
#[derive(Debug, Serialize, Deserialize)]
pub struct PointsResponse {
    pub points: u64,
}

/// POST /receipts/process
pub async fn process_receipt(
    State(processor): State<AppState>,
    body: Bytes,
) -> Result<Json<ProcessResponse>> {
    let receipt = Receipt::from_json(&body).inspect_err(|e| {
        warn!(error = %e, "Rejected receipt");
    })?;

    let id = processor.process(receipt).await?;
    Ok(Json(ProcessResponse { id }))
}

/// GET /receipts/{id}/points
pub async fn get_points(
    State(processor): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<PointsResponse>> {
    match processor.points(&id).await? {
        Some(points) => Ok(Json(PointsResponse { points })),
        None => {
            warn!(%id, "Receipt not found");
            Err(ReceiptError::NotFound(id))
        }
    }
}

pub async fn method_not_allowed() -> impl IntoResponse {
    (StatusCode::METHOD_NOT_ALLOWED, METHOD_NOT_ALLOWED_MESSAGE)
}
