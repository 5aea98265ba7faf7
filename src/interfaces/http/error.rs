use crate::error::ReceiptError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

pub const INVALID_RECEIPT_MESSAGE: &str = "Invalid receipt format";
pub const NOT_FOUND_MESSAGE: &str = "Receipt not found";
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

impl IntoResponse for ReceiptError {
    fn into_response(self) -> Response {
        match self {
            ReceiptError::InvalidReceipt(_) | ReceiptError::Json(_) => {
                (StatusCode::BAD_REQUEST, INVALID_RECEIPT_MESSAGE).into_response()
            }
            ReceiptError::NotFound(_) => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE).into_response(),
        }
    }
}
