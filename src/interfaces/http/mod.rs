//! REST interface for submitting receipts and reading their points.
//!
//! - `POST /receipts/process` scores a receipt and returns its id.
//! - `GET /receipts/{id}/points` returns the points stored for an id.
//!
//! Any other method on these paths, HEAD included, answers
//! `405 Method not allowed`.

mod error;
pub mod handlers;

use crate::application::processor::ReceiptProcessor;
use axum::{
    Router,
    routing::{get, post},
};
use handlers::{get_points, method_not_allowed, process_receipt};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared state handed to every handler.
pub type AppState = Arc<ReceiptProcessor>;

/// Builds the receipt routes without binding state.
pub fn receipt_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/receipts/process",
            post(process_receipt).fallback(method_not_allowed),
        )
        .route(
            "/receipts/{id}/points",
            get(get_points)
                .head(method_not_allowed)
                .fallback(method_not_allowed),
        )
}

/// Builds the complete application router with request tracing.
pub fn router(processor: AppState) -> Router {
    receipt_routes()
        .with_state(processor)
        .layer(TraceLayer::new_for_http())
}
