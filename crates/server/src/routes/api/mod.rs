//! JSON API consumed by customer-facing clients.

pub mod tokens;

use std::time::Duration;

use axum::{Router, http::StatusCode, routing::post};
use tower_http::timeout::TimeoutLayer;

use crate::state::AppState;

/// Routes mounted under `/api`.
///
/// Issuance answers 408 past `request_timeout`. Validation has no timeout
/// layer: its lookup carries its own deadline so the reply stays a
/// structured 200.
pub fn routes(request_timeout: Duration) -> Router<AppState> {
    Router::new()
        .route(
            "/customers/token",
            post(tokens::issue).layer(TimeoutLayer::with_status_code(
                StatusCode::REQUEST_TIMEOUT,
                request_timeout,
            )),
        )
        .route("/customers/token/validate", post(tokens::validate))
}
