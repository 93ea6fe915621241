//! HTTP route handlers for the customer service.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                         - Liveness check
//! GET  /health/ready                   - Readiness check (database)
//!
//! # Customer administration (HTTP basic auth, managers table)
//! GET    /customers                    - All customers
//! GET    /customers/active             - Customers that are not blocked
//! GET    /customers/{id}               - One customer
//! DELETE /customers/{id}               - Hard delete, returns the removed row
//! POST   /customers                    - Insert (id 0 or absent) or full update
//! POST   /customers/block/{id}         - Set active = false
//! POST   /customers/unblock/{id}       - Set active = true
//!
//! # Customer tokens (no auth)
//! POST /api/customers/token            - Trade phone + password for a token
//! POST /api/customers/token/validate   - Check a token (always HTTP 200)
//! ```

pub mod api;
pub mod customers;
pub mod health;

use axum::{
    Router,
    http::StatusCode,
    routing::{get, post},
};
use tower_http::{
    timeout::TimeoutLayer,
    trace::{DefaultOnResponse, OnResponse, TraceLayer},
};
use tracing::Span;

use crate::middleware::{request_id_middleware, require_basic_auth};
use crate::state::AppState;

/// Customer administration routes, without the auth layer.
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route("/customers", get(customers::list).post(customers::save))
        .route("/customers/active", get(customers::list_active))
        .route(
            "/customers/{id}",
            get(customers::show).delete(customers::delete),
        )
        .route("/customers/block/{id}", post(customers::block))
        .route("/customers/unblock/{id}", post(customers::unblock))
}

/// Health check routes.
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::readiness))
}

/// Build the complete application router.
///
/// Basic auth guards only the customer administration routes; the token API
/// and health checks are open. Administration and token issuance answer 408
/// past the request timeout. Sentry layers are added by the binary.
pub fn app(state: AppState) -> Router {
    let request_timeout = state.config().request_timeout;

    let admin = customer_routes()
        .route_layer(axum::middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth::<AppState>,
        ))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            request_timeout,
        ));

    Router::new()
        .merge(health_routes())
        .merge(admin)
        .nest("/api", api::routes(request_timeout))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        request_id = tracing::field::Empty,
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        span.record(
                            "latency_ms",
                            u64::try_from(latency.as_millis()).unwrap_or(u64::MAX),
                        );
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .with_state(state)
}
