//! Customer administration handlers.
//!
//! Every handler here sits behind basic auth. Path ids and JSON bodies are
//! taken as `Result`s so malformed input turns into a plain 400.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use customer_crud_core::CustomerId;

use crate::error::{AppError, Result};
use crate::models::{Customer, CustomerInput};
use crate::state::AppState;

/// A non-integer `{id}` is a plain "Bad Request", same as a missing
/// `Authorization` header.
fn customer_id(path: std::result::Result<Path<i64>, PathRejection>) -> Result<CustomerId> {
    let Path(id) = path.map_err(|rejection| {
        tracing::debug!(error = %rejection, "invalid customer id");
        AppError::BadRequest("Bad Request".to_string())
    })?;
    Ok(CustomerId::new(id))
}

/// `GET /customers`
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    Ok(Json(state.customers().fetch_all().await?))
}

/// `GET /customers/active`
pub async fn list_active(State(state): State<AppState>) -> Result<Json<Vec<Customer>>> {
    Ok(Json(state.customers().fetch_active().await?))
}

/// `GET /customers/{id}`
pub async fn show(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>> {
    let id = customer_id(path)?;
    Ok(Json(state.customers().fetch_by_id(id).await?))
}

/// `POST /customers`
///
/// An absent or zero `id` inserts; anything else replaces that customer,
/// password included.
pub async fn save(
    State(state): State<AppState>,
    body: std::result::Result<Json<CustomerInput>, JsonRejection>,
) -> Result<Json<Customer>> {
    let Json(input) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(Json(state.customers().save(&input).await?))
}

/// `DELETE /customers/{id}`
pub async fn delete(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>> {
    let id = customer_id(path)?;
    Ok(Json(state.customers().delete_by_id(id).await?))
}

/// `POST /customers/block/{id}`
pub async fn block(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>> {
    let id = customer_id(path)?;
    Ok(Json(state.customers().block_by_id(id).await?))
}

/// `POST /customers/unblock/{id}`
pub async fn unblock(
    State(state): State<AppState>,
    path: std::result::Result<Path<i64>, PathRejection>,
) -> Result<Json<Customer>> {
    let id = customer_id(path)?;
    Ok(Json(state.customers().unblock_by_id(id).await?))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::get,
    };
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new().route(
            "/customers/{id}",
            get(|path: std::result::Result<Path<i64>, PathRejection>| async move {
                customer_id(path).map(|id| id.to_string())
            }),
        )
    }

    async fn call(uri: &str) -> (StatusCode, String) {
        let response = app()
            .oneshot(Request::get(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_integer_id_is_accepted() {
        assert_eq!(call("/customers/42").await, (StatusCode::OK, "42".to_string()));
    }

    #[tokio::test]
    async fn test_non_integer_id_is_plain_bad_request() {
        for uri in ["/customers/abc", "/customers/1.5", "/customers/99999999999999999999"] {
            assert_eq!(
                call(uri).await,
                (StatusCode::BAD_REQUEST, "Bad Request".to_string()),
                "{uri}"
            );
        }
    }
}
