//! Customer token endpoints.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};

use crate::error::{AppError, Result};
use crate::models::{TokenRequest, TokenResponse, TokenStatus, TokenValidation, ValidateRequest};
use crate::state::AppState;

/// `POST /api/customers/token`
///
/// Unknown phone is a 404, wrong password a 401.
pub async fn issue(
    State(state): State<AppState>,
    body: std::result::Result<Json<TokenRequest>, JsonRejection>,
) -> Result<Json<TokenResponse>> {
    let Json(request) = body.map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    let token = state
        .auth()
        .issue_token(&request.phone, &request.password)
        .await?;
    Ok(Json(TokenResponse { token }))
}

/// `POST /api/customers/token/validate`
///
/// Always answers 200; the outcome lives in the body. A body that cannot be
/// read counts as an unknown token.
pub async fn validate(
    State(state): State<AppState>,
    body: std::result::Result<Json<ValidateRequest>, JsonRejection>,
) -> Json<TokenValidation> {
    let status = match body {
        Ok(Json(request)) => state.auth().validate_token(&request.token).await,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "unreadable token validation body");
            TokenStatus::NotFound
        }
    };
    Json(TokenValidation::from(status))
}
