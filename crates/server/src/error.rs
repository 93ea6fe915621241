//! Unified error handling for route handlers.
//!
//! Services log database detail where it occurs; by the time an error gets
//! here it is only a classified kind, mapped to a status code and a short
//! message. All route handlers should return `Result<T, AppError>`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::services::auth::AuthError;
use crate::services::customers::CustomerError;

/// Application-level error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Customer store operation failed.
    #[error("Customer error: {0}")]
    Customer(#[from] CustomerError),

    /// Token issuance failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Malformed body or path parameter.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl AppError {
    /// Status code sent for this error.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Customer(err) => match err {
                CustomerError::NotFound => StatusCode::NOT_FOUND,
                CustomerError::PhoneTaken => StatusCode::CONFLICT,
                CustomerError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                AuthError::NoSuchUser => StatusCode::NOT_FOUND,
                AuthError::InvalidPassword => StatusCode::UNAUTHORIZED,
                AuthError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Customer(CustomerError::Internal) | Self::Auth(AuthError::Internal) => {
                "Internal server error".to_string()
            }
            Self::Customer(err) => err.to_string(),
            Self::Auth(err) => err.to_string(),
            Self::BadRequest(msg) => msg.clone(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;
