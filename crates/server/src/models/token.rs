//! Customer token request and response types.

use axum::http::StatusCode;
use serde::{Deserialize, Serialize};

use customer_crud_core::{CustomerId, CustomerToken};

/// Body of `POST /api/customers/token`.
#[derive(Clone, Deserialize)]
pub struct TokenRequest {
    pub phone: String,
    pub password: String,
}

impl std::fmt::Debug for TokenRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenRequest")
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Response of `POST /api/customers/token`.
#[derive(Debug, Clone, Serialize)]
pub struct TokenResponse {
    pub token: CustomerToken,
}

/// Body of `POST /api/customers/token/validate`.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidateRequest {
    pub token: String,
}

/// Outcome of checking a token against the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenStatus {
    /// Token exists and has not expired.
    Valid(CustomerId),
    /// Token was never issued (or could not be looked up).
    NotFound,
    /// Token exists but its expiry has passed.
    Expired,
}

/// Why a token was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FailReason {
    NotFound,
    Expired,
}

/// `ok` or `fail`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationOutcome {
    Ok,
    Fail,
}

/// The `info` object of a validation response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationInfo {
    pub status: ValidationOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<CustomerId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<FailReason>,
}

/// Response of `POST /api/customers/token/validate`.
///
/// Always sent with HTTP 200; `status_code` carries the reason phrase of the
/// logical outcome instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenValidation {
    pub status_code: String,
    pub info: ValidationInfo,
}

impl From<TokenStatus> for TokenValidation {
    fn from(status: TokenStatus) -> Self {
        let (code, info) = match status {
            TokenStatus::Valid(customer_id) => (
                StatusCode::OK,
                ValidationInfo {
                    status: ValidationOutcome::Ok,
                    customer_id: Some(customer_id),
                    reason: None,
                },
            ),
            TokenStatus::NotFound => (
                StatusCode::NOT_FOUND,
                ValidationInfo {
                    status: ValidationOutcome::Fail,
                    customer_id: None,
                    reason: Some(FailReason::NotFound),
                },
            ),
            TokenStatus::Expired => (
                StatusCode::BAD_REQUEST,
                ValidationInfo {
                    status: ValidationOutcome::Fail,
                    customer_id: None,
                    reason: Some(FailReason::Expired),
                },
            ),
        };

        Self {
            status_code: code.canonical_reason().unwrap_or_default().to_string(),
            info,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_valid_token_json() {
        let body = TokenValidation::from(TokenStatus::Valid(CustomerId::new(12)));
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"statusCode": "OK", "info": {"status": "ok", "customerId": 12}})
        );
    }

    #[test]
    fn test_not_found_token_json() {
        let body = TokenValidation::from(TokenStatus::NotFound);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"statusCode": "Not Found", "info": {"status": "fail", "reason": "notFound"}})
        );
    }

    #[test]
    fn test_expired_token_json() {
        let body = TokenValidation::from(TokenStatus::Expired);
        assert_eq!(
            serde_json::to_value(body).unwrap(),
            json!({"statusCode": "Bad Request", "info": {"status": "fail", "reason": "expired"}})
        );
    }

    #[test]
    fn test_token_request_debug_redacts_password() {
        let request: TokenRequest =
            serde_json::from_str(r#"{"phone":"+1000","password":"secret"}"#).unwrap();
        let debug = format!("{request:?}");
        assert!(debug.contains("+1000"));
        assert!(!debug.contains("secret"));
    }
}
