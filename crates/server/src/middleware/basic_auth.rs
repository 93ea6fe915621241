//! HTTP basic authentication for manager-only routes.
//!
//! Missing or undecodable credentials are a 400; credentials the
//! authenticator rejects are a 401 with a `WWW-Authenticate` challenge.

use std::future::Future;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, HeaderValue, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use base64::{Engine, engine::general_purpose::STANDARD};

use crate::state::AppState;

/// Value of the `WWW-Authenticate` header on 401 responses.
pub const BASIC_CHALLENGE: &str = r#"Basic realm="customers""#;

/// Something that can check a login/password pair.
pub trait BasicAuthenticator: Clone + Send + Sync + 'static {
    /// Returns `true` if the pair is accepted.
    fn authenticate(&self, login: &str, password: &str) -> impl Future<Output = bool> + Send;
}

impl BasicAuthenticator for AppState {
    async fn authenticate(&self, login: &str, password: &str) -> bool {
        self.managers().authenticate(login, password).await
    }
}

/// Login and password decoded from an `Authorization: Basic` header.
#[derive(Clone, PartialEq, Eq)]
pub struct BasicCredentials {
    pub login: String,
    pub password: String,
}

impl std::fmt::Debug for BasicCredentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BasicCredentials")
            .field("login", &self.login)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

impl BasicCredentials {
    /// Decode credentials from request headers.
    ///
    /// Returns `None` if the header is absent, not `Basic`, not base64, not
    /// UTF-8, or has no `:` separator.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap) -> Option<Self> {
        let value = headers.get(header::AUTHORIZATION)?.to_str().ok()?;
        let (scheme, encoded) = value.trim().split_once(' ')?;
        if !scheme.eq_ignore_ascii_case("basic") {
            return None;
        }

        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        let (login, password) = decoded.split_once(':')?;

        Some(Self {
            login: login.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// Middleware that admits a request only with accepted basic credentials.
///
/// # Example
///
/// ```rust,ignore
/// let admin = Router::new()
///     .route("/customers", get(list))
///     .route_layer(axum::middleware::from_fn_with_state(
///         state.clone(),
///         require_basic_auth::<AppState>,
///     ));
/// ```
pub async fn require_basic_auth<A: BasicAuthenticator>(
    State(authenticator): State<A>,
    request: Request,
    next: Next,
) -> Response {
    let Some(credentials) = BasicCredentials::from_headers(request.headers()) else {
        return (StatusCode::BAD_REQUEST, "Bad Request").into_response();
    };

    if !authenticator
        .authenticate(&credentials.login, &credentials.password)
        .await
    {
        tracing::warn!(login = %credentials.login, "basic auth rejected");
        let mut response = (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
        response.headers_mut().insert(
            header::WWW_AUTHENTICATE,
            HeaderValue::from_static(BASIC_CHALLENGE),
        );
        return response;
    }

    next.run(request).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, http::Request, routing::get};
    use tower::ServiceExt;

    use super::*;

    #[derive(Clone)]
    struct FixedManager;

    impl BasicAuthenticator for FixedManager {
        async fn authenticate(&self, login: &str, password: &str) -> bool {
            login == "admin" && password == "pa:ss"
        }
    }

    fn headers_with(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    fn basic(login: &str, password: &str) -> String {
        format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
    }

    fn app() -> Router {
        Router::new()
            .route("/protected", get(|| async { "inside" }))
            .route_layer(axum::middleware::from_fn_with_state(
                FixedManager,
                require_basic_auth::<FixedManager>,
            ))
    }

    async fn call(authorization: Option<String>) -> Response {
        let mut request = Request::builder().uri("/protected");
        if let Some(value) = authorization {
            request = request.header(header::AUTHORIZATION, value);
        }
        app()
            .oneshot(request.body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    #[test]
    fn test_decodes_credentials() {
        let credentials = BasicCredentials::from_headers(&headers_with(&basic("admin", "pw"))).unwrap();
        assert_eq!(credentials.login, "admin");
        assert_eq!(credentials.password, "pw");
    }

    #[test]
    fn test_password_may_contain_colon() {
        let credentials =
            BasicCredentials::from_headers(&headers_with(&basic("admin", "pa:ss"))).unwrap();
        assert_eq!(credentials.password, "pa:ss");
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        let value = format!("basic {}", STANDARD.encode("admin:pw"));
        assert!(BasicCredentials::from_headers(&headers_with(&value)).is_some());
    }

    #[test]
    fn test_rejects_malformed_headers() {
        assert!(BasicCredentials::from_headers(&HeaderMap::new()).is_none());
        assert!(BasicCredentials::from_headers(&headers_with("Bearer abc")).is_none());
        assert!(BasicCredentials::from_headers(&headers_with("Basic !!!")).is_none());
        let no_colon = format!("Basic {}", STANDARD.encode("adminpw"));
        assert!(BasicCredentials::from_headers(&headers_with(&no_colon)).is_none());
    }

    #[test]
    fn test_debug_redacts_password() {
        let credentials = BasicCredentials {
            login: "admin".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(!format!("{credentials:?}").contains("hunter2"));
    }

    #[tokio::test]
    async fn test_missing_header_is_bad_request() {
        assert_eq!(call(None).await.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_wrong_password_is_unauthorized() {
        let response = call(Some(basic("admin", "wrong"))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            BASIC_CHALLENGE
        );
    }

    #[tokio::test]
    async fn test_correct_login_wrong_case_is_unauthorized() {
        let response = call(Some(basic("Admin", "pa:ss"))).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_accepted_credentials_reach_handler() {
        let response = call(Some(basic("admin", "pa:ss"))).await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"inside");
    }
}
