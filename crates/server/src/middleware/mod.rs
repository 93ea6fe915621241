//! HTTP middleware for the customer service.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (hub per request, transaction)
//! 2. `TraceLayer` (request span)
//! 3. Request ID (recorded into the request span)
//! 4. Timeout (408 when a handler runs past the deadline)
//! 5. Basic auth (customer administration routes only, as a route layer)

pub mod basic_auth;
pub mod request_id;

pub use basic_auth::{BasicAuthenticator, BasicCredentials, require_basic_auth};
pub use request_id::{REQUEST_ID_HEADER, request_id_middleware};
