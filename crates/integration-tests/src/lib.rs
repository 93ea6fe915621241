//! Integration tests for the customer CRUD service.
//!
//! # Running Tests
//!
//! ```bash
//! # Store tests: each gets a fresh database migrated from
//! # crates/server/migrations
//! DATABASE_URL=postgres://localhost/postgres \
//!     cargo test -p customer-crud-integration-tests -- --ignored
//!
//! # HTTP tests additionally need a running server and a manager row
//! crud-cli migrate
//! crud-cli manager create --login admin --password admin
//! cargo run -p customer-crud-server &
//! CUSTOMERS_BASE_URL=http://localhost:9999 \
//!     cargo test -p customer-crud-integration-tests --test http_api -- --ignored
//! ```
//!
//! # Test Categories
//!
//! - `customer_store` - Customer CRUD against `PostgreSQL`
//! - `customer_tokens` - Token issuance and validation
//! - `manager_auth` - Basic-auth credential checks
//! - `http_api` - End-to-end HTTP scenarios

use base64::{Engine, engine::general_purpose::STANDARD};
use customer_crud_server::config::HashingConfig;
use customer_crud_server::models::CustomerInput;
use customer_crud_server::services::auth::{CredentialHasher, HashError};

/// Hasher with the cheapest parameters argon2 accepts.
///
/// # Errors
///
/// Returns `HashError` if argon2 rejects the parameters.
pub fn fast_hasher() -> Result<CredentialHasher, HashError> {
    CredentialHasher::new(HashingConfig {
        memory_kib: Some(1024),
        iterations: Some(1),
    })
}

/// A new-customer body (`id` unassigned).
#[must_use]
pub fn new_customer(name: &str, phone: &str, password: &str) -> CustomerInput {
    CustomerInput {
        id: customer_crud_core::CustomerId::UNASSIGNED,
        name: name.to_owned(),
        phone: phone.to_owned(),
        password: password.to_owned(),
    }
}

/// A phone number that won't collide with other tests' rows.
#[must_use]
pub fn unique_phone() -> String {
    format!("+1{}", uuid::Uuid::new_v4().simple())
}

/// Base URL of a running server (`CUSTOMERS_BASE_URL`).
#[must_use]
pub fn base_url() -> String {
    std::env::var("CUSTOMERS_BASE_URL").unwrap_or_else(|_| "http://localhost:9999".to_string())
}

/// `Authorization` header value for the test manager.
///
/// Credentials come from `CUSTOMERS_MANAGER_LOGIN`/`CUSTOMERS_MANAGER_PASSWORD`
/// and default to `admin`/`admin`.
#[must_use]
pub fn manager_authorization() -> String {
    let login = std::env::var("CUSTOMERS_MANAGER_LOGIN").unwrap_or_else(|_| "admin".to_string());
    let password =
        std::env::var("CUSTOMERS_MANAGER_PASSWORD").unwrap_or_else(|_| "admin".to_string());
    format!("Basic {}", STANDARD.encode(format!("{login}:{password}")))
}
