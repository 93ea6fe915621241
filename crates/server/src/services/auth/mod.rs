//! Authentication service.
//!
//! Customers trade phone + password for a bearer token; managers use HTTP
//! basic auth checked by [`ManagerGate`].

mod error;
mod manager;
pub mod password;
pub mod token;

pub use error::{AuthError, EntropyError, HashError};
pub use manager::ManagerGate;
pub use password::CredentialHasher;

use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use sqlx::PgPool;

use customer_crud_core::{CustomerId, CustomerToken};

use crate::db::{CustomerRepository, RepositoryError, TokenRepository};
use crate::models::TokenStatus;

/// Customer token service.
///
/// Issuance is a lookup, a hash check and an insert with no transaction
/// around them; validation is a single lookup, optionally bounded by a
/// deadline.
pub struct AuthService<'a> {
    customers: CustomerRepository<'a>,
    tokens: TokenRepository<'a>,
    hasher: &'a CredentialHasher,
    token_ttl: TimeDelta,
    lookup_timeout: Option<Duration>,
}

impl<'a> AuthService<'a> {
    /// Create a new authentication service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, hasher: &'a CredentialHasher, token_ttl: TimeDelta) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            tokens: TokenRepository::new(pool),
            hasher,
            token_ttl,
            lookup_timeout: None,
        }
    }

    /// Bound token lookups during validation; an elapsed deadline reports
    /// `NotFound`.
    #[must_use]
    pub const fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = Some(timeout);
        self
    }

    /// Issue a token for the customer owning `phone`.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::NoSuchUser` if no customer has this phone.
    /// Returns `AuthError::InvalidPassword` if the password doesn't match.
    /// Returns `AuthError::Internal` on storage or entropy failure.
    pub async fn issue_token(
        &self,
        phone: &str,
        password: &str,
    ) -> Result<CustomerToken, AuthError> {
        let customer = match self.customers.get_by_phone(phone).await {
            Ok(customer) => customer,
            Err(RepositoryError::NotFound) => return Err(AuthError::NoSuchUser),
            Err(e) => {
                tracing::error!(error = %e, "customer lookup for token failed");
                return Err(AuthError::Internal);
            }
        };

        if !self.hasher.verify(password, &customer.password_hash) {
            tracing::debug!(customer_id = %customer.id, "token request with wrong password");
            return Err(AuthError::InvalidPassword);
        }

        let token = token::generate_customer_token().map_err(|e| {
            tracing::error!(error = %e, "cannot generate customer token");
            AuthError::Internal
        })?;

        let now = Utc::now();
        let expires_at = expiry_after(now, self.token_ttl).ok_or_else(|| {
            tracing::error!(ttl = %self.token_ttl, "token expiry out of range");
            AuthError::Internal
        })?;

        self.tokens
            .insert(&token, customer.id, expires_at)
            .await
            .map_err(|e| {
                tracing::error!(error = %e, customer_id = %customer.id, "cannot store customer token");
                AuthError::Internal
            })?;

        tracing::info!(customer_id = %customer.id, %expires_at, "customer token issued");
        Ok(token)
    }

    /// Check a token presented by a client.
    ///
    /// Never fails: strings that cannot be tokens, lookup errors and
    /// lookups past the deadline all report `NotFound`.
    pub async fn validate_token(&self, raw: &str) -> TokenStatus {
        let Ok(token) = CustomerToken::parse(raw) else {
            return TokenStatus::NotFound;
        };

        let lookup = self.tokens.get(&token);
        let result = match self.lookup_timeout {
            Some(limit) => {
                if let Ok(result) = tokio::time::timeout(limit, lookup).await {
                    result
                } else {
                    tracing::warn!(timeout_ms = %limit.as_millis(), "customer token lookup timed out");
                    return TokenStatus::NotFound;
                }
            }
            None => lookup.await,
        };

        match result {
            Ok(record) => token_status(record.customer_id, record.expires_at, Utc::now()),
            Err(RepositoryError::NotFound) => TokenStatus::NotFound,
            Err(e) => {
                tracing::error!(error = %e, "customer token lookup failed");
                TokenStatus::NotFound
            }
        }
    }
}

/// A token is valid only while its expiry is strictly in the future.
#[must_use]
pub fn token_status(
    customer_id: CustomerId,
    expires_at: DateTime<Utc>,
    now: DateTime<Utc>,
) -> TokenStatus {
    if expires_at <= now {
        TokenStatus::Expired
    } else {
        TokenStatus::Valid(customer_id)
    }
}

/// Expiry for a token issued at `issued_at`, or `None` on overflow.
#[must_use]
pub fn expiry_after(issued_at: DateTime<Utc>, ttl: TimeDelta) -> Option<DateTime<Utc>> {
    issued_at.checked_add_signed(ttl)
}
