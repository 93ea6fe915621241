//! Application state shared across handlers.

use std::sync::Arc;

use chrono::TimeDelta;
use sqlx::PgPool;

use crate::config::ServerConfig;
use crate::services::auth::{AuthService, CredentialHasher, HashError, ManagerGate};
use crate::services::customers::CustomerService;

/// Error building application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("password hasher: {0}")]
    Hasher(#[from] HashError),
    #[error("token ttl out of range: {0}")]
    TokenTtl(#[from] chrono::OutOfRangeError),
}

/// Application state shared across all handlers.
///
/// Built once at startup and handed to the router. Cheaply cloneable via
/// `Arc`; the connection pool is the only shared resource handlers touch.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ServerConfig,
    pool: PgPool,
    hasher: CredentialHasher,
    token_ttl: TimeDelta,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Arguments
    ///
    /// * `config` - Server configuration
    /// * `pool` - `PostgreSQL` connection pool
    ///
    /// # Errors
    ///
    /// Returns an error if the hashing parameters or token TTL are invalid.
    pub fn new(config: ServerConfig, pool: PgPool) -> Result<Self, StateError> {
        let hasher = CredentialHasher::new(config.hashing)?;
        let token_ttl = TimeDelta::from_std(config.token_ttl)?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                pool,
                hasher,
                token_ttl,
            }),
        })
    }

    /// Get a reference to the server configuration.
    #[must_use]
    pub fn config(&self) -> &ServerConfig {
        &self.inner.config
    }

    /// Get a reference to the database connection pool.
    #[must_use]
    pub fn pool(&self) -> &PgPool {
        &self.inner.pool
    }

    /// Customer store bound to this state's pool.
    #[must_use]
    pub fn customers(&self) -> CustomerService<'_> {
        CustomerService::new(&self.inner.pool, &self.inner.hasher)
    }

    /// Customer token service bound to this state's pool.
    ///
    /// Validation lookups share the request deadline.
    #[must_use]
    pub fn auth(&self) -> AuthService<'_> {
        AuthService::new(&self.inner.pool, &self.inner.hasher, self.inner.token_ttl)
            .with_lookup_timeout(self.inner.config.request_timeout)
    }

    /// Manager credential check bound to this state's pool.
    #[must_use]
    pub fn managers(&self) -> ManagerGate<'_> {
        ManagerGate::new(&self.inner.pool)
    }
}
