//! Customer store error types.

use thiserror::Error;

use crate::db::RepositoryError;

/// Classified customer store failure.
///
/// Only these kinds leave the service; the underlying database error is
/// logged by [`CustomerError::classify`] and dropped.
#[derive(Debug, Error)]
pub enum CustomerError {
    /// No customer matched.
    #[error("customer not found")]
    NotFound,

    /// Another customer already uses this phone.
    #[error("phone number already registered")]
    PhoneTaken,

    /// Database or hashing failure.
    #[error("internal error")]
    Internal,
}

impl CustomerError {
    /// Map a repository error, logging anything that isn't a plain miss.
    pub(super) fn classify(err: RepositoryError, operation: &'static str) -> Self {
        match err {
            RepositoryError::NotFound => Self::NotFound,
            RepositoryError::Conflict(constraint) => {
                tracing::debug!(operation, constraint = %constraint, "customer constraint violation");
                Self::PhoneTaken
            }
            RepositoryError::Database(e) => {
                tracing::error!(error = %e, operation, "customer query failed");
                Self::Internal
            }
        }
    }
}
