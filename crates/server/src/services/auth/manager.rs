//! Manager authentication for the admin routes.

use sqlx::PgPool;

use crate::db::{ManagerRepository, RepositoryError};

/// Checks basic-auth credentials against the `managers` table.
///
/// Stored manager passwords are plaintext and compared as-is, so the table
/// stays compatible with existing deployments. Anything other than an exact
/// match on an existing login, including a failed lookup, is a rejection.
pub struct ManagerGate<'a> {
    managers: ManagerRepository<'a>,
}

impl<'a> ManagerGate<'a> {
    /// Create a new manager gate.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self {
            managers: ManagerRepository::new(pool),
        }
    }

    /// Returns `true` only for an existing login with exactly this password.
    pub async fn authenticate(&self, login: &str, password: &str) -> bool {
        match self.managers.get_password(login).await {
            Ok(stored) => stored == password,
            Err(RepositoryError::NotFound) => {
                tracing::debug!(login, "unknown manager login");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "manager lookup failed");
                false
            }
        }
    }
}
