//! Manager credential repository.
//!
//! Manager rows are maintained out of band (see `crud-cli manager create`);
//! the server only reads them.

use sqlx::PgPool;

use customer_crud_core::ManagerId;

use super::RepositoryError;

/// Repository for `managers`.
pub struct ManagerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ManagerRepository<'a> {
    /// Create a new manager repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get the stored password for a login.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the login doesn't exist.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_password(&self, login: &str) -> Result<String, RepositoryError> {
        let (password,): (String,) =
            sqlx::query_as("SELECT password FROM managers WHERE login = $1")
                .bind(login)
                .fetch_one(self.pool)
                .await?;

        Ok(password)
    }

    /// Create a manager account.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the login is taken.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, login: &str, password: &str) -> Result<ManagerId, RepositoryError> {
        let (id,): (ManagerId,) = sqlx::query_as(
            r"
            INSERT INTO managers (login, password)
            VALUES ($1, $2)
            RETURNING id
            ",
        )
        .bind(login)
        .bind(password)
        .fetch_one(self.pool)
        .await?;

        Ok(id)
    }
}
