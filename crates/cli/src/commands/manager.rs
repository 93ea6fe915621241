//! Manager account commands.
//!
//! Managers authenticate to the customer administration routes with HTTP
//! basic auth. The password is stored exactly as given because the server
//! compares it verbatim.

use customer_crud_server::db::{self, ManagerRepository, RepositoryError};
use customer_crud_core::ManagerId;
use thiserror::Error;

/// Errors that can occur during manager operations.
#[derive(Debug, Error)]
pub enum ManagerError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: CUSTOMERS_DATABASE_URL or DATABASE_URL")]
    MissingDatabaseUrl,

    /// Login or password is empty.
    #[error("Login and password must not be empty")]
    EmptyCredential,

    /// Login is already taken.
    #[error("Manager already exists with login: {0}")]
    LoginTaken(String),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Insert failed for a reason other than a duplicate login.
    #[error("Repository error: {0}")]
    Repository(RepositoryError),
}

/// Create a manager account.
///
/// # Errors
///
/// Returns `ManagerError` if the input is empty, the login exists, or the
/// database is unreachable.
pub async fn create(login: &str, password: &str) -> Result<ManagerId, ManagerError> {
    if login.is_empty() || password.is_empty() {
        return Err(ManagerError::EmptyCredential);
    }

    let database_url = super::database_url().ok_or(ManagerError::MissingDatabaseUrl)?;

    tracing::info!("Connecting to database...");
    let pool = db::create_pool(&database_url, 1).await?;

    ManagerRepository::new(&pool)
        .create(login, password)
        .await
        .map_err(|e| match e {
            RepositoryError::Conflict(_) => ManagerError::LoginTaken(login.to_owned()),
            other => ManagerError::Repository(other),
        })
}
