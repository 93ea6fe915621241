//! Customer token repository.
//!
//! Tokens are insert-only. There is no update or delete path; rows become
//! useless once `expire` has passed.

use chrono::{DateTime, Utc};
use sqlx::PgPool;

use customer_crud_core::{CustomerId, CustomerToken};

use super::RepositoryError;

/// A stored token row.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct TokenRecord {
    pub token: CustomerToken,
    pub customer_id: CustomerId,
    #[sqlx(rename = "expire")]
    pub expires_at: DateTime<Utc>,
}

/// Repository for `customers_tokens`.
pub struct TokenRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> TokenRepository<'a> {
    /// Create a new token repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Store a freshly issued token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the token string already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn insert(
        &self,
        token: &CustomerToken,
        customer_id: CustomerId,
        expires_at: DateTime<Utc>,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            r"
            INSERT INTO customers_tokens (token, customer_id, expire)
            VALUES ($1, $2, $3)
            ",
        )
        .bind(token)
        .bind(customer_id)
        .bind(expires_at)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Look up a token.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the token was never issued.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get(&self, token: &CustomerToken) -> Result<TokenRecord, RepositoryError> {
        let record = sqlx::query_as::<_, TokenRecord>(
            r"
            SELECT token, customer_id, expire
            FROM customers_tokens
            WHERE token = $1
            ",
        )
        .bind(token)
        .fetch_one(self.pool)
        .await?;

        Ok(record)
    }
}
