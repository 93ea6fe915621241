//! Customer repository for database operations.
//!
//! Every method is a single statement. Missing rows surface as
//! `RepositoryError::NotFound` through the `From<sqlx::Error>` conversion.

use sqlx::PgPool;

use customer_crud_core::CustomerId;

use super::RepositoryError;
use crate::models::Customer;

/// Repository for customer database operations.
pub struct CustomerRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CustomerRepository<'a> {
    /// Create a new customer repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Get a customer by ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this ID.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, password, active, created
            FROM customers
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// Get a customer by phone number.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if no customer has this phone.
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_phone(&self, phone: &str) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, password, active, created
            FROM customers
            WHERE phone = $1
            ",
        )
        .bind(phone)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// List every customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, password, active, created
            FROM customers
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// List customers that are not blocked.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_active(&self) -> Result<Vec<Customer>, RepositoryError> {
        let customers = sqlx::query_as::<_, Customer>(
            r"
            SELECT id, name, phone, password, active, created
            FROM customers
            WHERE active
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(customers)
    }

    /// Insert a new customer. `id`, `active` and `created` come from column defaults.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the phone is already registered.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(
        &self,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            INSERT INTO customers (name, phone, password)
            VALUES ($1, $2, $3)
            RETURNING id, name, phone, password, active, created
            ",
        )
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// Overwrite name, phone and password of an existing customer.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Conflict` if the new phone belongs to someone else.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn update(
        &self,
        id: CustomerId,
        name: &str,
        phone: &str,
        password_hash: &str,
    ) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            UPDATE customers
            SET name = $2, phone = $3, password = $4
            WHERE id = $1
            RETURNING id, name, phone, password, active, created
            ",
        )
        .bind(id)
        .bind(name)
        .bind(phone)
        .bind(password_hash)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// Delete a customer, returning the row as it was.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn delete(&self, id: CustomerId) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            DELETE FROM customers
            WHERE id = $1
            RETURNING id, name, phone, password, active, created
            ",
        )
        .bind(id)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }

    /// Set the `active` flag, returning the updated row.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the customer doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn set_active(
        &self,
        id: CustomerId,
        active: bool,
    ) -> Result<Customer, RepositoryError> {
        let customer = sqlx::query_as::<_, Customer>(
            r"
            UPDATE customers
            SET active = $2
            WHERE id = $1
            RETURNING id, name, phone, password, active, created
            ",
        )
        .bind(id)
        .bind(active)
        .fetch_one(self.pool)
        .await?;

        Ok(customer)
    }
}
