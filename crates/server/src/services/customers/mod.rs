//! Customer store.
//!
//! Wraps [`CustomerRepository`] with password hashing on save and turns
//! repository errors into [`CustomerError`].

mod error;

pub use error::CustomerError;

use sqlx::PgPool;

use customer_crud_core::CustomerId;

use crate::db::CustomerRepository;
use crate::models::{Customer, CustomerInput};
use crate::services::auth::CredentialHasher;

/// Customer store service.
pub struct CustomerService<'a> {
    customers: CustomerRepository<'a>,
    hasher: &'a CredentialHasher,
}

impl<'a> CustomerService<'a> {
    /// Create a new customer service.
    #[must_use]
    pub const fn new(pool: &'a PgPool, hasher: &'a CredentialHasher) -> Self {
        Self {
            customers: CustomerRepository::new(pool),
            hasher,
        }
    }

    /// Fetch one customer.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` or `CustomerError::Internal`.
    pub async fn fetch_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.customers
            .get_by_id(id)
            .await
            .map_err(|e| CustomerError::classify(e, "fetch_by_id"))
    }

    /// Fetch every customer. Unpaginated.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::Internal` if the query fails.
    pub async fn fetch_all(&self) -> Result<Vec<Customer>, CustomerError> {
        self.customers
            .list_all()
            .await
            .map_err(|e| CustomerError::classify(e, "fetch_all"))
    }

    /// Fetch customers that are not blocked.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::Internal` if the query fails.
    pub async fn fetch_active(&self) -> Result<Vec<Customer>, CustomerError> {
        self.customers
            .list_active()
            .await
            .map_err(|e| CustomerError::classify(e, "fetch_active"))
    }

    /// Insert (`id == 0`) or fully replace a customer.
    ///
    /// The password is hashed on every call, updates included, so callers
    /// must always send it.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` when updating a missing customer,
    /// `CustomerError::PhoneTaken` on a duplicate phone, and
    /// `CustomerError::Internal` on hashing or database failure.
    pub async fn save(&self, input: &CustomerInput) -> Result<Customer, CustomerError> {
        let password_hash = self.hasher.hash(&input.password).map_err(|e| {
            tracing::error!(error = %e, "cannot hash customer password");
            CustomerError::Internal
        })?;

        if input.id.is_unassigned() {
            let customer = self
                .customers
                .create(&input.name, &input.phone, &password_hash)
                .await
                .map_err(|e| CustomerError::classify(e, "create"))?;
            tracing::info!(customer_id = %customer.id, "customer created");
            Ok(customer)
        } else {
            let customer = self
                .customers
                .update(input.id, &input.name, &input.phone, &password_hash)
                .await
                .map_err(|e| CustomerError::classify(e, "update"))?;
            tracing::info!(customer_id = %customer.id, "customer updated");
            Ok(customer)
        }
    }

    /// Hard-delete a customer, returning its last state.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` or `CustomerError::Internal`.
    pub async fn delete_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        let customer = self
            .customers
            .delete(id)
            .await
            .map_err(|e| CustomerError::classify(e, "delete_by_id"))?;
        tracing::info!(customer_id = %id, "customer deleted");
        Ok(customer)
    }

    /// Mark a customer inactive.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` or `CustomerError::Internal`.
    pub async fn block_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.customers
            .set_active(id, false)
            .await
            .map_err(|e| CustomerError::classify(e, "block_by_id"))
    }

    /// Mark a customer active again.
    ///
    /// # Errors
    ///
    /// Returns `CustomerError::NotFound` or `CustomerError::Internal`.
    pub async fn unblock_by_id(&self, id: CustomerId) -> Result<Customer, CustomerError> {
        self.customers
            .set_active(id, true)
            .await
            .map_err(|e| CustomerError::classify(e, "unblock_by_id"))
    }
}
