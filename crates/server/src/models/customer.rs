//! Customer domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use customer_crud_core::CustomerId;

/// A stored customer record.
///
/// The password hash is loaded with the row but never serialized; the JSON
/// projection handed to callers is `{id, name, phone, active, created}`.
#[derive(Clone, Serialize, sqlx::FromRow)]
pub struct Customer {
    /// Identity assigned by the database.
    pub id: CustomerId,
    /// Display name.
    pub name: String,
    /// Phone number, doubles as the customer login.
    pub phone: String,
    /// Argon2 PHC string.
    #[serde(skip)]
    #[sqlx(rename = "password")]
    pub password_hash: String,
    /// `false` once the customer is blocked.
    pub active: bool,
    /// Creation time, set by the database.
    pub created: DateTime<Utc>,
}

impl std::fmt::Debug for Customer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Customer")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password_hash", &"[REDACTED]")
            .field("active", &self.active)
            .field("created", &self.created)
            .finish()
    }
}

/// Body of `POST /customers`.
///
/// An absent or zero `id` creates a new customer; any other value replaces
/// every mutable field of that customer, password included.
#[derive(Clone, Deserialize)]
pub struct CustomerInput {
    #[serde(default)]
    pub id: CustomerId,
    pub name: String,
    pub phone: String,
    /// Plaintext password, hashed before it reaches the database.
    pub password: String,
}

impl std::fmt::Debug for CustomerInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerInput")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"[REDACTED]")
            .finish()
    }
}
