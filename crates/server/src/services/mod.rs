//! Business logic services.
//!
//! # Services
//!
//! - `customers` - Customer store (CRUD, block/unblock) with error classification
//! - `auth` - Customer token issuance and validation, manager authentication,
//!   password hashing and token generation

pub mod auth;
pub mod customers;
