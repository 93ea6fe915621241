//! Domain models and wire types for the customer service.

pub mod customer;
pub mod token;

pub use customer::{Customer, CustomerInput};
pub use token::{TokenRequest, TokenResponse, TokenStatus, TokenValidation, ValidateRequest};
