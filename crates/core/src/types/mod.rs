//! Core types for the customer CRUD service.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod token;

pub use id::*;
pub use token::{CustomerToken, TokenError};
