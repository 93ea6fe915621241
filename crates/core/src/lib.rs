//! Customer CRUD Core - Shared types library.
//!
//! This crate provides common types used across the customer CRUD components:
//! - `server` - HTTP backend for customer records and customer tokens
//! - `cli` - Command-line tools for migrations and manager accounts
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no database access,
//! no HTTP clients. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for customer IDs and session tokens

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
