//! Customer CRUD server library.
//!
//! Customer records with HTTP basic auth for managers and bearer tokens for
//! customers, backed by `PostgreSQL`. The binary in `main.rs` only wires
//! configuration, logging and the listener around [`routes::app`].

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
