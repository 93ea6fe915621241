//! CLI command implementations.

pub mod manager;
pub mod migrate;

use secrecy::SecretString;

/// Database URL from `CUSTOMERS_DATABASE_URL`, falling back to `DATABASE_URL`.
///
/// Loads `.env` first if present.
pub fn database_url() -> Option<SecretString> {
    dotenvy::dotenv().ok();

    std::env::var("CUSTOMERS_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .ok()
        .map(SecretString::from)
}
