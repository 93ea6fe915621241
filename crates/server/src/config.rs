//! Server configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `CUSTOMERS_DATABASE_URL` - `PostgreSQL` connection string (falls back to `DATABASE_URL`)
//!
//! ## Optional
//! - `CUSTOMERS_HOST` - Bind address (default: 0.0.0.0)
//! - `CUSTOMERS_PORT` - Listen port (default: 9999)
//! - `CUSTOMERS_DB_MAX_CONNECTIONS` - Connection pool size (default: 10)
//! - `CUSTOMERS_TOKEN_TTL_SECS` - Lifetime of issued customer tokens (default: 3600)
//! - `CUSTOMERS_REQUEST_TIMEOUT_SECS` - Per-request deadline (default: 30)
//! - `CUSTOMERS_HASH_MEMORY_KIB` - Argon2 memory cost (default: argon2 default)
//! - `CUSTOMERS_HASH_ITERATIONS` - Argon2 time cost (default: argon2 default)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `LOG_FORMAT` - `json` for structured logs, anything else for text

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: &str = "9999";
const DEFAULT_MAX_CONNECTIONS: &str = "10";
const DEFAULT_TOKEN_TTL_SECS: &str = "3600";
const DEFAULT_REQUEST_TIMEOUT_SECS: &str = "30";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Server application configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// `PostgreSQL` database connection URL (contains password)
    pub database_url: SecretString,
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Maximum number of pooled database connections
    pub max_connections: u32,
    /// How long an issued customer token stays valid
    pub token_ttl: Duration,
    /// Deadline applied to every request
    pub request_timeout: Duration,
    /// Password hashing cost parameters
    pub hashing: HashingConfig,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name
    pub sentry_environment: Option<String>,
    /// Emit logs as JSON
    pub json_logs: bool,
}

/// Argon2 cost parameters. `None` keeps the library default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HashingConfig {
    /// Memory cost in KiB
    pub memory_kib: Option<u32>,
    /// Number of iterations
    pub iterations: Option<u32>,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let database_url = get_database_url("CUSTOMERS_DATABASE_URL")?;
        let host = get_parsed_or_default::<IpAddr>("CUSTOMERS_HOST", DEFAULT_HOST)?;
        let port = get_parsed_or_default::<u16>("CUSTOMERS_PORT", DEFAULT_PORT)?;
        let max_connections =
            get_parsed_or_default::<u32>("CUSTOMERS_DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        let token_ttl = get_duration_secs("CUSTOMERS_TOKEN_TTL_SECS", DEFAULT_TOKEN_TTL_SECS)?;
        let request_timeout = get_duration_secs(
            "CUSTOMERS_REQUEST_TIMEOUT_SECS",
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        let hashing = HashingConfig {
            memory_kib: get_parsed_optional("CUSTOMERS_HASH_MEMORY_KIB")?,
            iterations: get_parsed_optional("CUSTOMERS_HASH_ITERATIONS")?,
        };

        let json_logs = get_optional_env("LOG_FORMAT").is_some_and(|v| v.eq_ignore_ascii_case("json"));

        Ok(Self {
            database_url,
            host,
            port,
            max_connections,
            token_ttl,
            request_timeout,
            hashing,
            sentry_dsn: get_optional_env("SENTRY_DSN"),
            sentry_environment: get_optional_env("SENTRY_ENVIRONMENT"),
            json_logs,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get database URL with fallback to generic `DATABASE_URL`.
fn get_database_url(primary_key: &str) -> Result<SecretString, ConfigError> {
    if let Ok(value) = std::env::var(primary_key) {
        return Ok(SecretString::from(value));
    }
    if let Ok(value) = std::env::var("DATABASE_URL") {
        return Ok(SecretString::from(value));
    }
    Err(ConfigError::MissingEnvVar(primary_key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a raw value, naming the variable in the error.
fn parse_value<T>(key: &str, raw: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

/// Get and parse an environment variable, falling back to a default.
fn get_parsed_or_default<T>(key: &str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    parse_value(key, &get_env_or_default(key, default))
}

/// Get and parse an optional environment variable.
fn get_parsed_optional<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key)
        .map(|raw| parse_value(key, &raw))
        .transpose()
}

/// Get a positive number of seconds as a `Duration`.
fn get_duration_secs(key: &str, default: &str) -> Result<Duration, ConfigError> {
    parse_duration_secs(key, &get_env_or_default(key, default))
}

fn parse_duration_secs(key: &str, raw: &str) -> Result<Duration, ConfigError> {
    let secs: u64 = parse_value(key, raw)?;
    if secs == 0 {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "must be greater than zero".to_string(),
        ));
    }
    Ok(Duration::from_secs(secs))
}
