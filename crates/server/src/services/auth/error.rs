//! Authentication error types.

use thiserror::Error;

/// Errors that can occur while issuing a customer token.
///
/// Database failures are logged where they happen and collapse into
/// `Internal`, so no engine detail reaches the caller.
#[derive(Debug, Error)]
pub enum AuthError {
    /// No customer has the given phone.
    #[error("no such user")]
    NoSuchUser,

    /// Password does not match the stored hash.
    #[error("invalid password")]
    InvalidPassword,

    /// Storage, hashing or entropy failure.
    #[error("internal error")]
    Internal,
}

/// Errors from the credential hasher.
#[derive(Debug, Error)]
pub enum HashError {
    /// Cost parameters were rejected by argon2.
    #[error("invalid hashing parameters: {0}")]
    InvalidParams(String),

    /// Salt could not be generated.
    #[error(transparent)]
    Entropy(#[from] EntropyError),

    /// Hash computation failed.
    #[error("password hashing failed: {0}")]
    Hash(String),
}

/// The operating system could not supply the requested random bytes.
#[derive(Debug, Error)]
#[error("secure random source failed: {0}")]
pub struct EntropyError(pub String);
