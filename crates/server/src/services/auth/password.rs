//! Password hashing with Argon2id.
//!
//! Hashes are PHC strings, so salt and cost parameters travel with the hash
//! and verification works even after the configured costs change.

use argon2::{
    Algorithm, Argon2, Params, Version,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};

use super::error::HashError;
use super::token::fill_random;
use crate::config::HashingConfig;

/// Salt length in bytes.
const SALT_LEN: usize = 16;

/// Slow, salted password hasher.
#[derive(Clone)]
pub struct CredentialHasher {
    argon2: Argon2<'static>,
}

impl CredentialHasher {
    /// Build a hasher with the configured cost parameters.
    ///
    /// # Errors
    ///
    /// Returns `HashError::InvalidParams` if argon2 rejects the parameters.
    pub fn new(config: HashingConfig) -> Result<Self, HashError> {
        let defaults = Params::default();
        let params = Params::new(
            config.memory_kib.unwrap_or_else(|| defaults.m_cost()),
            config.iterations.unwrap_or_else(|| defaults.t_cost()),
            defaults.p_cost(),
            None,
        )
        .map_err(|e| HashError::InvalidParams(e.to_string()))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hash a plaintext password with a fresh random salt.
    ///
    /// # Errors
    ///
    /// Returns `HashError::Entropy` if no salt could be drawn, or
    /// `HashError::Hash` if argon2 fails.
    pub fn hash(&self, password: &str) -> Result<String, HashError> {
        let mut salt_bytes = [0u8; SALT_LEN];
        fill_random(&mut salt_bytes)?;
        let salt =
            SaltString::encode_b64(&salt_bytes).map_err(|e| HashError::Hash(e.to_string()))?;

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| HashError::Hash(e.to_string()))
    }

    /// Check a plaintext password against a stored hash.
    ///
    /// A malformed hash is a mismatch.
    #[must_use]
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        let Ok(parsed_hash) = PasswordHash::new(hash) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}

impl std::fmt::Debug for CredentialHasher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialHasher").finish_non_exhaustive()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    /// Cheap parameters so the tests stay fast.
    fn hasher() -> CredentialHasher {
        CredentialHasher::new(HashingConfig {
            memory_kib: Some(1024),
            iterations: Some(1),
        })
        .unwrap()
    }

    #[test]
    fn test_hash_is_not_plaintext() {
        let hash = hasher().hash("secret").unwrap();
        assert_ne!(hash, "secret");
        assert!(hash.starts_with("$argon2id$"));
    }

    #[test]
    fn test_verify_roundtrip() {
        let hasher = hasher();
        let hash = hasher.hash("secret").unwrap();
        assert!(hasher.verify("secret", &hash));
        assert!(!hasher.verify("Secret", &hash));
        assert!(!hasher.verify("", &hash));
    }

    #[test]
    fn test_same_password_gets_different_salts() {
        let hasher = hasher();
        let first = hasher.hash("secret").unwrap();
        let second = hasher.hash("secret").unwrap();
        assert_ne!(first, second);
        assert!(hasher.verify("secret", &first));
        assert!(hasher.verify("secret", &second));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = hasher();
        assert!(!hasher.verify("secret", ""));
        assert!(!hasher.verify("secret", "not-a-phc-string"));
        assert!(!hasher.verify("secret", "secret"));
    }

    #[test]
    fn test_verify_uses_parameters_from_hash() {
        let cheap = hasher();
        let hash = cheap.hash("secret").unwrap();

        let default_costs = CredentialHasher::new(HashingConfig::default()).unwrap();
        assert!(default_costs.verify("secret", &hash));
    }

    #[test]
    fn test_rejects_invalid_params() {
        let result = CredentialHasher::new(HashingConfig {
            memory_kib: Some(1),
            iterations: Some(1),
        });
        assert!(matches!(result, Err(HashError::InvalidParams(_))));
    }
}
