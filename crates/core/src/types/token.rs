//! Customer session token type.
//!
//! Tokens are opaque, hex-encoded random strings. The wrapper keeps them out
//! of `Debug` output so they don't end up in logs.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors produced when parsing an untrusted token string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Token has the wrong length.
    #[error("token must be {expected} characters (got {actual})")]
    InvalidLength { expected: usize, actual: usize },

    /// Token contains something other than lowercase hex digits.
    #[error("token must be lowercase hex")]
    InvalidCharacter,
}

/// An issued customer session token.
#[derive(Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CustomerToken(String);

impl CustomerToken {
    /// Number of random bytes behind every token.
    pub const BYTE_LEN: usize = 256;

    /// Length of the hex-encoded form.
    pub const HEX_LEN: usize = Self::BYTE_LEN * 2;

    /// Parse a token received from a client.
    ///
    /// # Errors
    ///
    /// Returns `TokenError` if the string cannot be a token this service issued.
    pub fn parse(token: &str) -> Result<Self, TokenError> {
        if token.len() != Self::HEX_LEN {
            return Err(TokenError::InvalidLength {
                expected: Self::HEX_LEN,
                actual: token.len(),
            });
        }

        if !token
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
        {
            return Err(TokenError::InvalidCharacter);
        }

        Ok(Self(token.to_owned()))
    }

    /// Wrap an already-encoded token without validation.
    ///
    /// Used for values produced by the token generator or read back from
    /// the database.
    #[must_use]
    pub const fn from_encoded(token: String) -> Self {
        Self(token)
    }

    /// Get the token as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for CustomerToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = self.0.get(..8).unwrap_or("");
        write!(f, "CustomerToken({prefix}…)")
    }
}

impl AsRef<str> for CustomerToken {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Type<::sqlx::Postgres> for CustomerToken {
    fn type_info() -> ::sqlx::postgres::PgTypeInfo {
        <String as ::sqlx::Type<::sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &::sqlx::postgres::PgTypeInfo) -> bool {
        <String as ::sqlx::Type<::sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> ::sqlx::Decode<'r, ::sqlx::Postgres> for CustomerToken {
    fn decode(
        value: ::sqlx::postgres::PgValueRef<'r>,
    ) -> Result<Self, ::sqlx::error::BoxDynError> {
        let token = <String as ::sqlx::Decode<::sqlx::Postgres>>::decode(value)?;
        Ok(Self(token))
    }
}

#[cfg(feature = "postgres")]
impl ::sqlx::Encode<'_, ::sqlx::Postgres> for CustomerToken {
    fn encode_by_ref(
        &self,
        buf: &mut ::sqlx::postgres::PgArgumentBuffer,
    ) -> Result<::sqlx::encode::IsNull, ::sqlx::error::BoxDynError> {
        <String as ::sqlx::Encode<::sqlx::Postgres>>::encode_by_ref(&self.0, buf)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_accepts_issued_shape() {
        let raw = "ab".repeat(CustomerToken::BYTE_LEN);
        let token = CustomerToken::parse(&raw).expect("valid token");
        assert_eq!(token.as_str(), raw);
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        let err = CustomerToken::parse("abc123").unwrap_err();
        assert_eq!(
            err,
            TokenError::InvalidLength {
                expected: CustomerToken::HEX_LEN,
                actual: 6
            }
        );
    }

    #[test]
    fn test_parse_rejects_non_hex() {
        let raw = "zz".repeat(CustomerToken::BYTE_LEN);
        assert_eq!(
            CustomerToken::parse(&raw).unwrap_err(),
            TokenError::InvalidCharacter
        );

        let upper = "AB".repeat(CustomerToken::BYTE_LEN);
        assert!(CustomerToken::parse(&upper).is_err());
    }

    #[test]
    fn test_debug_hides_token() {
        let raw = "0123456789abcdef".repeat(32);
        let token = CustomerToken::from_encoded(raw.clone());
        let debug = format!("{token:?}");
        assert!(debug.starts_with("CustomerToken(01234567"));
        assert!(!debug.contains(&raw));
    }
}
