//! Random token generation.
//!
//! Bytes come straight from the operating system RNG. A failed or short read
//! is an error; the buffer is never padded or reused.

use rand::TryRngCore;
use rand::rngs::OsRng;

use customer_crud_core::CustomerToken;

use super::error::EntropyError;

/// Fill `buf` with bytes from the OS random source.
///
/// # Errors
///
/// Returns `EntropyError` if the OS cannot supply the bytes.
pub fn fill_random(buf: &mut [u8]) -> Result<(), EntropyError> {
    OsRng
        .try_fill_bytes(buf)
        .map_err(|e| EntropyError(e.to_string()))
}

/// Generate `byte_len` random bytes and hex-encode them.
///
/// # Errors
///
/// Returns `EntropyError` if the OS cannot supply the bytes.
pub fn generate(byte_len: usize) -> Result<String, EntropyError> {
    let mut bytes = vec![0u8; byte_len];
    fill_random(&mut bytes)?;
    Ok(hex::encode(bytes))
}

/// Generate a customer session token of the standard size.
///
/// # Errors
///
/// Returns `EntropyError` if the OS cannot supply the bytes.
pub fn generate_customer_token() -> Result<CustomerToken, EntropyError> {
    generate(CustomerToken::BYTE_LEN).map(CustomerToken::from_encoded)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_length_is_twice_bytes() {
        assert_eq!(generate(16).unwrap().len(), 32);
        assert_eq!(generate(0).unwrap().len(), 0);
    }

    #[test]
    fn test_generate_is_lowercase_hex() {
        let token = generate(64).unwrap();
        assert!(token.bytes().all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b)));
    }

    #[test]
    fn test_customer_token_parses_back() {
        let token = generate_customer_token().unwrap();
        assert_eq!(token.as_str().len(), CustomerToken::HEX_LEN);
        assert_eq!(CustomerToken::parse(token.as_str()).unwrap(), token);
    }

    #[test]
    fn test_tokens_differ() {
        let first = generate_customer_token().unwrap();
        let second = generate_customer_token().unwrap();
        assert_ne!(first, second);
    }
}
