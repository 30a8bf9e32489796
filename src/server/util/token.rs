//! Opaque refresh token generation and hashing.

use rand::Rng;
use sha2::{Digest, Sha256};

const REFRESH_TOKEN_BYTES: usize = 32;

/// Generates a new refresh token: 32 random bytes, hex-encoded.
pub fn generate_refresh_token() -> String {
    let mut bytes = [0u8; REFRESH_TOKEN_BYTES];
    rand::rng().fill(&mut bytes);

    hex::encode(bytes)
}

/// SHA-256 of the token, hex-encoded. Only this value is stored.
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_distinct_hex_tokens() {
        let a = generate_refresh_token();
        let b = generate_refresh_token();

        assert_eq!(a.len(), REFRESH_TOKEN_BYTES * 2);
        assert!(a.chars().all(|c| c.is_ascii_hexdigit()));
        assert_ne!(a, b);
    }

    #[test]
    fn hashes_deterministically() {
        assert_eq!(
            hash_token("abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
        assert_ne!(hash_token("abc"), hash_token("abd"));
    }
}
