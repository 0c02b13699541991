//! Password hashing with bcrypt. Hashes are salted and irreversible; the
//! plaintext is never persisted.

use crate::error::Error;
use bcrypt::{hash, verify, DEFAULT_COST};
use tracing::error;

/// Hash a plaintext password.
///
/// # Errors
/// Returns an internal error if hashing fails.
pub fn hash_password(plaintext: &str) -> Result<String, Error> {
    hash(plaintext, DEFAULT_COST).map_err(|e| {
        error!("Failed to hash password: {:?}", e);
        Error::internal("Failed to hash password")
    })
}

/// Compare a plaintext password against a stored hash.
///
/// An unparsable hash counts as a mismatch, not a server fault.
#[must_use]
pub fn verify_password(plaintext: &str, hashed: &str) -> bool {
    verify(plaintext, hashed).unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hashed = hash_password("secret1").unwrap();

        assert_ne!(hashed, "secret1");
        assert!(verify_password("secret1", &hashed));
        assert!(!verify_password("secret2", &hashed));
    }

    #[test]
    fn test_hashes_are_salted() {
        let first = hash_password("secret1").unwrap();
        let second = hash_password("secret1").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_garbage_hash_is_mismatch() {
        assert!(!verify_password("secret1", "not-a-bcrypt-hash"));
    }
}
