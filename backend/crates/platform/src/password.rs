//! Password Hashing and Verification
//!
//! bcrypt-based password handling:
//! - Fresh random salt per hash, fixed cost factor
//! - Zeroization of clear text passwords
//! - Constant-time comparison (inside the bcrypt library)
//!
//! The clear text never leaves this module unhashed and is erased from
//! memory on drop.

use std::fmt;

use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// bcrypt cost factor used for all new hashes.
pub const BCRYPT_COST: u32 = 10;

// ============================================================================
// Error Types
// ============================================================================

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored hash is not a valid bcrypt string
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization.
///
/// ## Security
/// - Implements `Zeroize` and `ZeroizeOnDrop`
/// - Does not implement `Clone` to prevent accidental copies
/// - Debug output is redacted
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Wrap a raw password string.
    ///
    /// No policy is applied here; callers validate at the form boundary.
    pub fn new(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }

    /// Hash the password with bcrypt.
    ///
    /// A fresh random salt is generated per call, so hashing the same
    /// password twice yields different strings.
    pub fn hash(&self) -> Result<HashedPassword, PasswordHashError> {
        let hash = bcrypt::hash(self.as_str(), BCRYPT_COST)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword { hash })
    }
}

impl fmt::Debug for ClearTextPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ClearTextPassword")
            .field(&"[REDACTED]")
            .finish()
    }
}

// ============================================================================
// Hashed Password (Safe to store)
// ============================================================================

/// bcrypt hash in modular crypt format (`$2b$10$...`).
///
/// The string embeds the algorithm version, cost factor, and salt, so
/// verification needs nothing beyond the stored value.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
}

impl HashedPassword {
    /// Create from a stored hash string (e.g. from the database).
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        // A bcrypt string always starts with a $2x$ version prefix.
        if !hash.starts_with("$2") {
            return Err(PasswordHashError::InvalidHashFormat);
        }

        Ok(Self { hash })
    }

    /// Get the hash string for storage
    pub fn as_str(&self) -> &str {
        &self.hash
    }

    /// Verify a password against this hash.
    ///
    /// The bcrypt library performs the comparison in constant time.
    /// An unparseable stored hash verifies as false rather than erroring:
    /// the caller cannot do anything better with a corrupt credential.
    pub fn verify(&self, password: &ClearTextPassword) -> bool {
        bcrypt::verify(password.as_str(), &self.hash).unwrap_or(false)
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let password = ClearTextPassword::new("pw1".to_string());
        let hashed = password.hash().unwrap();

        assert!(hashed.verify(&password));

        let wrong = ClearTextPassword::new("pw2".to_string());
        assert!(!hashed.verify(&wrong));
    }

    #[test]
    fn test_hash_never_equals_plaintext() {
        let password = ClearTextPassword::new("hunter2".to_string());
        let hashed = password.hash().unwrap();
        assert_ne!(hashed.as_str(), "hunter2");
    }

    #[test]
    fn test_hash_uses_fixed_cost() {
        let password = ClearTextPassword::new("hunter2".to_string());
        let hashed = password.hash().unwrap();
        // $2b$10$<salt+digest>
        assert!(hashed.as_str().contains("$10$"));
    }

    #[test]
    fn test_fresh_salt_per_hash() {
        let password = ClearTextPassword::new("hunter2".to_string());
        let first = password.hash().unwrap();
        let second = password.hash().unwrap();
        assert_ne!(first.as_str(), second.as_str());
        assert!(first.verify(&password));
        assert!(second.verify(&password));
    }

    #[test]
    fn test_stored_roundtrip() {
        let password = ClearTextPassword::new("hunter2".to_string());
        let hashed = password.hash().unwrap();

        let restored = HashedPassword::from_stored(hashed.as_str().to_string()).unwrap();
        assert!(restored.verify(&password));
    }

    #[test]
    fn test_invalid_stored_hash() {
        let result = HashedPassword::from_stored("not_a_bcrypt_hash");
        assert!(result.is_err());
    }

    #[test]
    fn test_debug_redaction() {
        let password = ClearTextPassword::new("secret".to_string());
        let debug_output = format!("{:?}", password);
        assert!(debug_output.contains("REDACTED"));
        assert!(!debug_output.contains("secret"));
    }
}
