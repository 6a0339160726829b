//! Password Hashing and Verification
//!
//! Handles the two halves of a password check:
//! - [`ClearTextPassword`]: user input, zeroized on drop, length-checked
//! - [`HashedPassword`]: a stored hash in either Argon2id PHC format or
//!   bcrypt modular crypt format
//!
//! ## Security Features
//! - Comparison is delegated to the hashing libraries (constant time)
//! - Salts live inside the stored hash strings
//! - Optional pepper (application-wide secret appended before hashing)
//! - [`dummy_hash`] lets callers spend the same work when no hash exists

use std::fmt;

use argon2::{Argon2, PasswordHash, PasswordHasher, PasswordVerifier, password_hash::SaltString};
use rand::rngs::OsRng;
use thiserror::Error;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

// ============================================================================
// Constants
// ============================================================================

/// Minimum password length, in UTF-16 code units
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// bcrypt modular crypt hashes are always this long
const BCRYPT_HASH_LENGTH: usize = 60;

const BCRYPT_PREFIXES: &[&str] = &["$2a$", "$2b$", "$2x$", "$2y$"];

const DUMMY_PASSWORD: &str = "dummy password for timing equalization";

// ============================================================================
// Error Types
// ============================================================================

/// Password policy violation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PasswordPolicyError {
    /// Password is too short
    #[error("Password must be at least {min} characters (got {actual})")]
    TooShort { min: usize, actual: usize },
}

/// Password hashing/verification errors
#[derive(Debug, Error)]
pub enum PasswordHashError {
    /// Hashing operation failed
    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    /// Stored value is neither an Argon2 PHC string nor a bcrypt hash
    #[error("Invalid password hash format")]
    InvalidHashFormat,
}

// ============================================================================
// Clear Text Password (Zeroized on drop)
// ============================================================================

/// Clear text password with automatic memory zeroization
///
/// Does not implement `Clone`; debug output is redacted.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct ClearTextPassword(String);

impl ClearTextPassword {
    /// Create a new clear text password
    ///
    /// Length is counted in UTF-16 code units, the way browser-side form
    /// validation counts it: an emoji outside the BMP is two units. The value
    /// is kept exactly as typed: stored hashes were produced from the raw
    /// input, so no normalization or trimming happens here.
    pub fn new(raw: String) -> Result<Self, PasswordPolicyError> {
        let length = raw.encode_utf16().count();
        if length < MIN_PASSWORD_LENGTH {
            // Wrap first so the rejected input is still wiped.
            let _rejected = Self(raw);
            return Err(PasswordPolicyError::TooShort {
                min: MIN_PASSWORD_LENGTH,
                actual: length,
            });
        }

        Ok(Self(raw))
    }

    /// Create without validation (for testing)
    #[cfg(test)]
    pub fn new_unchecked(raw: String) -> Self {
        Self(raw)
    }

    pub(crate) fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    /// Password bytes with the pepper appended, wiped on drop
    fn peppered(&self, pepper: Option<&[u8]>) -> Zeroizing<Vec<u8>> {
        let mut bytes = Zeroizing::new(self.as_bytes().to_vec());
        if let Some(p) = pepper {
            bytes.extend_from_slice(p);
        }
        bytes
    }

    /// Hash the password using Argon2id with a random salt
    pub fn hash(&self, pepper: Option<&[u8]>) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let salt = SaltString::generate(OsRng);

        // OWASP defaults: m=19456 (19 MiB), t=2, p=1
        let hash = Argon2::default()
            .hash_password(&password_bytes, &salt)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash: hash.to_string(),
            scheme: HashScheme::Argon2,
        })
    }

    /// Hash the password using bcrypt at the given cost
    ///
    /// Produces the format written by older account tooling.
    pub fn hash_bcrypt(
        &self,
        pepper: Option<&[u8]>,
        cost: u32,
    ) -> Result<HashedPassword, PasswordHashError> {
        let password_bytes = self.peppered(pepper);
        let hash = bcrypt::hash(&*password_bytes, cost)
            .map_err(|e| PasswordHashError::HashingFailed(e.to_string()))?;

        Ok(HashedPassword {
            hash,
            scheme: HashScheme::Bcrypt,
        })
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

/// Algorithm family of a stored hash
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashScheme {
    /// PHC string, `$argon2id$v=19$...`
    Argon2,
    /// Modular crypt, `$2b$10$...`
    Bcrypt,
}

/// A stored password hash
///
/// The string embeds algorithm, parameters and salt, so verification needs
/// nothing but the clear text (and the pepper, if one was used).
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword {
    hash: String,
    scheme: HashScheme,
}

impl HashedPassword {
    /// Parse a hash as read from the database
    pub fn from_stored(s: impl Into<String>) -> Result<Self, PasswordHashError> {
        let hash = s.into();

        let scheme = if is_bcrypt_format(&hash) {
            HashScheme::Bcrypt
        } else {
            let parsed =
                PasswordHash::new(&hash).map_err(|_| PasswordHashError::InvalidHashFormat)?;
            if !parsed.algorithm.as_str().starts_with("argon2") {
                return Err(PasswordHashError::InvalidHashFormat);
            }
            HashScheme::Argon2
        };

        Ok(Self { hash, scheme })
    }

    pub fn as_str(&self) -> &str {
        &self.hash
    }

    pub fn scheme(&self) -> HashScheme {
        self.scheme
    }

    /// Verify a password against this hash
    ///
    /// Any library error (corrupt parameters, oversized input) counts as a
    /// mismatch.
    pub fn verify(&self, password: &ClearTextPassword, pepper: Option<&[u8]>) -> bool {
        let password_bytes = password.peppered(pepper);

        match self.scheme {
            HashScheme::Argon2 => {
                let Ok(parsed_hash) = PasswordHash::new(&self.hash) else {
                    return false;
                };
                // Parameters and variant come from the parsed hash.
                Argon2::default()
                    .verify_password(&password_bytes, &parsed_hash)
                    .is_ok()
            }
            HashScheme::Bcrypt => bcrypt::verify(&*password_bytes, &self.hash).unwrap_or(false),
        }
    }

    /// Whether the hash should be replaced with a fresh Argon2id hash
    pub fn needs_rehash(&self) -> bool {
        match self.scheme {
            HashScheme::Bcrypt => true,
            HashScheme::Argon2 => match PasswordHash::new(&self.hash) {
                Ok(parsed) => parsed.algorithm != argon2::Algorithm::Argon2id.ident(),
                Err(_) => true,
            },
        }
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashedPassword")
            .field("scheme", &self.scheme)
            .field("hash", &"[HASH]")
            .finish()
    }
}

// ============================================================================
// Timing equalization
// ============================================================================

/// Hash a fixed password with the given scheme
///
/// Callers verify against it when there is no usable stored hash, so the
/// negative answer costs what a real comparison costs. Pick the scheme and
/// cost the stored hashes use; `bcrypt_cost` is ignored for Argon2.
pub fn dummy_hash(
    scheme: HashScheme,
    bcrypt_cost: u32,
) -> Result<HashedPassword, PasswordHashError> {
    let password = ClearTextPassword(String::from(DUMMY_PASSWORD));
    match scheme {
        HashScheme::Argon2 => password.hash(None),
        HashScheme::Bcrypt => password.hash_bcrypt(None, bcrypt_cost),
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn is_bcrypt_format(hash: &str) -> bool {
    hash.len() == BCRYPT_HASH_LENGTH && BCRYPT_PREFIXES.iter().any(|p| hash.starts_with(p))
}

// ============================================================================
// Tests
// ============================================================================
