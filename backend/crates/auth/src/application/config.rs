//! Application Configuration
//!
//! Configuration for the Auth application layer.

use crate::domain::value_object::user_password::HashScheme;

/// bcrypt cost of the hashes written by the account tooling
pub const DEFAULT_DUMMY_BCRYPT_COST: u32 = 10;

/// Auth application configuration
#[derive(Debug, Clone)]
pub struct AuthConfig {
    /// Password pepper (optional, application-wide secret)
    ///
    /// Must match whatever was used when the stored hashes were written.
    pub password_pepper: Option<Vec<u8>>,
    /// Verify against a dummy hash when the email is unknown or the stored
    /// hash is unreadable, so those denials take as long as a wrong password
    pub equalize_timing: bool,
    /// Scheme of the dummy hash; should match the stored hashes
    pub dummy_scheme: HashScheme,
    /// bcrypt cost of the dummy hash (ignored for Argon2)
    pub dummy_bcrypt_cost: u32,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            password_pepper: None,
            equalize_timing: true,
            dummy_scheme: HashScheme::Bcrypt,
            dummy_bcrypt_cost: DEFAULT_DUMMY_BCRYPT_COST,
        }
    }
}

impl AuthConfig {
    /// Config for tests and local development: no timing equalization
    pub fn development() -> Self {
        Self {
            equalize_timing: false,
            ..Default::default()
        }
    }

    /// Get password pepper as slice
    pub fn pepper(&self) -> Option<&[u8]> {
        self.password_pepper.as_deref()
    }
}
