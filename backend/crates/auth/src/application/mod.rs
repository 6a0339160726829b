//! Application Layer
//!
//! Use cases and application services.

pub mod authorize;
pub mod config;
pub mod credentials;

// Re-exports
pub use authorize::CredentialVerifier;
pub use config::{AuthConfig, DEFAULT_DUMMY_BCRYPT_COST};
pub use credentials::ValidCredentials;
