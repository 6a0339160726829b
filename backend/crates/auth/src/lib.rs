//! Auth (Authentication) Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - Entities, value objects, repository trait
//! - `application/` - The credential verifier and its configuration
//! - `infra/` - Database implementations
//! - `presentation/` - HTTP handlers, DTOs, router
//!
//! ## Features
//! - Email + password sign-in against an existing `users` table
//! - Uniform denial for every failure cause; causes go to the logs only
//! - Stored hashes in Argon2id or bcrypt format
//!
//! ## Security Model
//! - The identity returned on success never carries the password hash
//! - Password comparison happens inside the hashing libraries (constant time)
//! - Unknown emails cost a dummy hash verification (configurable)
//! - Diagnostics never contain the password, the hash or the full email
//!
//! Sessions, CSRF protection and rate limiting belong to the layer that
//! calls into this crate.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::{AuthConfig, CredentialVerifier};
pub use domain::Identity;
pub use domain::value_object::user_password::HashScheme;
pub use error::{AuthError, AuthResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::router::{auth_router, auth_router_generic};

// Returned by `AuthError::kind`
pub use kernel::error::kind::ErrorKind;
