//! Credentials Payload
//!
//! The untyped credentials map as submitted, and the typed form that exists
//! only once validation succeeded.

use serde::Deserialize;
use serde_json::Value;

use crate::domain::value_object::{email::Email, user_password::RawPassword};
use crate::error::{AuthError, AuthResult};

/// Shape of the credentials map; extra keys (csrf tokens, callback URLs)
/// are ignored
#[derive(Deserialize)]
struct CredentialsPayload {
    email: String,
    password: String,
}

/// Credentials that passed schema validation
#[derive(Debug)]
pub struct ValidCredentials {
    pub email: Email,
    pub password: RawPassword,
}

impl ValidCredentials {
    /// Validate an untyped payload
    ///
    /// Requires an object with string `email` and `password`, a well-formed
    /// email and a password of at least six characters.
    pub fn parse(payload: Value) -> AuthResult<Self> {
        // serde would also accept a two-element array for the struct
        if !payload.is_object() {
            return Err(AuthError::Validation("payload: not an object".to_string()));
        }

        let CredentialsPayload { email, password } = serde_json::from_value(payload)
            .map_err(|e| AuthError::Validation(format!("payload: {}", shape_error(&e))))?;

        // Password first: it is moved into its zeroizing wrapper even if the
        // email turns out to be invalid.
        let password = RawPassword::new(password)?;
        let email = Email::new(email)?;

        Ok(Self { email, password })
    }
}

/// Category of a deserialization error without echoing any input
fn shape_error(err: &serde_json::Error) -> &'static str {
    use serde_json::error::Category;
    match err.classify() {
        Category::Data => "missing or mistyped field",
        Category::Syntax | Category::Eof => "malformed",
        Category::Io => "unreadable",
    }
}
