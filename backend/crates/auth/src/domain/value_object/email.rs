//! Email Value Object
//!
//! A login email that passed format validation.
//! Lookups match the stored column exactly, so the value is kept verbatim:
//! no trimming, no case folding.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

use crate::error::{AuthError, AuthResult};

/// Maximum email length (per RFC 5321)
///
/// Stricter than plain format validation; a longer address cannot belong to
/// a stored user, so it is rejected before the lookup.
const EMAIL_MAX_LENGTH: usize = 254;

/// Common web-form email shape: dotted alphanumeric labels, alphabetic TLD.
/// Leading dots and `..` are rejected separately (no lookahead in `regex`).
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern is valid")
});

/// Email address value object
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Email(String);

impl Email {
    /// Create a new email with validation
    pub fn new(email: impl Into<String>) -> AuthResult<Self> {
        let email = email.into();

        if email.is_empty() {
            return Err(AuthError::Validation("email: required".to_string()));
        }

        if email.len() > EMAIL_MAX_LENGTH {
            return Err(AuthError::Validation(format!(
                "email: longer than {} characters",
                EMAIL_MAX_LENGTH
            )));
        }

        if !Self::is_valid_format(&email) {
            return Err(AuthError::Validation("email: invalid format".to_string()));
        }

        Ok(Self(email))
    }

    fn is_valid_format(email: &str) -> bool {
        !email.starts_with('.') && !email.contains("..") && EMAIL_PATTERN.is_match(email)
    }

    /// Create from database value (assumed already validated)
    pub fn from_db(email: impl Into<String>) -> Self {
        Self(email.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part after `@`; the only piece of an email that goes into logs
    pub fn domain(&self) -> &str {
        self.0.rsplit_once('@').map(|(_, d)| d).unwrap_or("")
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_valid() {
        assert!(Email::new("a@b.com").is_ok());
        assert!(Email::new("user@example.com").is_ok());
        assert!(Email::new("user.name@example.co.jp").is_ok());
        assert!(Email::new("user+tag@example.com").is_ok());
        assert!(Email::new("o'brien_x@mail-host.org").is_ok());
    }

    #[test]
    fn test_email_invalid() {
        assert!(Email::new("").is_err());
        assert!(Email::new("not-an-email").is_err());
        assert!(Email::new("userexample.com").is_err());
        assert!(Email::new("user@").is_err());
        assert!(Email::new("@example.com").is_err());
        assert!(Email::new("user@@example.com").is_err());
        assert!(Email::new("user@example").is_err());
        assert!(Email::new("user@example.c").is_err());
        assert!(Email::new(".user@example.com").is_err());
        assert!(Email::new("us..er@example.com").is_err());
        assert!(Email::new("user.@example.com").is_err());
        assert!(Email::new("user@-example.com").is_err());
        assert!(Email::new(" user@example.com").is_err());
    }

    #[test]
    fn test_email_too_long() {
        let email = format!("{}@example.com", "a".repeat(250));
        assert!(matches!(Email::new(email), Err(AuthError::Validation(_))));

        let longest = format!("{}@example.com", "a".repeat(EMAIL_MAX_LENGTH - 12));
        assert_eq!(longest.len(), EMAIL_MAX_LENGTH);
        assert!(Email::new(longest).is_ok());
    }

    #[test]
    fn test_email_kept_verbatim() {
        let email = Email::new("User@Example.COM").unwrap();
        assert_eq!(email.as_str(), "User@Example.COM");
    }

    #[test]
    fn test_email_domain() {
        let email = Email::new("user@example.com").unwrap();
        assert_eq!(email.domain(), "example.com");
    }

    #[test]
    fn test_validation_message_omits_address() {
        let err = Email::new("secret-person@nowhere").unwrap_err();
        assert!(!err.to_string().contains("secret-person"));
    }
}
