//! Auth Error Types
//!
//! Every way a login attempt can fail, kept distinct for diagnostics and
//! collapsed into a single denial before anything reaches the caller.

use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Auth-specific result type alias
pub type AuthResult<T> = Result<T, AuthError>;

/// Auth-specific error variants
#[derive(Debug, Error)]
pub enum AuthError {
    /// No credentials payload was supplied
    #[error("Credentials missing")]
    MissingCredentials,

    /// Payload failed schema validation
    #[error("Credentials validation failed: {0}")]
    Validation(String),

    /// No user with the given email
    #[error("User not found")]
    UserNotFound,

    /// Password did not match the stored hash
    #[error("Invalid credentials")]
    InvalidCredentials,

    /// Store lookup failed (connection, query)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error (corrupt stored hash, blocking task failure)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AuthError {
    /// Stable tag for diagnostics
    pub fn reason(&self) -> &'static str {
        match self {
            AuthError::MissingCredentials => "missing_payload",
            AuthError::Validation(_) => "validation_failed",
            AuthError::UserNotFound => "user_not_found",
            AuthError::InvalidCredentials => "password_mismatch",
            AuthError::Database(_) => "store_unavailable",
            AuthError::Internal(_) => "internal",
        }
    }

    /// ErrorKind as seen by operators; clients only ever see `Unauthorized`
    pub fn kind(&self) -> ErrorKind {
        match self {
            AuthError::MissingCredentials | AuthError::Validation(_) => ErrorKind::BadRequest,
            AuthError::UserNotFound => ErrorKind::NotFound,
            AuthError::InvalidCredentials => ErrorKind::Unauthorized,
            AuthError::Database(_) => ErrorKind::ServiceUnavailable,
            AuthError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// The uniform denial sent to clients, whatever the cause
    pub fn to_denial(&self) -> AppError {
        AppError::unauthorized("Invalid credentials")
            .with_action("Check your email and password and try again")
    }

    /// Log the diagnostic for this failure
    ///
    /// Only the email's domain is ever passed in; passwords and hashes never
    /// reach this function.
    pub(crate) fn log(&self, email_domain: Option<&str>) {
        let reason = self.reason();
        let email_domain = email_domain.unwrap_or("-");
        match self {
            AuthError::Database(e) => {
                tracing::error!(
                    reason,
                    email_domain,
                    kind = %self.kind(),
                    error = %e,
                    "Credential lookup failed"
                );
            }
            AuthError::Internal(msg) => {
                tracing::error!(reason, email_domain, message = %msg, "Credential check failed");
            }
            AuthError::InvalidCredentials => {
                tracing::warn!(reason, email_domain, "Login denied: wrong password");
            }
            AuthError::UserNotFound => {
                tracing::info!(reason, email_domain, "Login denied: user not found");
            }
            AuthError::Validation(detail) => {
                tracing::info!(reason, detail = %detail, "Login denied: validation failed");
            }
            AuthError::MissingCredentials => {
                tracing::info!(reason, "Login denied: no credentials");
            }
        }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        self.to_denial().into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_cause_renders_the_same_denial() {
        let causes = [
            AuthError::MissingCredentials,
            AuthError::Validation("email: invalid format".to_string()),
            AuthError::UserNotFound,
            AuthError::InvalidCredentials,
            AuthError::Database(sqlx::Error::PoolTimedOut),
            AuthError::Internal("join error".to_string()),
        ];

        for cause in &causes {
            let denial = cause.to_denial();
            assert_eq!(denial.kind(), ErrorKind::Unauthorized);
            assert_eq!(denial.message(), "Invalid credentials");
        }
    }

    #[test]
    fn test_reasons_are_distinct() {
        let mut reasons = vec![
            AuthError::MissingCredentials.reason(),
            AuthError::Validation(String::new()).reason(),
            AuthError::UserNotFound.reason(),
            AuthError::InvalidCredentials.reason(),
            AuthError::Database(sqlx::Error::PoolTimedOut).reason(),
            AuthError::Internal(String::new()).reason(),
        ];
        reasons.sort_unstable();
        reasons.dedup();
        assert_eq!(reasons.len(), 6);
    }

    #[test]
    fn test_into_response_is_401() {
        let response = AuthError::Database(sqlx::Error::PoolTimedOut).into_response();
        assert_eq!(response.status().as_u16(), 401);
    }
}
