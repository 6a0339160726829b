//! Authorize Use Case
//!
//! The credentials check behind a login attempt: validate the payload, look
//! the user up by email, compare the password against the stored hash.
//! Every failure collapses to `None`; the cause is only logged.

use std::sync::Arc;

use serde_json::Value;

use crate::application::config::AuthConfig;
use crate::application::credentials::ValidCredentials;
use crate::domain::entity::identity::Identity;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::user_password::{RawPassword, UserPassword};
#[cfg(test)]
use crate::domain::value_object::user_password::HashScheme;
use crate::error::{AuthError, AuthResult};

/// Credential verifier
pub struct CredentialVerifier<U>
where
    U: UserRepository,
{
    user_repo: Arc<U>,
    config: Arc<AuthConfig>,
    dummy: Option<UserPassword>,
}

impl<U> CredentialVerifier<U>
where
    U: UserRepository,
{
    /// Build the verifier; with timing equalization on, this hashes the dummy
    /// password once (a single bcrypt or Argon2 hash)
    pub fn new(user_repo: Arc<U>, config: Arc<AuthConfig>) -> Self {
        let dummy = if config.equalize_timing {
            match UserPassword::dummy(config.dummy_scheme, config.dummy_bcrypt_cost) {
                Ok(dummy) => Some(dummy),
                Err(e) => {
                    tracing::warn!(error = %e, "Dummy hash unavailable, timing equalization off");
                    None
                }
            }
        } else {
            None
        };

        Self {
            user_repo,
            config,
            dummy,
        }
    }

    /// Authorize a login attempt
    ///
    /// Returns the identity on success and `None` on any failure: absent or
    /// malformed payload, unknown email, unreachable store, wrong password.
    pub async fn authorize(&self, payload: Option<Value>) -> Option<Identity> {
        let credentials = match payload
            .ok_or(AuthError::MissingCredentials)
            .and_then(ValidCredentials::parse)
        {
            Ok(credentials) => credentials,
            Err(e) => {
                e.log(None);
                return None;
            }
        };

        let email_domain = credentials.email.domain().to_string();

        match self.verify(credentials).await {
            Ok(identity) => {
                tracing::info!(user_id = %identity.id, "User authenticated");
                Some(identity)
            }
            Err(e) => {
                e.log(Some(&email_domain));
                None
            }
        }
    }

    /// Check validated credentials, keeping the failure cause
    ///
    /// A single lookup and a single hash comparison; no retries.
    pub async fn verify(&self, credentials: ValidCredentials) -> AuthResult<Identity> {
        let ValidCredentials { email, password } = credentials;

        let user = match self.user_repo.find_by_email(&email).await {
            Ok(user) => user,
            // No hash to compare against: spend the work anyway.
            Err(e @ (AuthError::UserNotFound | AuthError::Internal(_))) => {
                self.spend_dummy_verification(password).await;
                return Err(e);
            }
            Err(e) => return Err(e),
        };

        let stored = user.password.clone();
        let config = Arc::clone(&self.config);
        let matches =
            tokio::task::spawn_blocking(move || stored.verify(&password, config.pepper()))
                .await
                .map_err(|e| AuthError::Internal(format!("password verification task: {}", e)))?;

        if !matches {
            return Err(AuthError::InvalidCredentials);
        }

        if user.password.needs_rehash() {
            tracing::debug!(
                user_id = %user.id,
                scheme = ?user.password.scheme(),
                "Stored password hash is due for a rehash"
            );
        }

        Ok(user.into_identity())
    }

    async fn spend_dummy_verification(&self, password: RawPassword) {
        let Some(dummy) = self.dummy.clone() else {
            return;
        };
        let config = Arc::clone(&self.config);
        let result =
            tokio::task::spawn_blocking(move || dummy.verify(&password, config.pepper())).await;
        if let Err(e) = result {
            tracing::debug!(error = %e, "Dummy verification task failed");
        }
    }

    #[cfg(test)]
    pub(crate) fn dummy_scheme(&self) -> Option<HashScheme> {
        self.dummy.as_ref().map(UserPassword::scheme)
    }
}
