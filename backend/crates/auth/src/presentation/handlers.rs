//! HTTP Handlers

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use serde_json::Value;
use std::sync::Arc;

use crate::application::CredentialVerifier;
use crate::domain::repository::UserRepository;
use crate::error::{AuthError, AuthResult};
use crate::presentation::dto::{IdentityResponse, ProviderDescriptor, ProvidersResponse};

/// Shared state for auth handlers
#[derive(Clone)]
pub struct AuthAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub verifier: Arc<CredentialVerifier<R>>,
}

// ============================================================================
// Authorize
// ============================================================================

/// POST /api/auth/callback/credentials
///
/// 200 with the identity, or the same 401 body for every failure.
pub async fn authorize_credentials<R>(
    State(state): State<AuthAppState<R>>,
    body: Bytes,
) -> AuthResult<Json<IdentityResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let payload = parse_payload(&body);

    match state.verifier.authorize(payload).await {
        Some(identity) => Ok(Json(identity.into())),
        None => Err(AuthError::InvalidCredentials),
    }
}

// ============================================================================
// Providers
// ============================================================================

/// GET /api/auth/providers
pub async fn providers() -> Json<ProvidersResponse> {
    let provider = ProviderDescriptor::credentials();
    Json(ProvidersResponse::from([(provider.id, provider)]))
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Empty, `null` and unparsable bodies all count as "no payload"
fn parse_payload(body: &[u8]) -> Option<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return None;
    }

    match serde_json::from_slice::<Value>(body) {
        Ok(Value::Null) => None,
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(error = %e, "Credentials body is not JSON");
            None
        }
    }
}
