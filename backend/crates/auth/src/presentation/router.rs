//! Auth Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::application::{AuthConfig, CredentialVerifier};
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, AuthAppState};

/// Create the Auth router with PostgreSQL repository
pub fn auth_router(repo: PgUserRepository, config: AuthConfig) -> Router {
    auth_router_generic(repo, config)
}

/// Create a generic Auth router for any repository implementation
pub fn auth_router_generic<R>(repo: R, config: AuthConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let state = AuthAppState {
        verifier: Arc::new(CredentialVerifier::new(Arc::new(repo), Arc::new(config))),
    };

    Router::new()
        .route("/providers", get(handlers::providers))
        .route(
            "/callback/credentials",
            post(handlers::authorize_credentials::<R>),
        )
        .with_state(state)
}
