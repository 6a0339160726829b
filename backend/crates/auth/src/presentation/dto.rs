//! API DTOs (Data Transfer Objects)

use serde::Serialize;
use std::collections::BTreeMap;

use crate::domain::entity::identity::Identity;

// ============================================================================
// Authorize
// ============================================================================

/// Successful credentials callback: the principal for the session layer
#[derive(Debug, Clone, Serialize)]
pub struct IdentityResponse {
    pub id: String,
    pub email: String,
    pub name: String,
}

impl From<Identity> for IdentityResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            email: identity.email.as_str().to_string(),
            name: identity.name,
        }
    }
}

// ============================================================================
// Providers
// ============================================================================

/// Input field the login form should render
#[derive(Debug, Clone, Serialize)]
pub struct CredentialField {
    pub label: &'static str,
    #[serde(rename = "type")]
    pub field_type: &'static str,
}

/// Description of a sign-in provider
#[derive(Debug, Clone, Serialize)]
pub struct ProviderDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub provider_type: &'static str,
    pub credentials: BTreeMap<&'static str, CredentialField>,
}

impl ProviderDescriptor {
    /// The email/password provider
    pub fn credentials() -> Self {
        let credentials = BTreeMap::from([
            (
                "email",
                CredentialField {
                    label: "Email",
                    field_type: "email",
                },
            ),
            (
                "password",
                CredentialField {
                    label: "Password",
                    field_type: "password",
                },
            ),
        ]);

        Self {
            id: "credentials",
            name: "Credentials",
            provider_type: "credentials",
            credentials,
        }
    }
}

/// Providers keyed by id
pub type ProvidersResponse = BTreeMap<&'static str, ProviderDescriptor>;
