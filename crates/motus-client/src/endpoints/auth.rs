//! Authentication endpoints.

use serde::Deserialize;
use serde_json::json;
use tracing::instrument;

use motus_core::{AuthToken, Credentials, Result, UserProfile};

use crate::client::ApiClient;
use crate::request::RequestSpec;

/// Endpoint for session login.
const LOGIN: &str = "/auth/login";

/// Endpoint for account registration.
const REGISTER: &str = "/auth/register";

/// Response from login and registration.
///
/// Callers own session creation: persist the token and profile through
/// a credential store to stay logged in across processes.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    pub token: AuthToken,
    pub user: UserProfile,
}

/// Authentication operations.
#[derive(Debug, Clone, Copy)]
pub struct AuthApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    /// Authentication endpoints.
    pub fn auth(&self) -> AuthApi<'_> {
        AuthApi { client: self }
    }
}

impl AuthApi<'_> {
    /// Create a session from an email and password.
    #[instrument(skip(self, credentials))]
    pub async fn login(&self, credentials: &Credentials) -> Result<AuthResponse> {
        let body = json!({
            "email": credentials.email(),
            "password": credentials.password(),
        });

        self.client
            .execute_as(LOGIN, RequestSpec::post().json(body))
            .await
    }

    /// Register a new account and create its first session.
    #[instrument(skip(self, credentials))]
    pub async fn register(&self, name: &str, credentials: &Credentials) -> Result<AuthResponse> {
        let body = json!({
            "name": name,
            "email": credentials.email(),
            "password": credentials.password(),
        });

        self.client
            .execute_as(REGISTER, RequestSpec::post().json(body))
            .await
    }
}
