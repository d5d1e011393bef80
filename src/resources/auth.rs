//! Authentication: login against the backend, local identity lifecycle.

use serde::{Deserialize, Serialize};

use crate::client::{ApiClient, ApiResult};

#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    /// Profile blob, cached verbatim for the back-office header.
    #[serde(default)]
    pub user: serde_json::Value,
}

#[derive(Clone)]
pub struct AuthApi {
    client: ApiClient,
}

impl AuthApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Log in and store the returned identity. `/auth/login` is on the
    /// public allowlist, so a stale stored token never taints the attempt.
    pub async fn login(&self, email: &str, password: &str) -> ApiResult<LoginResponse> {
        let request = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        let response: LoginResponse = self.client.post_json("/auth/login", &request).await?;

        let store = self.client.session().store();
        store.set_token(&response.token);
        store.set_user_profile(&response.user);
        tracing::info!("Logged in, identity stored");

        Ok(response)
    }

    /// Drop the local identity. Purely client-side; the bearer token is
    /// stateless as far as this client is concerned.
    pub fn logout(&self) {
        self.client.session().store().clear_identity();
        tracing::info!("Logged out, identity cleared");
    }
}
