//! Request dispatch pipeline.
//!
//! # Responsibilities
//! - Resolve endpoint visibility and attach/suppress the bearer token
//! - Tag every request with the session id
//! - Classify failures and spend the single transient retry
//! - Run the 401 session teardown before the error reaches the caller
//!
//! # Design Decisions
//! - Two handles, one pipeline: `CredentialPolicy` is the only difference
//!   between the authenticated and the always-public instance
//! - Each attempt is rebuilt from the descriptor, so the retry reissues a
//!   byte-identical request
//! - The retry lifecycle is a tagged per-request state, not a flag mutated
//!   on shared configuration

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use url::Url;
use uuid::Uuid;

use crate::client::error::{ApiError, ApiResult};
use crate::client::request::{ApiRequest, X_SESSION_ID};
use crate::config::schema::{ClientConfig, RetryConfig};
use crate::observability::metrics;
use crate::resilience::{is_transient, retry_delay};
use crate::session::Session;
use crate::visibility::Allowlist;

/// Whether a handle ever attaches the bearer token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialPolicy {
    /// Attach the token unless the endpoint is on the public allowlist.
    Conditional,
    /// Never attach credentials (the always-public handle).
    Never,
}

/// Lifecycle of one logical request through the pipeline.
///
/// ```text
/// Pending → Retrying → Resolved | Failed
/// ```
///
/// The tag is what bounds the pipeline to a single retry: a request in
/// `Retrying` that fails again is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DispatchState {
    Pending,
    Retrying,
    Resolved,
    Failed,
}

/// A pre-configured request-issuing handle.
///
/// Cheap to clone; clones share the session, transport pool and allowlist.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: Url,
    session: Session,
    allowlist: Arc<Allowlist>,
    policy: CredentialPolicy,
    retry: RetryConfig,
}

impl ApiClient {
    /// Handle that attaches credentials whenever the endpoint requires them.
    pub fn authenticated(config: &ClientConfig, session: Session) -> ApiResult<Self> {
        Self::build(config, session, CredentialPolicy::Conditional)
    }

    /// Handle that never attaches credentials, allowlist or not. Shares the
    /// retry and session-tagging behavior of the authenticated handle.
    pub fn public_only(config: &ClientConfig, session: Session) -> ApiResult<Self> {
        Self::build(config, session, CredentialPolicy::Never)
    }

    fn build(
        config: &ClientConfig,
        session: Session,
        policy: CredentialPolicy,
    ) -> ApiResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(ApiError::logic)?;
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeouts.connect_secs))
            .timeout(Duration::from_secs(config.timeouts.request_secs))
            .build()
            .map_err(ApiError::logic)?;

        Ok(Self {
            http,
            base_url,
            session,
            allowlist: Arc::new(Allowlist::from_config(&config.visibility)),
            policy,
            retry: config.retries.clone(),
        })
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn policy(&self) -> CredentialPolicy {
        self.policy
    }

    /// Send a request through the full pipeline.
    ///
    /// Resolves with the raw response for 2xx, or rejects with a typed
    /// error. Transient transport failures are retried exactly once after
    /// a jittered backoff; HTTP error statuses are never retried.
    pub async fn issue(&self, request: &ApiRequest) -> ApiResult<reqwest::Response> {
        let request_id = Uuid::new_v4();
        let mut state = DispatchState::Pending;

        let result = loop {
            let attempt = self.build_attempt(request)?;

            match self.http.execute(attempt).await {
                Ok(response) => {
                    let status = response.status();
                    metrics::record_request(request.method.as_str(), Some(status.as_u16()));

                    if status == StatusCode::UNAUTHORIZED {
                        tracing::warn!(
                            request_id = %request_id,
                            method = %request.method,
                            path = %request.path,
                            "Unauthorized response, tearing down session"
                        );
                        self.session.expire();
                        break Err(ApiError::Unauthorized);
                    }

                    if status.is_client_error() || status.is_server_error() {
                        let body = response.text().await.unwrap_or_default();
                        break Err(ApiError::Http { status, body });
                    }

                    break Ok(response);
                }
                Err(err) => {
                    metrics::record_request(request.method.as_str(), None);

                    if self.retry.enabled
                        && state == DispatchState::Pending
                        && is_transient(&err)
                    {
                        state = DispatchState::Retrying;
                        metrics::record_retry(request.method.as_str());

                        let delay =
                            retry_delay(self.retry.base_delay_ms, self.retry.jitter_ms);
                        tracing::info!(
                            request_id = %request_id,
                            method = %request.method,
                            path = %request.path,
                            delay = ?delay,
                            error = %err,
                            "Transient failure, retrying once"
                        );
                        tokio::time::sleep(delay).await;
                        continue;
                    }

                    if is_transient(&err) {
                        break Err(ApiError::Transient(err));
                    }
                    break Err(ApiError::logic(err));
                }
            }
        };

        state = match &result {
            Ok(_) => DispatchState::Resolved,
            Err(_) => DispatchState::Failed,
        };
        tracing::debug!(
            request_id = %request_id,
            state = ?state,
            method = %request.method,
            path = %request.path,
            "Dispatch complete"
        );

        result
    }

    /// Send a request and decode the JSON response body.
    pub async fn fetch_json<T: DeserializeOwned>(&self, request: &ApiRequest) -> ApiResult<T> {
        let response = self.issue(request).await?;
        response.json().await.map_err(ApiError::logic)
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.fetch_json(&ApiRequest::new(Method::GET, path)).await
    }

    pub async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = ApiRequest::new(Method::POST, path).with_json(body)?;
        self.fetch_json(&request).await
    }

    pub async fn put_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> ApiResult<T> {
        let request = ApiRequest::new(Method::PUT, path).with_json(body)?;
        self.fetch_json(&request).await
    }

    pub async fn delete(&self, path: &str) -> ApiResult<()> {
        self.issue(&ApiRequest::new(Method::DELETE, path))
            .await
            .map(|_| ())
    }

    /// Build one physical attempt from the descriptor.
    ///
    /// Rebuilt per attempt; the session id is stable, so a retry carries
    /// exactly the headers of the original.
    fn build_attempt(&self, request: &ApiRequest) -> ApiResult<reqwest::Request> {
        let url = self
            .base_url
            .join(&request.path)
            .map_err(ApiError::logic)?;

        let mut builder = self
            .http
            .request(request.method.clone(), url)
            .header(X_SESSION_ID, self.session.store().session_id());

        if !request.query.is_empty() {
            builder = builder.query(&request.query);
        }

        if self.attaches_credentials(&request.method, &request.path) {
            if let Some(token) = self.session.store().token() {
                builder = builder.bearer_auth(token);
            }
        }

        if let Some(body) = &request.body {
            // .json() also sets Content-Type: application/json
            builder = builder.json(body);
        }

        builder.build().map_err(ApiError::logic)
    }

    fn attaches_credentials(&self, method: &Method, path: &str) -> bool {
        match self.policy {
            CredentialPolicy::Never => false,
            CredentialPolicy::Conditional => !self.allowlist.is_public(method, path),
        }
    }
}
