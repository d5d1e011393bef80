//! Failure injection tests: the single transient retry, the 401 session
//! teardown, and pass-through of other error statuses.

mod common;

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use reqwest::StatusCode;
use url::Url;

use cms_client::config::ClientConfig;
use cms_client::session::{LoginRedirect, SessionStore};
use cms_client::{ApiClient, ApiError, Session};

use common::{Behavior, MockBackend};

/// Redirect hook that records invocations instead of navigating.
#[derive(Debug, Default)]
struct RecordingRedirect {
    at: Option<Url>,
    triggered: AtomicU32,
}

impl LoginRedirect for RecordingRedirect {
    fn current_origin(&self) -> Option<Url> {
        self.at.clone()
    }

    fn redirect(&self, _target: &Url) {
        self.triggered.fetch_add(1, Ordering::SeqCst);
    }
}

fn config_for(backend: &MockBackend) -> ClientConfig {
    let mut config = ClientConfig {
        base_url: backend.base_url(),
        login_origin: "https://login.example.org".into(),
        ..Default::default()
    };
    // Keep the tests fast; one retry either way.
    config.retries.base_delay_ms = 50;
    config.retries.jitter_ms = 20;
    config
}

fn session_with(redirect: Arc<RecordingRedirect>) -> Session {
    Session::new(
        SessionStore::new(None),
        redirect,
        Url::parse("https://login.example.org").unwrap(),
    )
}

#[tokio::test]
async fn test_transient_failure_retried_once_then_succeeds() {
    let backend = MockBackend::start(|index, _| {
        if index == 0 {
            Behavior::Drop
        } else {
            Behavior::Respond(200, r#"[{"id":1,"title":"t","body":"b"}]"#.into())
        }
    })
    .await;

    let client = ApiClient::authenticated(
        &config_for(&backend),
        session_with(Arc::new(RecordingRedirect::default())),
    )
    .unwrap();

    let articles: Vec<serde_json::Value> = client.get_json("/news").await.unwrap();
    assert_eq!(articles.len(), 1);

    // Exactly two physical requests: the original and its one retry.
    assert_eq!(backend.request_count(), 2);
}

#[tokio::test]
async fn test_retry_is_bounded_to_one() {
    let backend = MockBackend::start(|_, _| Behavior::Drop).await;

    let client = ApiClient::authenticated(
        &config_for(&backend),
        session_with(Arc::new(RecordingRedirect::default())),
    )
    .unwrap();

    let err = client
        .get_json::<Vec<serde_json::Value>>("/news")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transient(_)));
    // Original + one retry, never a third attempt.
    assert_eq!(backend.request_count(), 2);
}

#[tokio::test]
async fn test_retry_preserves_request_identity() {
    let backend = MockBackend::start(|index, _| {
        if index == 0 {
            Behavior::Drop
        } else {
            Behavior::Respond(200, "[]".into())
        }
    })
    .await;

    let redirect = Arc::new(RecordingRedirect::default());
    let session = session_with(redirect);
    session.store().set_token("tok-9");
    let client = ApiClient::authenticated(&config_for(&backend), session).unwrap();

    let _: Vec<serde_json::Value> = client.get_json("/admin/links").await.unwrap();

    let seen = backend.requests();
    assert_eq!(seen.len(), 2);
    assert_eq!(seen[0].method, seen[1].method);
    assert_eq!(seen[0].path, seen[1].path);
    assert_eq!(
        seen[0].headers.get("x-session-id"),
        seen[1].headers.get("x-session-id")
    );
    assert_eq!(
        seen[0].headers.get("authorization"),
        seen[1].headers.get("authorization")
    );
}

#[tokio::test]
async fn test_unauthorized_clears_identity_and_redirects_once() {
    let backend = MockBackend::start(|_, _| Behavior::Respond(401, "{}".into())).await;

    let redirect = Arc::new(RecordingRedirect::default());
    let session = session_with(redirect.clone());
    session.store().set_token("tok-1");
    session.store().set_user_profile(&serde_json::json!({"name": "admin"}));

    let client = ApiClient::authenticated(&config_for(&backend), session.clone()).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/stats/overview")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    assert_eq!(err.status(), Some(StatusCode::UNAUTHORIZED));

    // Identity gone, exactly one redirect, no retry for a 401.
    assert!(session.store().token().is_none());
    assert!(session.store().user_profile().is_none());
    assert_eq!(redirect.triggered.load(Ordering::SeqCst), 1);
    assert_eq!(backend.request_count(), 1);
}

#[tokio::test]
async fn test_unauthorized_at_login_origin_skips_redirect() {
    let backend = MockBackend::start(|_, _| Behavior::Respond(401, "{}".into())).await;

    let redirect = Arc::new(RecordingRedirect {
        at: Some(Url::parse("https://login.example.org/signin").unwrap()),
        triggered: AtomicU32::new(0),
    });
    let session = session_with(redirect.clone());
    session.store().set_token("tok-1");

    let client = ApiClient::authenticated(&config_for(&backend), session.clone()).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/stats/overview")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Unauthorized));
    // Identity is cleared either way; the navigation is not repeated.
    assert!(session.store().token().is_none());
    assert_eq!(redirect.triggered.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_server_error_passes_through_untouched() {
    let backend = MockBackend::start(|_, _| Behavior::Respond(500, "oops".into())).await;

    let redirect = Arc::new(RecordingRedirect::default());
    let session = session_with(redirect.clone());
    session.store().set_token("tok-1");

    let client = ApiClient::authenticated(&config_for(&backend), session.clone()).unwrap();
    let err = client
        .get_json::<serde_json::Value>("/admin/news")
        .await
        .unwrap_err();

    match err {
        ApiError::Http { status, body } => {
            assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(body, "oops");
        }
        other => panic!("expected Http error, got {:?}", other),
    }

    // No retry, no teardown, token untouched.
    assert_eq!(backend.request_count(), 1);
    assert_eq!(session.store().token().as_deref(), Some("tok-1"));
    assert_eq!(redirect.triggered.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_disabled_retry_fails_on_first_transient() {
    let backend = MockBackend::start(|_, _| Behavior::Drop).await;

    let mut config = config_for(&backend);
    config.retries.enabled = false;

    let client = ApiClient::authenticated(
        &config,
        session_with(Arc::new(RecordingRedirect::default())),
    )
    .unwrap();

    let err = client
        .get_json::<Vec<serde_json::Value>>("/news")
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Transient(_)));
    assert_eq!(backend.request_count(), 1);
}
