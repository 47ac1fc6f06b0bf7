//! Mock-server tests for the motus client.
//!
//! These tests use wiremock to simulate the API server and exercise
//! the request executor's behavior without network access or real
//! credentials.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, body_string, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

use motus_client::{ApiClient, RequestSpec};
use motus_core::{ApiBase, ApiError, AuthToken, Credentials, CredentialStore, Error};
use motus_store::MemoryStore;

/// Helper to build a client against a mock server.
fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let base = ApiBase::new(server.uri()).unwrap();
    let client = ApiClient::new(base, store.clone());
    (client, store)
}

/// Matches requests that carry no authorization header.
struct NoAuthorizationHeader;

impl wiremock::Match for NoAuthorizationHeader {
    fn matches(&self, request: &Request) -> bool {
        request.headers.get("authorization").is_none()
    }
}

/// Matches requests whose URL has no query string at all.
struct NoQueryString;

impl wiremock::Match for NoQueryString {
    fn matches(&self, request: &Request) -> bool {
        request.url.query().is_none()
    }
}

// ============================================================================
// Authentication Tests
// ============================================================================

#[tokio::test]
async fn test_login_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(json!({
            "email": "alice@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "test-access-token",
            "user": {"id": 7, "name": "Alice", "email": "alice@example.com"}
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let credentials = Credentials::new("alice@example.com", "secret123");
    let auth = client.auth().login(&credentials).await.unwrap();

    assert_eq!(auth.token.as_str(), "test-access-token");
    assert_eq!(auth.user.name, "Alice");
}

#[tokio::test]
async fn test_login_invalid_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({
            "error": "Invalid email or password"
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let credentials = Credentials::new("bad@example.com", "wrongpass");
    let err = client.auth().login(&credentials).await.unwrap_err();

    match err {
        Error::Api(api) => {
            assert!(api.is_auth_error());
            assert_eq!(api.message(), "Invalid email or password");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_register_success() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/register"))
        .and(body_json(json!({
            "name": "Bob",
            "email": "bob@example.com",
            "password": "secret123"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "token": "fresh-token",
            "user": {"id": 8, "name": "Bob", "email": "bob@example.com"}
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let credentials = Credentials::new("bob@example.com", "secret123");
    let auth = client.auth().register("Bob", &credentials).await.unwrap();

    assert_eq!(auth.user.email, "bob@example.com");
}

// ============================================================================
// Executor Contract Tests
// ============================================================================

#[tokio::test]
async fn test_bearer_header_sent_when_token_present() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .and(header("authorization", "Bearer stored-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .mount(&server)
        .await;

    let (client, store) = client_for(&server);
    store.set_token(&AuthToken::new("stored-token")).unwrap();

    let devices = client.devices().list().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_no_authorization_header_when_logged_out() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .and(NoAuthorizationHeader)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"devices": []})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let devices = client.devices().list().await.unwrap();
    assert!(devices.is_empty());
}

#[tokio::test]
async fn test_payload_returned_unchanged() {
    let server = MockServer::start().await;

    let payload = json!({
        "settings": {"threshold": 0.75, "labels": ["walking", "sitting"]},
        "updated_at": 1704067200000i64
    });

    Mock::given(method("GET"))
        .and(path("/api/v1/settings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(payload.clone()))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let got = client.settings().get().await.unwrap();
    assert_eq!(got, payload);
}

#[tokio::test]
async fn test_structured_body_serialized_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/settings"))
        .and(body_json(json!({"threshold": 0.5})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let result = client.settings().update(&json!({"threshold": 0.5})).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_raw_body_sent_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/ingest"))
        .and(body_string("raw,unparsed,payload"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let result = client
        .execute("/ingest", RequestSpec::post().raw("raw,unparsed,payload"))
        .await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_header_override_wins_over_default() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/ingest"))
        .and(header("content-type", "text/csv"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"ok": true})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let spec = RequestSpec::post()
        .header(
            reqwest::header::CONTENT_TYPE,
            reqwest::header::HeaderValue::from_static("text/csv"),
        )
        .raw("a,b,c");
    let result = client.execute("/ingest", spec).await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_endpoint_must_be_relative() {
    let server = MockServer::start().await;
    let (client, _store) = client_for(&server);

    let err = client.execute("devices", RequestSpec::get()).await.unwrap_err();
    assert!(matches!(err, Error::InvalidInput(_)));
}

// ============================================================================
// Error Handling Tests
// ============================================================================

#[tokio::test]
async fn test_network_error_message_is_fixed() {
    // Nothing listens on port 1; the connection is refused before any
    // response exists.
    let store = Arc::new(MemoryStore::new());
    let base = ApiBase::new("http://127.0.0.1:1").unwrap();
    let client = ApiClient::new(base, store);

    let err = client.execute("/devices", RequestSpec::get()).await.unwrap_err();
    match err {
        Error::Api(api @ ApiError::Network { .. }) => {
            assert_eq!(
                api.message(),
                "Network error. Please check if server is running."
            );
        }
        other => panic!("expected network error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_response_quotes_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(
            ResponseTemplate::new(502)
                .set_body_string("Bad Gateway")
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let credentials = Credentials::new("alice@example.com", "secret");
    let err = client.auth().login(&credentials).await.unwrap_err();

    match err {
        Error::Api(api @ ApiError::NonJsonResponse { status: 502, .. }) => {
            assert_eq!(api.message(), "Server error: Bad Gateway");
        }
        other => panic!("expected non-JSON error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_non_json_response_truncates_long_body() {
    let server = MockServer::start().await;

    let long_body = "<html>".to_string() + &"x".repeat(600);
    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(
            ResponseTemplate::new(504)
                .set_body_string(long_body.clone())
                .insert_header("content-type", "text/html"),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let err = client.devices().list().await.unwrap_err();

    let expected: String = long_body.chars().take(100).collect();
    match err {
        Error::Api(api) => assert_eq!(api.message(), format!("Server error: {expected}")),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_non_json_response_uses_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let err = client.devices().list().await.unwrap_err();

    match err {
        Error::Api(api) => {
            assert_eq!(api.message(), "Server error: Invalid response format");
        }
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_message_field_fallback() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "message": "missing device filter"
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let err = client.devices().list().await.unwrap_err();

    match err {
        Error::Api(api @ ApiError::Server { status: 400, .. }) => {
            assert_eq!(api.message(), "missing device filter");
        }
        other => panic!("expected server error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_error_envelope_without_text_uses_default() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"ok": false})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let err = client.devices().list().await.unwrap_err();

    match err {
        Error::Api(api) => assert_eq!(api.message(), "Request failed"),
        other => panic!("expected ApiError, got {other:?}"),
    }
}

#[tokio::test]
async fn test_malformed_json_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw("{not json", "application/json"),
        )
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let err = client.devices().list().await.unwrap_err();
    assert!(matches!(
        err,
        Error::Api(ApiError::MalformedBody { .. })
    ));
}

// ============================================================================
// Endpoint Module Tests
// ============================================================================

#[tokio::test]
async fn test_devices_list_unwraps_envelope() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/devices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "devices": [
                {"device_id": "esp32-01", "name": "Living room"},
                {"device_id": "esp32-02", "name": "Bedroom"}
            ]
        })))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let devices = client.devices().list().await.unwrap();

    assert_eq!(devices.len(), 2);
    assert_eq!(devices[0].device_id, "esp32-01");
    assert_eq!(devices[1].name, "Bedroom");
}

#[tokio::test]
async fn test_history_query_sends_only_present_filters() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/history"))
        .and(query_param("device_id", "dev1"))
        .and(query_param("from", "2024-01-01"))
        .and(query_param("to", "2024-01-02"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"activities": []})))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let query = motus_client::endpoints::HistoryQuery::new()
        .device_id("dev1")
        .from("2024-01-01")
        .to("2024-01-02");
    let activities = client.history().recent(&query).await.unwrap();
    assert!(activities.is_empty());
}

#[tokio::test]
async fn test_history_without_filters_sends_no_query_string() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/v1/history"))
        .and(NoQueryString)
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "activities": [
                {"device_id": "esp32-01", "start_ts": 1704067200000i64,
                 "end_ts": 1704067205000i64, "label": "walking", "confidence": 0.92}
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let query = motus_client::endpoints::HistoryQuery::new();
    let activities = client.history().recent(&query).await.unwrap();

    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].label, "walking");
    assert_eq!(activities[0].duration_secs(), 5.0);
}

#[tokio::test]
async fn test_history_save() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v1/history/save"))
        .and(body_json(json!({
            "device_id": "esp32-01",
            "start_ts": 1704067200000i64,
            "end_ts": 1704067205000i64,
            "label": "running",
            "confidence": 0.81
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"saved": true})))
        .mount(&server)
        .await;

    let (client, _store) = client_for(&server);
    let result = client
        .history()
        .save("esp32-01", 1_704_067_200_000, 1_704_067_205_000, "running", 0.81)
        .await
        .unwrap();
    assert_eq!(result["saved"], true);
}
