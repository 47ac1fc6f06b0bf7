//! HTTP request executor for the motus API.

use std::fmt;
use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, error, instrument, trace};

use motus_core::error::ApiError;
use motus_core::{ApiBase, CredentialStore, InvalidInputError, Result};

use crate::request::{Body, RequestSpec};

/// Maximum response-text characters captured for diagnostic logging.
const LOG_SNIPPET_CHARS: usize = 500;

/// HTTP client for motus API requests.
///
/// Every API call flows through [`execute`](ApiClient::execute). The
/// base URL is fixed at construction and the credential store is
/// consulted once per call, before the request is sent; a token change
/// during an in-flight request does not affect that request.
///
/// The client is cheap to clone and may issue any number of calls
/// concurrently; there is no coordination, deduplication, or
/// cancellation between them.
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: ApiBase,
    store: Arc<dyn CredentialStore>,
}

impl ApiClient {
    /// Create a new client for the given base URL and credential store.
    pub fn new(base: ApiBase, store: Arc<dyn CredentialStore>) -> Self {
        let http = reqwest::Client::builder()
            .user_agent(concat!("motus/", env!("CARGO_PKG_VERSION")))
            .build()
            .expect("failed to build HTTP client");

        Self { http, base, store }
    }

    /// Returns the base URL this client is configured for.
    pub fn base(&self) -> &ApiBase {
        &self.base
    }

    /// Returns the credential store this client consults.
    pub fn store(&self) -> &Arc<dyn CredentialStore> {
        &self.store
    }

    /// Execute one API request.
    ///
    /// On success, returns the parsed JSON payload exactly as the
    /// server sent it; interpreting the payload shape is left to the
    /// caller. On failure, returns an [`ApiError`] whose display text
    /// is a non-empty human-readable message.
    #[instrument(skip(self, spec), fields(base = %self.base))]
    pub async fn execute(&self, endpoint: &str, spec: RequestSpec) -> Result<Value> {
        if !endpoint.starts_with('/') {
            return Err(InvalidInputError::Endpoint {
                value: endpoint.to_string(),
                reason: "must start with '/'".to_string(),
            }
            .into());
        }

        let url = self.base.endpoint_url(endpoint);
        let method = spec.http_method().clone();
        debug!(%method, %url, "API request");

        let mut request = self
            .http
            .request(method, &url)
            .headers(self.default_headers());

        // Caller-supplied overrides win on key collision
        for (name, value) in spec.header_overrides() {
            request = request.header(name, value.clone());
        }

        request = match spec.body() {
            Some(Body::Json(value)) => request.body(value.to_string()),
            Some(Body::Raw(text)) => request.body(text.clone()),
            None => request,
        };

        let response = match request.send().await {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "network failure");
                return Err(ApiError::network(e.to_string()).into());
            }
        };

        self.handle_response(response).await
    }

    /// Execute one API request and deserialize the payload.
    ///
    /// A payload that does not match `T` is reported as a malformed
    /// body.
    pub async fn execute_as<T>(&self, endpoint: &str, spec: RequestSpec) -> Result<T>
    where
        T: DeserializeOwned,
    {
        let payload = self.execute(endpoint, spec).await?;
        serde_json::from_value(payload).map_err(|e| ApiError::malformed(e.to_string()).into())
    }

    /// Default headers: JSON content type, plus a bearer token when
    /// the store holds one. An unauthenticated call proceeds without
    /// the authorization header.
    fn default_headers(&self) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = self.store.token() {
            let auth_value = format!("Bearer {}", token.as_str());
            headers.insert(
                AUTHORIZATION,
                HeaderValue::from_str(&auth_value).expect("invalid token characters"),
            );
        }

        headers
    }

    /// Handle a response, parsing the payload or classifying the error.
    ///
    /// The content-type guard runs before the status check: an HTML
    /// error page from a proxy in front of a dead backend must never
    /// be parsed as an API payload.
    async fn handle_response(&self, response: reqwest::Response) -> Result<Value> {
        let status = response.status();

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        if !content_type.contains("application/json") {
            let text = response.text().await.unwrap_or_default();
            let logged: String = text.chars().take(LOG_SNIPPET_CHARS).collect();
            error!(status = %status, body = %logged, "non-JSON response");
            return Err(ApiError::non_json(status.as_u16(), &text).into());
        }

        let text = match response.text().await {
            Ok(text) => text,
            Err(e) => {
                error!(error = %e, "failed to read response body");
                return Err(ApiError::network(e.to_string()).into());
            }
        };

        let payload: Value = match serde_json::from_str(&text) {
            Ok(payload) => payload,
            Err(e) => {
                error!(error = %e, "response body is not valid JSON");
                return Err(ApiError::malformed(e.to_string()).into());
            }
        };

        trace!(%status, ?payload, "API response");

        if !status.is_success() {
            let error_field = payload
                .get("error")
                .and_then(Value::as_str)
                .map(str::to_string);
            let message_field = payload
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string);
            let err = ApiError::server(status.as_u16(), error_field, message_field);
            error!(status = %status, message = %err, "API error response");
            return Err(err.into());
        }

        Ok(payload)
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("base", &self.base)
            .finish_non_exhaustive()
    }
}
