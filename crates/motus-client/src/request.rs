//! Request description types.

use reqwest::Method;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

/// A request body.
#[derive(Debug, Clone)]
pub enum Body {
    /// Structured value, serialized to JSON text before sending.
    Json(serde_json::Value),
    /// Raw text, sent unchanged.
    Raw(String),
}

/// Description of a single API request.
///
/// Defaults: GET, no header overrides, no body. Header overrides are
/// applied after the executor's defaults and win on key collision.
#[derive(Debug, Clone, Default)]
pub struct RequestSpec {
    method: Method,
    headers: HeaderMap,
    body: Option<Body>,
}

impl RequestSpec {
    /// A GET request with no overrides.
    pub fn get() -> Self {
        Self::default()
    }

    /// A POST request with no body.
    pub fn post() -> Self {
        Self::default().method(Method::POST)
    }

    /// Set the HTTP method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Add a header override. Replaces any default (or earlier
    /// override) under the same name.
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a structured JSON body.
    pub fn json(mut self, value: serde_json::Value) -> Self {
        self.body = Some(Body::Json(value));
        self
    }

    /// Attach a raw string body, sent unchanged.
    pub fn raw(mut self, text: impl Into<String>) -> Self {
        self.body = Some(Body::Raw(text.into()));
        self
    }

    pub(crate) fn http_method(&self) -> &Method {
        &self.method
    }

    pub(crate) fn header_overrides(&self) -> &HeaderMap {
        &self.headers
    }

    pub(crate) fn body(&self) -> Option<&Body> {
        self.body.as_ref()
    }
}
