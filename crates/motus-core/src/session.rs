//! Session types: token, user profile, and the combined snapshot.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque bearer token for authenticated API requests.
///
/// The client performs no validation of the token's shape or expiry;
/// presence alone marks the session as authenticated.
///
/// # Security
///
/// - Never logged or displayed in Debug output
/// - Treat as opaque; do not parse or inspect
#[derive(Clone, PartialEq, Eq)]
pub struct AuthToken(String);

impl AuthToken {
    /// Create a new token from its wire representation.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Returns the token value for use in authorization headers.
    ///
    /// # Security
    ///
    /// Use only when constructing HTTP authorization headers or
    /// persisting the session.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Hide token value in Debug output
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AuthToken").field(&"[REDACTED]").finish()
    }
}

impl Serialize for AuthToken {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for AuthToken {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(AuthToken::new(s))
    }
}

/// The authenticated user's profile, as returned by the server.
///
/// The profile envelope is owned by the server; fields beyond the known
/// trio are preserved in `extra` rather than dropped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub email: String,

    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A snapshot of the persisted session.
///
/// Token presence implies the caller is considered authenticated. The
/// two halves are set and cleared independently, except on logout,
/// which clears both.
#[derive(Debug, Clone, Default)]
pub struct Session {
    pub token: Option<AuthToken>,
    pub user: Option<UserProfile>,
}

impl Session {
    /// Returns true when a token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }
}
