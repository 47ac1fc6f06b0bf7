//! API base URL type.

use std::fmt;
use std::str::FromStr;
use url::Url;

use crate::error::{Error, InvalidInputError};

/// A validated API base URL.
///
/// The base is an absolute server origin plus a fixed path prefix
/// (default `/api/v1`). Both are resolved once, when the client is
/// constructed; individual calls supply only a relative endpoint path.
///
/// Network bases must use HTTPS (or HTTP for localhost).
///
/// # Example
///
/// ```
/// use motus_core::ApiBase;
///
/// let base = ApiBase::new("https://hub.example.com").unwrap();
/// assert_eq!(base.endpoint_url("/devices"),
///            "https://hub.example.com/api/v1/devices");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct ApiBase {
    origin: Url,
    prefix: String,
}

impl ApiBase {
    /// The default path prefix applied to every endpoint.
    pub const DEFAULT_PREFIX: &'static str = "/api/v1";

    /// Create a new API base with the default path prefix.
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is not valid or doesn't meet requirements.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        Self::with_prefix(s, Self::DEFAULT_PREFIX)
    }

    /// Create a new API base with a custom path prefix.
    ///
    /// The prefix must be empty or start with `/`; a trailing slash is
    /// stripped.
    pub fn with_prefix(s: impl AsRef<str>, prefix: &str) -> Result<Self, Error> {
        let s = s.as_ref();
        let origin = Url::parse(s).map_err(|e| InvalidInputError::BaseUrl {
            value: s.to_string(),
            reason: e.to_string(),
        })?;

        Self::validate(&origin, s)?;

        if !prefix.is_empty() && !prefix.starts_with('/') {
            return Err(InvalidInputError::BaseUrl {
                value: s.to_string(),
                reason: format!("prefix '{}' must start with '/'", prefix),
            }
            .into());
        }

        Ok(Self {
            origin,
            prefix: prefix.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the absolute URL for a relative endpoint path.
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        // The url crate always adds a trailing slash to root paths,
        // so strip it before joining the prefix and endpoint.
        let origin = self.origin.as_str().trim_end_matches('/');
        format!("{}{}{}", origin, self.prefix, endpoint)
    }

    /// Returns the server origin as a string.
    pub fn as_str(&self) -> &str {
        self.origin.as_str()
    }

    /// Returns the path prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.origin.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        // Must be absolute
        if url.cannot_be_a_base() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must be an absolute URL".to_string(),
            }
            .into());
        }

        let scheme = url.scheme();

        // Must be HTTPS (or HTTP for localhost)
        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "::1");

        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must use HTTPS (HTTP allowed only for localhost)".to_string(),
            }
            .into());
        }

        // Must have a host
        if url.host_str().is_none() {
            return Err(InvalidInputError::BaseUrl {
                value: original.to_string(),
                reason: "must have a host".to_string(),
            }
            .into());
        }

        Ok(())
    }
}

impl fmt::Display for ApiBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.origin.as_str().trim_end_matches('/'), self.prefix)
    }
}

impl FromStr for ApiBase {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}
