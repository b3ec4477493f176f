//! Base URL type.

use serde::Serialize;
use std::fmt;
use url::Url;

use crate::error::Error;

/// A validated absolute base URL for the auth or API host.
///
/// HTTPS is required, except for HTTP on localhost so mock servers work.
///
/// # Example
///
/// ```
/// use poweroffice_core::types::BaseUrl;
///
/// let api = BaseUrl::new("https://api-demo.poweroffice.net/").unwrap();
/// assert_eq!(api.join("/Customer/42/"), "https://api-demo.poweroffice.net/Customer/42");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct BaseUrl(Url);

impl BaseUrl {
    /// Parse and validate a base URL.
    pub fn new(s: impl AsRef<str>) -> Result<Self, Error> {
        let s = s.as_ref();
        let url = Url::parse(s)
            .map_err(|e| Error::invalid_input(format!("invalid base URL '{}': {}", s, e)))?;

        Self::validate(&url, s)?;

        Ok(Self(url))
    }

    /// Join a path onto the base, trimming slashes at both ends of `path`.
    pub fn join(&self, path: &str) -> String {
        let base = self.0.as_str().trim_end_matches('/');
        format!("{}/{}", base, path.trim_matches('/'))
    }

    /// Returns the base URL without a trailing slash.
    pub fn as_str(&self) -> &str {
        self.0.as_str().trim_end_matches('/')
    }

    /// Returns the host string.
    pub fn host(&self) -> Option<&str> {
        self.0.host_str()
    }

    fn validate(url: &Url, original: &str) -> Result<(), Error> {
        if url.cannot_be_a_base() {
            return Err(Error::invalid_input(format!(
                "invalid base URL '{}': must be an absolute URL",
                original
            )));
        }

        let is_localhost = url
            .host_str()
            .is_some_and(|h| h == "localhost" || h == "127.0.0.1" || h == "[::1]");

        let scheme = url.scheme();
        if scheme != "https" && !(scheme == "http" && is_localhost) {
            return Err(Error::invalid_input(format!(
                "invalid base URL '{}': must use HTTPS (HTTP allowed only for localhost)",
                original
            )));
        }

        if url.host_str().is_none() {
            return Err(Error::invalid_input(format!(
                "invalid base URL '{}': must have a host",
                original
            )));
        }

        Ok(())
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for BaseUrl {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}
