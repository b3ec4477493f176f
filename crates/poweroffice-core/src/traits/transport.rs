//! HTTP transport capability.
//!
//! Requests and responses are plain data. The client builds an
//! [`HttpRequest`], hands it to an [`HttpTransport`], and classifies the
//! [`HttpResponse`] it gets back, which keeps the auth protocol testable
//! without a network.

use std::fmt;

use async_trait::async_trait;

use crate::error::TransportError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Returns the uppercase method name.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A request body.
#[derive(Debug, Clone, PartialEq)]
pub enum HttpBody {
    /// `application/json`
    Json(serde_json::Value),
    /// `application/x-www-form-urlencoded`
    Form(Vec<(String, String)>),
}

/// An HTTP request described as plain data.
#[derive(Clone, Default)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    /// HTTP Basic credentials as (username, password).
    pub basic_auth: Option<(String, String)>,
    pub body: Option<HttpBody>,
}

impl HttpRequest {
    /// Start a request for `method` against an absolute `url`.
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            ..Default::default()
        }
    }

    /// Returns the first header value with the given name (case-insensitive).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// Returns the first query value with the given name.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

// Authorization headers and Basic credentials carry secrets
impl fmt::Debug for HttpRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let headers: Vec<(&str, &str)> = self
            .headers
            .iter()
            .map(|(k, v)| {
                if k.eq_ignore_ascii_case("authorization") {
                    (k.as_str(), "[REDACTED]")
                } else {
                    (k.as_str(), v.as_str())
                }
            })
            .collect();

        f.debug_struct("HttpRequest")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("query", &self.query)
            .field("basic_auth", &self.basic_auth.as_ref().map(|_| "[REDACTED]"))
            .field("body", &self.body.as_ref().map(|_| "..."))
            .finish()
    }
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// Create a response.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    ///
    /// Empty and non-JSON bodies decode to `Value::Null`.
    pub fn json(&self) -> serde_json::Value {
        if self.body.trim().is_empty() {
            return serde_json::Value::Null;
        }
        serde_json::from_str(&self.body).unwrap_or_else(|err| {
            tracing::debug!(error = %err, status = self.status, "response body is not JSON");
            serde_json::Value::Null
        })
    }
}

/// Sends one HTTP request and returns the response.
///
/// Implementations must return non-2xx responses as `Ok`; only failures to
/// obtain a response at all are errors.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_credentials() {
        let mut request = HttpRequest::new(HttpMethod::Post, "https://example.test/OAuth/Token");
        request
            .headers
            .push(("Authorization".to_string(), "Bearer secret-token".to_string()));
        request.basic_auth = Some(("app".to_string(), "secret-client".to_string()));

        let debug = format!("{:?}", request);
        assert!(!debug.contains("secret-token"));
        assert!(!debug.contains("secret-client"));
        assert!(debug.contains("Post"));
    }

    #[test]
    fn header_lookup_ignores_case() {
        let mut request = HttpRequest::new(HttpMethod::Get, "https://example.test");
        request
            .headers
            .push(("Accept".to_string(), "application/json".to_string()));
        assert_eq!(request.header("accept"), Some("application/json"));
        assert_eq!(request.header("content-type"), None);
    }

    #[test]
    fn response_json_tolerates_empty_and_invalid_bodies() {
        assert_eq!(HttpResponse::new(204, "").json(), serde_json::Value::Null);
        assert_eq!(
            HttpResponse::new(502, "<html>bad gateway</html>").json(),
            serde_json::Value::Null
        );
        assert_eq!(
            HttpResponse::new(200, r#"{"Id":42}"#).json(),
            serde_json::json!({"Id": 42})
        );
    }
}
