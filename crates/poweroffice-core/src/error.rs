//! Error types for the PowerOffice client.
//!
//! The five grant/dispatch outcomes (`InvalidClient`, `Unauthorized`,
//! `RateLimited`, `MalformedResponse`, `Unclassified`) are explicit variants
//! so callers can match on them instead of inspecting messages. Transport,
//! store and input failures get their own variants.

use std::fmt;
use thiserror::Error;

/// The unified error type for PowerOffice operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The application key / client key pair was rejected by the token endpoint.
    #[error("the client is invalid")]
    InvalidClient,

    /// A resource call was rejected with HTTP 401.
    #[error("the request was denied because you were not authorized")]
    Unauthorized,

    /// A resource call was rejected with HTTP 429.
    #[error("too many requests")]
    RateLimited,

    /// A token grant response did not carry the required fields.
    #[error("malformed token response: {reason}")]
    MalformedResponse { reason: String },

    /// Any other failed grant, carrying the raw response for diagnostics.
    #[error("unexpected response: {0}")]
    Unclassified(ProtocolError),

    /// Network transport errors (DNS, TLS, connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The session store could not be read or written.
    #[error("session store error: {0}")]
    Store(#[from] StoreError),

    /// Caller input could not be used to build a request.
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
}

impl Error {
    pub(crate) fn malformed(reason: impl Into<String>) -> Self {
        Error::MalformedResponse {
            reason: reason.into(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Error::InvalidInput {
            message: message.into(),
        }
    }

    /// Check if this error means the credentials or tokens were rejected.
    pub fn is_auth_error(&self) -> bool {
        matches!(self, Error::InvalidClient | Error::Unauthorized)
    }

    /// Check if the caller may refresh the session and retry once.
    ///
    /// Only `Unauthorized` qualifies; an invalid client needs operator action.
    pub fn is_retryable_after_refresh(&self) -> bool {
        matches!(self, Error::Unauthorized)
    }
}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// Session store errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Underlying I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The persisted data could not be (de)serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend-specific failure.
    #[error("{message}")]
    Backend { message: String },
}

/// A failed grant response that did not match a known error shape.
#[derive(Debug, Clone)]
pub struct ProtocolError {
    /// HTTP status code.
    pub status: u16,
    /// Raw response body.
    pub body: String,
}

impl ProtocolError {
    /// Create a new protocol error.
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if !self.body.is_empty() {
            write!(f, ": {}", self.body)?;
        }
        Ok(())
    }
}

impl std::error::Error for ProtocolError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_retryable_after_refresh() {
        assert!(Error::Unauthorized.is_retryable_after_refresh());
        assert!(Error::Unauthorized.is_auth_error());
        assert!(!Error::InvalidClient.is_retryable_after_refresh());
        assert!(Error::InvalidClient.is_auth_error());
        assert!(!Error::RateLimited.is_auth_error());
    }

    #[test]
    fn protocol_error_display_includes_status_and_body() {
        let err = Error::Unclassified(ProtocolError::new(500, "boom"));
        assert_eq!(err.to_string(), "unexpected response: HTTP 500: boom");

        let empty = ProtocolError::new(503, "");
        assert_eq!(empty.to_string(), "HTTP 503");
    }
}
