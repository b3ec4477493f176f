//! Application credentials.

use std::fmt;

/// The key pair identifying an integration against PowerOffice Go.
///
/// Both keys are sent as HTTP Basic auth on token grants: the application
/// key as username and the client key as password.
///
/// # Security
///
/// The client key is never exposed in Debug output to prevent accidental logging.
///
/// # Example
///
/// ```
/// use poweroffice_core::Credentials;
///
/// let creds = Credentials::new("application-key", "client-key");
/// assert_eq!(creds.application_key(), "application-key");
/// ```
#[derive(Clone)]
pub struct Credentials {
    application_key: String,
    client_key: String,
}

impl Credentials {
    /// Create new credentials.
    pub fn new(application_key: impl Into<String>, client_key: impl Into<String>) -> Self {
        Self {
            application_key: application_key.into(),
            client_key: client_key.into(),
        }
    }

    /// Returns the application key.
    pub fn application_key(&self) -> &str {
        &self.application_key
    }

    /// Returns the client key.
    ///
    /// # Security
    ///
    /// Use this only when constructing token requests.
    pub fn client_key(&self) -> &str {
        &self.client_key
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("application_key", &self.application_key)
            .field("client_key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credentials_hide_client_key_in_debug() {
        let creds = Credentials::new("app-key", "secret-client-key");
        let debug = format!("{:?}", creds);
        assert!(debug.contains("app-key"));
        assert!(!debug.contains("secret-client-key"));
        assert!(debug.contains("[REDACTED]"));
    }
}
