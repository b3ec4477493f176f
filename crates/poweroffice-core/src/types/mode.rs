//! Test/live endpoint selection.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::Error;

use super::BaseUrl;

const TEST_AUTH_BASE_URL: &str = "https://godemo.poweroffice.net";
const TEST_API_BASE_URL: &str = "https://api-demo.poweroffice.net";
const LIVE_AUTH_BASE_URL: &str = "https://go.poweroffice.net";
const LIVE_API_BASE_URL: &str = "https://api.poweroffice.net";

/// Path of the OAuth token endpoint on the auth host.
pub const TOKEN_PATH: &str = "/OAuth/Token";

/// Which PowerOffice environment a client talks to.
///
/// Defaults to [`Mode::Test`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Mode {
    #[default]
    Test,
    Live,
}

impl Mode {
    /// Map a "test mode" flag to a mode.
    pub fn from_test_flag(test_mode: bool) -> Self {
        if test_mode { Mode::Test } else { Mode::Live }
    }

    pub fn is_test(&self) -> bool {
        matches!(self, Mode::Test)
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Test => f.write_str("test"),
            Mode::Live => f.write_str("live"),
        }
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "test" | "demo" => Ok(Mode::Test),
            "live" | "production" => Ok(Mode::Live),
            other => Err(Error::invalid_input(format!(
                "unknown mode '{}': expected 'test' or 'live'",
                other
            ))),
        }
    }
}

/// The pair of hosts a client uses: one for token grants, one for resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Endpoints {
    auth: BaseUrl,
    api: BaseUrl,
    test_mode: bool,
}

impl Endpoints {
    /// The fixed hosts for a mode.
    pub fn for_mode(mode: Mode) -> Self {
        let (auth, api) = match mode {
            Mode::Test => (TEST_AUTH_BASE_URL, TEST_API_BASE_URL),
            Mode::Live => (LIVE_AUTH_BASE_URL, LIVE_API_BASE_URL),
        };

        Self {
            auth: BaseUrl::new(auth).expect("built-in auth URL is valid"),
            api: BaseUrl::new(api).expect("built-in API URL is valid"),
            test_mode: mode.is_test(),
        }
    }

    /// Custom hosts, e.g. a staging deployment or a local mock server.
    ///
    /// Custom endpoints report themselves as test mode.
    pub fn custom(auth: impl AsRef<str>, api: impl AsRef<str>) -> Result<Self, Error> {
        Ok(Self {
            auth: BaseUrl::new(auth)?,
            api: BaseUrl::new(api)?,
            test_mode: true,
        })
    }

    pub fn auth_base_url(&self) -> &BaseUrl {
        &self.auth
    }

    pub fn api_base_url(&self) -> &BaseUrl {
        &self.api
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    /// URL of the OAuth token endpoint.
    pub fn token_url(&self) -> String {
        self.auth.join(TOKEN_PATH)
    }

    /// URL of a resource path on the API host.
    pub fn api_url(&self, path: &str) -> String {
        self.api.join(path)
    }
}

impl Default for Endpoints {
    fn default() -> Self {
        Self::for_mode(Mode::default())
    }
}
