//! Token session state.
//!
//! A [`Session`] is the single stateful record of the client: the current
//! access token, refresh token and absolute expiry. It reads and writes
//! through a [`SessionStore`] so the state can outlive the process, and it
//! asks a [`Clock`] for the time so expiry is testable.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration, NaiveDateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::Result;
use crate::clock::{Clock, SystemClock};
use crate::error::Error;
use crate::store::MemoryStore;
use crate::tokens::{AccessToken, RefreshToken};
use crate::traits::SessionStore;

/// Prefix shared by every key a session writes.
pub const KEY_PREFIX: &str = "POWEROFFICE_SESSION_";

/// Store key of the access token.
pub const KEY_ACCESS_TOKEN: &str = "POWEROFFICE_SESSION_ACCESS_TOKEN";

/// Store key of the refresh token.
pub const KEY_REFRESH_TOKEN: &str = "POWEROFFICE_SESSION_REFRESH_TOKEN";

/// Store key of the expiry timestamp.
pub const KEY_EXPIRES_AT: &str = "POWEROFFICE_SESSION_EXPIRES_AT";

/// Serialization format of the stored expiry (UTC, second precision).
pub const EXPIRES_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A decoded token grant response.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenGrant {
    /// Lifetime of the access token in seconds.
    pub expires_in: u64,
    pub access_token: String,
    pub refresh_token: String,
}

impl TokenGrant {
    /// Validate a decoded grant body.
    ///
    /// `expires_in` must be a non-negative integer and both tokens must be
    /// strings. Extra fields are ignored.
    pub fn from_value(value: &serde_json::Value) -> Result<Self> {
        let expires_in = match value.get("expires_in") {
            None => return Err(Error::malformed("missing expires_in")),
            Some(v) => v
                .as_u64()
                .ok_or_else(|| Error::malformed("expires_in is not a non-negative integer"))?,
        };

        let access_token = value
            .get("access_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::malformed("missing access_token"))?;

        let refresh_token = value
            .get("refresh_token")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::malformed("missing refresh_token"))?;

        Ok(Self {
            expires_in,
            access_token: access_token.to_string(),
            refresh_token: refresh_token.to_string(),
        })
    }
}

impl fmt::Debug for TokenGrant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenGrant")
            .field("expires_in", &self.expires_in)
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Where a session stands in the auth lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionState {
    /// Never authenticated, or disconnected.
    Empty,
    /// Access token present and not expired.
    Valid,
    /// Expired, but a refresh grant can renew it.
    ExpiredRefreshable,
    /// Expired with no refresh token; only a client-credentials grant helps.
    ExpiredNotRefreshable,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::Empty => "empty",
            SessionState::Valid => "valid",
            SessionState::ExpiredRefreshable => "expired (refreshable)",
            SessionState::ExpiredNotRefreshable => "expired (not refreshable)",
        };
        f.write_str(s)
    }
}

/// Token state for one application/tenant.
///
/// # Example
///
/// ```
/// use poweroffice_core::Session;
/// use serde_json::json;
///
/// let session = Session::in_memory();
/// assert!(!session.is_valid().unwrap());
///
/// session.set_from_response(&json!({
///     "expires_in": 600,
///     "access_token": "tok-A",
///     "refresh_token": "tok-B",
/// })).unwrap();
///
/// assert!(session.is_valid().unwrap());
/// assert!(session.can_refresh().unwrap());
/// ```
pub struct Session {
    store: Box<dyn SessionStore>,
    clock: Arc<dyn Clock>,
}

impl Session {
    /// Create a session over a store, using the system clock.
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self::with_clock(store, SystemClock)
    }

    /// Create a session over a store with an explicit time source.
    pub fn with_clock(store: impl SessionStore + 'static, clock: impl Clock + 'static) -> Self {
        Self {
            store: Box::new(store),
            clock: Arc::new(clock),
        }
    }

    /// Create a session backed by a fresh [`MemoryStore`].
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Current time according to the session's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn access_token(&self) -> Result<Option<AccessToken>> {
        Ok(self.store.get(KEY_ACCESS_TOKEN)?.map(AccessToken::new))
    }

    pub fn refresh_token(&self) -> Result<Option<RefreshToken>> {
        Ok(self.store.get(KEY_REFRESH_TOKEN)?.map(RefreshToken::new))
    }

    /// The stored expiry, or `None` if absent or unparsable.
    pub fn expire_date(&self) -> Result<Option<DateTime<Utc>>> {
        let Some(raw) = self.store.get(KEY_EXPIRES_AT)? else {
            return Ok(None);
        };

        match NaiveDateTime::parse_from_str(&raw, EXPIRES_AT_FORMAT) {
            Ok(naive) => Ok(Some(naive.and_utc())),
            Err(err) => {
                debug!(error = %err, "ignoring unparsable stored expiry");
                Ok(None)
            }
        }
    }

    pub fn set_access_token(&self, token: &AccessToken) -> Result<()> {
        self.store.put(KEY_ACCESS_TOKEN, token.as_str())?;
        Ok(())
    }

    pub fn set_refresh_token(&self, token: &RefreshToken) -> Result<()> {
        self.store.put(KEY_REFRESH_TOKEN, token.as_str())?;
        Ok(())
    }

    pub fn set_expire_date(&self, expires_at: DateTime<Utc>) -> Result<()> {
        let formatted = format_expiry(expires_at);
        self.store.put(KEY_EXPIRES_AT, &formatted)?;
        Ok(())
    }

    /// Store a decoded grant response.
    ///
    /// Nothing is written unless all three fields are present and well-typed.
    pub fn set_from_response(&self, response: &serde_json::Value) -> Result<()> {
        let grant = TokenGrant::from_value(response)?;
        self.set_from_grant(&grant)
    }

    /// Store a grant, computing the absolute expiry from `expires_in`.
    pub fn set_from_grant(&self, grant: &TokenGrant) -> Result<()> {
        let seconds = i64::try_from(grant.expires_in)
            .map_err(|_| Error::malformed("expires_in out of range"))?;
        let lifetime = Duration::try_seconds(seconds)
            .ok_or_else(|| Error::malformed("expires_in out of range"))?;
        let expires_at = self
            .clock
            .now()
            .checked_add_signed(lifetime)
            .ok_or_else(|| Error::malformed("expires_in out of range"))?;
        let formatted = format_expiry(expires_at);

        self.store.put_many(&[
            (KEY_EXPIRES_AT, formatted.as_str()),
            (KEY_ACCESS_TOKEN, grant.access_token.as_str()),
            (KEY_REFRESH_TOKEN, grant.refresh_token.as_str()),
        ])?;

        debug!(expires_at = %formatted, "session updated from grant");
        Ok(())
    }

    /// True if the expiry is absent or not in the future.
    pub fn has_expired(&self) -> Result<bool> {
        Ok(match self.expire_date()? {
            None => true,
            Some(expires_at) => expires_at <= self.clock.now(),
        })
    }

    /// True if an access token is present and has not expired.
    pub fn is_valid(&self) -> Result<bool> {
        Ok(self.has_access_token()? && !self.has_expired()?)
    }

    fn has_access_token(&self) -> Result<bool> {
        Ok(self
            .access_token()?
            .is_some_and(|token| !token.as_str().is_empty()))
    }

    /// True if a non-empty refresh token is present.
    pub fn can_refresh(&self) -> Result<bool> {
        Ok(self.refresh_token()?.is_some_and(|token| !token.is_empty()))
    }

    /// Clear all session fields.
    pub fn disconnect(&self) -> Result<()> {
        self.store.delete_all_with_prefix(KEY_PREFIX)?;
        debug!("session disconnected");
        Ok(())
    }

    pub fn state(&self) -> Result<SessionState> {
        if self.is_valid()? {
            return Ok(SessionState::Valid);
        }
        if self.can_refresh()? {
            return Ok(SessionState::ExpiredRefreshable);
        }
        if !self.has_access_token()? && self.expire_date()?.is_none() {
            return Ok(SessionState::Empty);
        }
        Ok(SessionState::ExpiredNotRefreshable)
    }
}

impl fmt::Debug for Session {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("tokens", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

/// Stored expiries have whole-second precision. A fractional second is
/// rounded up so the stored value never precedes the real expiry.
fn format_expiry(expires_at: DateTime<Utc>) -> String {
    let whole = expires_at.with_nanosecond(0).unwrap_or(expires_at);
    let rounded = if whole < expires_at {
        whole.checked_add_signed(Duration::seconds(1)).unwrap_or(whole)
    } else {
        whole
    };
    rounded.format(EXPIRES_AT_FORMAT).to_string()
}
