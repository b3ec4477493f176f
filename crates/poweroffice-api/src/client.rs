//! Token grants and authenticated request dispatch.

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDateTime;
use serde_json::Value;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use poweroffice_core::error::{Error, ProtocolError};
use poweroffice_core::session::{Session, SessionState, TokenGrant};
use poweroffice_core::traits::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
use poweroffice_core::types::{DateRange, Endpoints, Mode, format_query_datetime};
use poweroffice_core::{Credentials, Result};

/// Caller-supplied parts of a resource request.
///
/// Headers named `Authorization` are dropped when the request is built; the
/// bearer token always comes from the session.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    query: Vec<(String, String)>,
    headers: Vec<(String, String)>,
    body: Option<HttpBody>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a query parameter.
    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Add a timestamp query parameter as `YYYY-MM-DD HH:MM:SS`.
    pub fn query_datetime(self, key: impl Into<String>, value: &NaiveDateTime) -> Self {
        self.query(key, format_query_datetime(value))
    }

    /// Add `fromDate` and `toDate` query parameters.
    pub fn date_range(mut self, range: &DateRange) -> Self {
        self.query.extend(range.to_query());
        self
    }

    /// Add a request header.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Send `body` as JSON.
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(HttpBody::Json(body));
        self
    }

    /// Send form fields.
    pub fn form<K, V>(mut self, fields: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        let fields = fields
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        self.body = Some(HttpBody::Form(fields));
        self
    }

    fn apply(self, request: &mut HttpRequest) {
        request.query.extend(self.query);

        for (name, value) in self.headers {
            if name.eq_ignore_ascii_case("authorization") {
                warn!("ignoring caller-supplied Authorization header");
                continue;
            }
            request.headers.retain(|(k, _)| !k.eq_ignore_ascii_case(&name));
            request.headers.push((name, value));
        }

        if self.body.is_some() {
            request.body = self.body;
        }
    }
}

/// Client for the PowerOffice Go API.
///
/// Owns the session for its lifetime. Cheap to clone; clones share the
/// session, the transport, and the lock that serializes session access, so
/// concurrent [`refresh_if_expired`](Self::refresh_if_expired) calls on one
/// client perform at most one refresh grant.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    transport: Arc<dyn HttpTransport>,
    session: Mutex<Session>,
    credentials: Credentials,
    endpoints: Endpoints,
}

impl ApiClient {
    /// Create a client for the fixed hosts of `mode`.
    pub fn new(
        transport: impl HttpTransport + 'static,
        session: Session,
        credentials: Credentials,
        mode: Mode,
    ) -> Self {
        Self::with_endpoints(transport, session, credentials, Endpoints::for_mode(mode))
    }

    /// Create a client for explicit hosts.
    pub fn with_endpoints(
        transport: impl HttpTransport + 'static,
        session: Session,
        credentials: Credentials,
        endpoints: Endpoints,
    ) -> Self {
        Self {
            inner: Arc::new(ClientInner {
                transport: Arc::new(transport),
                session: Mutex::new(session),
                credentials,
                endpoints,
            }),
        }
    }

    pub fn is_test_mode(&self) -> bool {
        self.inner.endpoints.is_test_mode()
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.inner.endpoints
    }

    /// Run `f` against the session while holding the session lock.
    pub async fn with_session<R>(&self, f: impl FnOnce(&Session) -> R) -> R {
        let session = self.inner.session.lock().await;
        f(&session)
    }

    pub async fn session_state(&self) -> Result<SessionState> {
        self.with_session(Session::state).await
    }

    /// Clear the session.
    pub async fn disconnect(&self) -> Result<()> {
        info!("Disconnecting session");
        self.with_session(Session::disconnect).await
    }

    // ========================================================================
    // Token grants
    // ========================================================================

    /// Authenticate with the client-credentials grant.
    ///
    /// # Errors
    ///
    /// `InvalidClient` if the key pair is rejected, `Unclassified` for any
    /// other failed response, `MalformedResponse` if a successful response
    /// lacks a field. The session is untouched on failure.
    #[instrument(skip(self), fields(test_mode = self.is_test_mode()))]
    pub async fn acquire_token(&self) -> Result<()> {
        info!("Requesting access token");

        let session = self.inner.session.lock().await;
        self.grant(&session, vec![("grant_type", "client_credentials".to_string())])
            .await?;

        debug!("Access token acquired");
        Ok(())
    }

    /// Renew the session with the refresh-token grant.
    ///
    /// # Errors
    ///
    /// `InvalidInput` if no refresh token is stored; otherwise as
    /// [`acquire_token`](Self::acquire_token).
    #[instrument(skip(self))]
    pub async fn refresh_access_token(&self) -> Result<()> {
        let session = self.inner.session.lock().await;
        self.refresh_locked(&session).await
    }

    /// Refresh if the session has expired and holds a refresh token.
    ///
    /// Returns whether a refresh grant was performed. An expired session
    /// without a refresh token is left alone; the next resource call will
    /// fail with `Unauthorized`.
    #[instrument(skip(self))]
    pub async fn refresh_if_expired(&self) -> Result<bool> {
        let session = self.inner.session.lock().await;

        if !session.has_expired()? {
            debug!("Session still valid, not refreshing");
            return Ok(false);
        }

        if !session.can_refresh()? {
            debug!("Session expired but not refreshable");
            return Ok(false);
        }

        self.refresh_locked(&session).await?;
        Ok(true)
    }

    async fn refresh_locked(&self, session: &Session) -> Result<()> {
        info!("Refreshing access token");

        let refresh_token = session
            .refresh_token()?
            .ok_or_else(|| Error::invalid_input("no refresh token stored in session"))?;

        self.grant(
            session,
            vec![
                ("grant_type", "refresh_token".to_string()),
                ("refresh_token", refresh_token.into_inner()),
            ],
        )
        .await?;

        debug!("Access token refreshed");
        Ok(())
    }

    async fn grant(&self, session: &Session, form: Vec<(&str, String)>) -> Result<()> {
        let mut request = HttpRequest::new(HttpMethod::Post, self.inner.endpoints.token_url());
        request.headers.push(("Accept".to_string(), "application/json".to_string()));
        request.basic_auth = Some((
            self.inner.credentials.application_key().to_string(),
            self.inner.credentials.client_key().to_string(),
        ));
        request.body = Some(HttpBody::Form(
            form.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
        ));

        let response = self.inner.transport.send(request).await?;
        let grant = classify_grant(response)?;
        session.set_from_grant(&grant)
    }

    // ========================================================================
    // Resource dispatch
    // ========================================================================

    /// Send an authenticated request to the API host.
    ///
    /// The current access token is attached as-is; call
    /// [`refresh_if_expired`](Self::refresh_if_expired) first when freshness
    /// matters.
    ///
    /// # Errors
    ///
    /// `Unauthorized` on HTTP 401, `RateLimited` on HTTP 429. Other statuses,
    /// including non-2xx, return the decoded body.
    #[instrument(skip(self, options))]
    pub async fn perform_request(
        &self,
        method: HttpMethod,
        path: &str,
        options: RequestOptions,
    ) -> Result<Value> {
        let token = self
            .with_session(|session| session.access_token())
            .await?
            .map(|token| token.into_inner())
            .unwrap_or_default();

        let mut request = HttpRequest::new(method, self.inner.endpoints.api_url(path));
        request.headers.push(("Authorization".to_string(), format!("Bearer {}", token)));
        request.headers.push(("Accept".to_string(), "application/json".to_string()));
        options.apply(&mut request);

        let response = self.inner.transport.send(request).await?;
        classify_resource(response)
    }

    pub async fn get(&self, path: &str, options: RequestOptions) -> Result<Value> {
        self.perform_request(HttpMethod::Get, path, options).await
    }

    pub async fn post(&self, path: &str, options: RequestOptions) -> Result<Value> {
        self.perform_request(HttpMethod::Post, path, options).await
    }

    pub async fn delete(&self, path: &str) -> Result<Value> {
        self.perform_request(HttpMethod::Delete, path, RequestOptions::new())
            .await
    }
}

fn classify_grant(response: HttpResponse) -> Result<TokenGrant> {
    if response.is_success() {
        return TokenGrant::from_value(&response.json());
    }

    if response.status == 400
        && response.json().get("error").and_then(Value::as_str) == Some("invalid_client")
    {
        warn!("Token endpoint rejected the client");
        return Err(Error::InvalidClient);
    }

    warn!(status = response.status, "Token grant failed");
    Err(Error::Unclassified(ProtocolError::new(
        response.status,
        response.body,
    )))
}

fn classify_resource(response: HttpResponse) -> Result<Value> {
    match response.status {
        401 => {
            warn!("Request was not authorized");
            Err(Error::Unauthorized)
        }
        429 => {
            warn!("Rate limited");
            Err(Error::RateLimited)
        }
        status => {
            if !response.is_success() {
                debug!(status, "Returning body of unsuccessful response");
            }
            Ok(response.json())
        }
    }
}

impl fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoints", &self.inner.endpoints)
            .field("credentials", &self.inner.credentials)
            .field("session", &"[REDACTED]")
            .finish()
    }
}
