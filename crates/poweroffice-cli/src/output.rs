//! Output formatting helpers.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use colored::Colorize;
use serde::Serialize;

use poweroffice_api::ApiClient;
use poweroffice_core::SessionState;
use poweroffice_core::session::EXPIRES_AT_FORMAT;

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print a neutral status message.
pub fn info(msg: &str) {
    println!("{} {}", "•".blue(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print a value as pretty-printed JSON.
pub fn json_pretty<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

/// Read the lifecycle state and expiry of the client's session.
pub async fn session_snapshot(
    client: &ApiClient,
) -> Result<(SessionState, Option<DateTime<Utc>>)> {
    client
        .with_session(|session| -> poweroffice_core::Result<_> {
            Ok((session.state()?, session.expire_date()?))
        })
        .await
        .context("Failed to read session")
}

/// Print state, mode and expiry of the client's session.
pub async fn session_summary(client: &ApiClient) -> Result<()> {
    let (state, expires_at) = session_snapshot(client).await?;

    let state_label = match state {
        SessionState::Valid => state.to_string().green(),
        SessionState::ExpiredRefreshable => state.to_string().yellow(),
        SessionState::Empty | SessionState::ExpiredNotRefreshable => state.to_string().red(),
    };

    field("State", &state_label.to_string());
    field("Mode", if client.is_test_mode() { "test" } else { "live" });
    if let Some(expires_at) = expires_at {
        field("Expires", &expires_at.format(EXPIRES_AT_FORMAT).to_string());
    }

    Ok(())
}
