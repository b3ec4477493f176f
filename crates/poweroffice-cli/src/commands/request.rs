//! Raw API request command implementation.

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Args, ValueEnum};
use tracing::debug;

use poweroffice_api::RequestOptions;
use poweroffice_core::{DateRange, HttpMethod};

use crate::config::ConfigArgs;
use crate::output;

#[derive(ValueEnum, Debug, Clone, Copy)]
#[value(rename_all = "UPPER")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl From<Method> for HttpMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => HttpMethod::Get,
            Method::Post => HttpMethod::Post,
            Method::Put => HttpMethod::Put,
            Method::Patch => HttpMethod::Patch,
            Method::Delete => HttpMethod::Delete,
        }
    }
}

#[derive(Args, Debug)]
pub struct RequestArgs {
    /// HTTP method
    #[arg(value_enum, ignore_case = true)]
    pub method: Method,

    /// Path relative to the API host (e.g. /customer/42)
    pub path: String,

    /// Query parameter as key=value (repeatable)
    #[arg(short, long = "query", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,

    /// JSON request body
    #[arg(short, long)]
    pub body: Option<String>,

    /// Start of a date range (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS")
    #[arg(long, value_parser = parse_datetime, requires = "to")]
    pub from: Option<NaiveDateTime>,

    /// End of a date range
    #[arg(long, value_parser = parse_datetime, requires = "from")]
    pub to: Option<NaiveDateTime>,

    /// Do not refresh an expired session before sending
    #[arg(long)]
    pub no_refresh: bool,
}

pub async fn run(args: RequestArgs, config: &ConfigArgs) -> Result<()> {
    let client = config.session_client()?;

    if !args.no_refresh && config.has_credentials() {
        let refreshed = client
            .refresh_if_expired()
            .await
            .context("Failed to refresh session")?;
        debug!(refreshed, "checked session expiry");
    }

    let mut options = RequestOptions::new();
    for (key, value) in args.query {
        options = options.query(key, value);
    }
    if let (Some(from), Some(to)) = (args.from, args.to) {
        options = options.date_range(&DateRange::new(from, to)?);
    }
    if let Some(body) = args.body {
        let body = serde_json::from_str(&body).context("Request body is not valid JSON")?;
        options = options.json(body);
    }

    let response = client
        .perform_request(args.method.into(), &args.path, options)
        .await
        .with_context(|| format!("Request to {} failed", args.path))?;

    output::json_pretty(&response)
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (key, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected key=value, got '{}'", s))?;
    Ok((key.to_string(), value.to_string()))
}

fn parse_datetime(s: &str) -> Result<NaiveDateTime, String> {
    for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S"] {
        if let Ok(value) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(value);
        }
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .ok_or_else(|| format!("invalid date '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_key_value_pairs() {
        assert_eq!(
            parse_key_value("$filter=Code eq 1").unwrap(),
            ("$filter".to_string(), "Code eq 1".to_string())
        );
        assert!(parse_key_value("novalue").is_err());
    }

    #[test]
    fn parses_dates_and_timestamps() {
        let midnight = parse_datetime("2024-01-31").unwrap();
        assert_eq!(midnight.to_string(), "2024-01-31 00:00:00");

        let timestamp = parse_datetime("2024-01-31 13:45:00").unwrap();
        assert_eq!(timestamp, parse_datetime("2024-01-31T13:45:00").unwrap());

        assert!(parse_datetime("31.01.2024").is_err());
    }
}
