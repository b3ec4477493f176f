//! Refresh token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct RefreshArgs {
    /// Only refresh when the access token has expired
    #[arg(long)]
    pub if_expired: bool,
}

pub async fn run(args: RefreshArgs, config: &ConfigArgs) -> Result<()> {
    let client = config.client()?;

    eprintln!("{}", "Refreshing session...".dimmed());

    if args.if_expired {
        let refreshed = client
            .refresh_if_expired()
            .await
            .context("Failed to refresh session")?;

        if !refreshed {
            output::info("Session not refreshed");
            return output::session_summary(&client).await;
        }
    } else {
        client
            .refresh_access_token()
            .await
            .context("Failed to refresh session")?;
    }

    output::success("Session refreshed successfully");
    output::session_summary(&client).await
}
