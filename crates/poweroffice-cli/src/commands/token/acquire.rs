//! Acquire token command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct AcquireArgs {}

pub async fn run(_args: AcquireArgs, config: &ConfigArgs) -> Result<()> {
    let client = config.client()?;

    eprintln!("{}", "Requesting access token...".dimmed());

    client
        .acquire_token()
        .await
        .context("Failed to acquire access token")?;

    output::success("Access token acquired");
    output::session_summary(&client).await
}
