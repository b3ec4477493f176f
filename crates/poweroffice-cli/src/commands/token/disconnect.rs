//! Disconnect command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct DisconnectArgs {}

pub async fn run(_args: DisconnectArgs, config: &ConfigArgs) -> Result<()> {
    let client = config.session_client()?;

    client
        .disconnect()
        .await
        .context("Failed to clear session")?;

    output::success("Session cleared");
    Ok(())
}
