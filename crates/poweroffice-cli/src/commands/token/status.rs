//! Session status command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use poweroffice_core::session::EXPIRES_AT_FORMAT;

use crate::config::ConfigArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct StatusArgs {
    /// Print the status as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: StatusArgs, config: &ConfigArgs) -> Result<()> {
    let client = config.session_client()?;

    if !args.json {
        output::field("Store", &config.store_path()?.display().to_string());
        return output::session_summary(&client).await;
    }

    let (state, expires_at) = output::session_snapshot(&client).await?;

    output::json_pretty(&json!({
        "state": state,
        "expires_at": expires_at.map(|at| at.format(EXPIRES_AT_FORMAT).to_string()),
        "test_mode": client.is_test_mode(),
        "endpoints": client.endpoints(),
        "store": config.store_path()?,
    }))
}
