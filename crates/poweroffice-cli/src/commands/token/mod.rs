//! Token subcommand implementations.

mod acquire;
mod disconnect;
mod refresh;
mod status;

use anyhow::Result;
use clap::{Args, Subcommand};

use crate::config::ConfigArgs;

#[derive(Args, Debug)]
pub struct TokenCommand {
    #[command(subcommand)]
    pub command: TokenSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum TokenSubcommand {
    /// Authenticate with the application and client keys
    Acquire(acquire::AcquireArgs),

    /// Renew the session with the stored refresh token
    Refresh(refresh::RefreshArgs),

    /// Display the stored session
    Status(status::StatusArgs),

    /// Clear the stored session
    Disconnect(disconnect::DisconnectArgs),
}

pub async fn handle(cmd: TokenCommand, config: &ConfigArgs) -> Result<()> {
    match cmd.command {
        TokenSubcommand::Acquire(args) => acquire::run(args, config).await,
        TokenSubcommand::Refresh(args) => refresh::run(args, config).await,
        TokenSubcommand::Status(args) => status::run(args, config).await,
        TokenSubcommand::Disconnect(args) => disconnect::run(args, config).await,
    }
}
