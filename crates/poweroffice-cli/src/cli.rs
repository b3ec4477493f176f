//! CLI argument definitions.

use clap::{Parser, Subcommand};

use crate::commands::delivery_types::DeliveryTypesArgs;
use crate::commands::request::RequestArgs;
use crate::commands::token::TokenCommand;
use crate::config::ConfigArgs;

/// PowerOffice Go session and API tool.
#[derive(Parser, Debug)]
#[command(name = "poweroffice")]
#[command(author, version = env!("POWEROFFICE_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub config: ConfigArgs,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Token grants and session inspection
    Token(TokenCommand),

    /// Send an authenticated request to the API
    Request(RequestArgs),

    /// List the invoice delivery types
    DeliveryTypes(DeliveryTypesArgs),
}
