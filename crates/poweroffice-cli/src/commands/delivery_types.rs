//! Invoice delivery types command implementation.

use anyhow::Result;
use clap::Args;
use serde_json::json;

use poweroffice_api::InvoiceDeliveryType;

use crate::output;

#[derive(Args, Debug)]
pub struct DeliveryTypesArgs {
    /// Print one JSON object per line
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: DeliveryTypesArgs) -> Result<()> {
    for kind in InvoiceDeliveryType::ALL {
        if args.json {
            output::json(&json!({
                "code": kind.code(),
                "name": kind.name(),
                "description": kind.description(),
            }))?;
        } else {
            output::field(&format!("{} {}", kind.code(), kind.name()), kind.description());
        }
    }
    Ok(())
}
