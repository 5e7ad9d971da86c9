use anyhow::Result;
use clap::Parser;

use super::types::{limit_columns, Contract};
use crate::state::State;
use crate::types::Collection;

#[derive(Debug, Parser)]
#[clap(about = "Get information about your contract")]
pub struct Options {
    #[clap(
        long = "resource-limits",
        help = "Show the limits of one kind of resource",
        value_parser = ["CORES", "RAM", "HDD", "SSD", "IPS", "K8S"]
    )]
    pub resource_limits: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let mut printer = state.printer.clone();

    if let Some(limit) = &options.resource_limits {
        if printer.cols.is_empty() {
            printer.cols = limit_columns(limit).iter().map(ToString::to_string).collect();
        }
    }

    let output = printer.prepare::<Contract>()?;

    let contracts = state
        .http
        .get::<Collection<Contract>>("/contracts")
        .await?
        .items;

    output.print(&contracts)
}
