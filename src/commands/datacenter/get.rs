use anyhow::Result;
use clap::Parser;

use super::types::Datacenter;
use super::utils::get_datacenter;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a datacenter")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Datacenter>()?;

    let datacenter = get_datacenter(&state.http, &options.datacenter_id).await?;

    output.print_one(&datacenter)
}
