use anyhow::Result;
use clap::Parser;

use super::types::Volume;
use super::utils::get_all_volumes;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List volumes in a datacenter")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    let volumes = get_all_volumes(&state.http, &options.datacenter_id).await?;

    output.print(&volumes)
}
