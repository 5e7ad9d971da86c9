use anyhow::Result;
use clap::Parser;

use super::types::Volume;
use super::utils::get_volume;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a volume")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "volume-id", help = "ID of the volume")]
    pub volume_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    let volume = get_volume(&state.http, &options.datacenter_id, &options.volume_id).await?;

    output.print_one(&volume)
}
