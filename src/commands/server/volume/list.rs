use anyhow::Result;
use clap::Parser;

use crate::commands::server::utils::get_attached_volumes;
use crate::commands::volume::types::Volume;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List volumes attached to a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    let volumes =
        get_attached_volumes(&state.http, &options.datacenter_id, &options.server_id).await?;

    output.print(&volumes)
}
