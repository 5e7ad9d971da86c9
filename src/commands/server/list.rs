use anyhow::Result;
use clap::Parser;

use super::types::Server;
use super::utils::get_all_servers;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List servers in a datacenter")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Server>()?;

    let servers = get_all_servers(&state.http, &options.datacenter_id).await?;

    output.print(&servers)
}
