use anyhow::Result;
use clap::Parser;

use super::types::Server;
use super::utils::get_server;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Server>()?;

    let server = get_server(&state.http, &options.datacenter_id, &options.server_id).await?;

    output.print_one(&server)
}
