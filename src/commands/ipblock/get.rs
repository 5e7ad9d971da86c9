use anyhow::Result;
use clap::Parser;

use super::types::IpBlock;
use super::utils::get_ipblock;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get an IP block")]
pub struct Options {
    #[clap(long = "ipblock-id", help = "ID of the IP block")]
    pub ipblock_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<IpBlock>()?;

    let ipblock = get_ipblock(&state.http, &options.ipblock_id).await?;

    output.print_one(&ipblock)
}
