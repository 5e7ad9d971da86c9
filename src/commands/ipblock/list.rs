use anyhow::Result;
use clap::Parser;

use super::types::IpBlock;
use super::utils::get_all_ipblocks;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List reserved IP blocks")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<IpBlock>()?;

    let ipblocks = get_all_ipblocks(&state.http).await?;

    output.print(&ipblocks)
}
