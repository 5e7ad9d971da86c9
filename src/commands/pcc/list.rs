use anyhow::Result;
use clap::Parser;

use super::types::Pcc;
use super::utils::get_all_pccs;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List cross connects")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Pcc>()?;

    let pccs = get_all_pccs(&state.http).await?;

    output.print(&pccs)
}
