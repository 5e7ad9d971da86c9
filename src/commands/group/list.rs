use anyhow::Result;
use clap::Parser;

use super::types::Group;
use super::utils::get_all_groups;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List user groups")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Group>()?;

    let groups = get_all_groups(&state.http).await?;

    output.print(&groups)
}
