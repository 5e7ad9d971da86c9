use anyhow::Result;
use clap::Parser;

use super::types::Share;
use super::utils::get_all_shares;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List resources shared with a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Share>()?;

    let shares = get_all_shares(&state.http, &options.group_id).await?;

    output.print(&shares)
}
