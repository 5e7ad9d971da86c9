use anyhow::Result;
use clap::Parser;

use super::types::Share;
use super::utils::get_share;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a resource shared with a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "resource-id", help = "ID of the shared resource")]
    pub resource_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Share>()?;

    let share = get_share(&state.http, &options.group_id, &options.resource_id).await?;

    output.print_one(&share)
}
