use anyhow::Result;
use clap::Parser;

use super::types::Group;
use super::utils::get_group;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a user group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Group>()?;

    let group = get_group(&state.http, &options.group_id).await?;

    output.print_one(&group)
}
