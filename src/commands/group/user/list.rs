use anyhow::Result;
use clap::Parser;

use crate::commands::group::types::User;
use crate::commands::group::utils::get_group_users;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List members of a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<User>()?;

    let users = get_group_users(&state.http, &options.group_id).await?;

    output.print(&users)
}
