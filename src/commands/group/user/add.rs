use anyhow::Result;
use clap::Parser;

use crate::commands::group::types::User;
use crate::commands::group::utils::add_group_user;
use crate::state::State;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Add a user to a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "user-id", help = "ID of the user")]
    pub user_id: String,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<User>()?;

    let (user, request) = add_group_user(&state.http, &options.group_id, &options.user_id).await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!(
        "Added user `{}` to group `{}`",
        options.user_id,
        options.group_id
    );

    output.print_one(&user)
}
