use anyhow::Result;
use clap::Parser;

use crate::commands::group::utils::remove_group_user;
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Remove a user from a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "user-id", help = "ID of the user")]
    pub user_id: String,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    confirm(
        &format!(
            "Are you sure you want to remove user `{}` from group `{}`?",
            options.user_id, options.group_id
        ),
        options.force,
    )?;

    let request = remove_group_user(&state.http, &options.group_id, &options.user_id).await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!(
        "Removed user `{}` from group `{}`",
        options.user_id,
        options.group_id
    );

    Ok(())
}
