use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_groups, group_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a user group")]
pub struct Options {
    #[clap(
        long = "group-id",
        help = "ID of the group",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub group_id: Option<String>,

    #[clap(long = "all", help = "Delete all groups")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let targets = match options.group_id {
        Some(id) => vec![(id.clone(), group_path(&id))],

        None => get_all_groups(&state.http)
            .await?
            .into_iter()
            .map(|group| (group.id.clone(), group_path(&group.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No groups to delete");
        return Ok(());
    }

    confirm(
        &format!("Are you sure you want to delete {} group(s)?", targets.len()),
        options.force,
    )?;

    delete_each(&state.http, "group", &targets, &options.wait).await
}
