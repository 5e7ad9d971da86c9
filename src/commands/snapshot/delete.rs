use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_snapshots, snapshot_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a snapshot")]
pub struct Options {
    #[clap(
        long = "snapshot-id",
        help = "ID of the snapshot",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub snapshot_id: Option<String>,

    #[clap(long = "all", help = "Delete all snapshots")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let targets = match options.snapshot_id {
        Some(id) => vec![(id.clone(), snapshot_path(&id))],

        None => get_all_snapshots(&state.http)
            .await?
            .into_iter()
            .map(|snapshot| (snapshot.id.clone(), snapshot_path(&snapshot.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No snapshots to delete");
        return Ok(());
    }

    confirm(
        &format!(
            "Are you sure you want to delete {} snapshot(s)?",
            targets.len()
        ),
        options.force,
    )?;

    delete_each(&state.http, "snapshot", &targets, &options.wait).await
}
