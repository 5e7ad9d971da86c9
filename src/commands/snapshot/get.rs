use anyhow::Result;
use clap::Parser;

use super::types::Snapshot;
use super::utils::get_snapshot;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a snapshot")]
pub struct Options {
    #[clap(long = "snapshot-id", help = "ID of the snapshot")]
    pub snapshot_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Snapshot>()?;

    let snapshot = get_snapshot(&state.http, &options.snapshot_id).await?;

    output.print_one(&snapshot)
}
