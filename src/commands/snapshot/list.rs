use anyhow::Result;
use clap::Parser;

use super::types::Snapshot;
use super::utils::get_all_snapshots;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List snapshots")]
pub struct Options {
    #[clap(long = "location", help = "Show only snapshots in this location")]
    pub location: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Snapshot>()?;

    let mut snapshots = get_all_snapshots(&state.http).await?;

    if let Some(location) = options.location {
        snapshots
            .retain(|snapshot| snapshot.properties.location.as_deref() == Some(location.as_str()));
    }

    output.print(&snapshots)
}
