use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Snapshot, SnapshotProperties};
use super::utils::{snapshot_path, update_snapshot};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a snapshot")]
pub struct Options {
    #[clap(long = "snapshot-id", help = "ID of the snapshot")]
    pub snapshot_id: String,

    #[clap(long = "name", help = "New name of the snapshot")]
    pub name: Option<String>,

    #[clap(long = "description", help = "New description of the snapshot")]
    pub description: Option<String>,

    #[clap(
        long = "licence-type",
        help = "New licence type",
        value_parser = ["LINUX", "WINDOWS", "WINDOWS2016", "UNKNOWN", "OTHER"]
    )]
    pub licence_type: Option<String>,

    #[clap(long = "sec-auth-protection", help = "Require 2-factor authentication")]
    pub sec_auth_protection: Option<bool>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Snapshot>()?;

    let properties = SnapshotProperties {
        name: options.name,
        description: options.description,
        licence_type: options.licence_type,
        sec_auth_protection: options.sec_auth_protection,
        ..Default::default()
    };

    ensure!(
        properties.name.is_some()
            || properties.description.is_some()
            || properties.licence_type.is_some()
            || properties.sec_auth_protection.is_some(),
        "Nothing to update, pass at least one property to change"
    );

    let (snapshot, request) =
        update_snapshot(&state.http, &options.snapshot_id, properties).await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &snapshot_path(&options.snapshot_id),
        )
        .await?;

    log::info!("Updated snapshot `{}`", snapshot.id);

    output.print_one(&snapshot)
}
