use anyhow::Result;
use clap::Parser;

use super::types::{Snapshot, SnapshotProperties};
use super::utils::{create_snapshot, snapshot_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a snapshot of a volume")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "volume-id", help = "ID of the volume to snapshot")]
    pub volume_id: String,

    #[clap(long = "name", help = "Name of the snapshot")]
    pub name: Option<String>,

    #[clap(long = "description", help = "Description of the snapshot")]
    pub description: Option<String>,

    #[clap(
        long = "licence-type",
        help = "Licence type of the snapshot",
        value_parser = ["LINUX", "WINDOWS", "WINDOWS2016", "UNKNOWN", "OTHER"]
    )]
    pub licence_type: Option<String>,

    #[clap(long = "sec-auth-protection", help = "Require 2-factor authentication")]
    pub sec_auth_protection: bool,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Snapshot>()?;

    let properties = SnapshotProperties {
        name: options.name,
        description: options.description,
        licence_type: options.licence_type,
        sec_auth_protection: options.sec_auth_protection.then_some(true),
        ..Default::default()
    };

    let (snapshot, request) = create_snapshot(
        &state.http,
        &options.datacenter_id,
        &options.volume_id,
        &properties,
    )
    .await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &snapshot_path(&snapshot.id))
        .await?;

    log::info!(
        "Created snapshot `{}` of volume `{}`",
        snapshot.id,
        options.volume_id
    );

    output.print_one(&snapshot)
}
