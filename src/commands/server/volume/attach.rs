use anyhow::Result;
use clap::Parser;

use crate::commands::server::utils::{attach_volume, attached_volume_path};
use crate::commands::volume::types::Volume;
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Attach a volume to a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,

    #[clap(long = "volume-id", help = "ID of the volume to attach")]
    pub volume_id: String,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    let (volume, request) = attach_volume(
        &state.http,
        &options.datacenter_id,
        &options.server_id,
        &options.volume_id,
    )
    .await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &attached_volume_path(&options.datacenter_id, &options.server_id, &options.volume_id),
        )
        .await?;

    log::info!(
        "Attached volume `{}` to server `{}`",
        options.volume_id,
        options.server_id
    );

    output.print_one(&volume)
}
