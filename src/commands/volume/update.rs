use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Volume, VolumeProperties};
use super::utils::{parse_volume_size, update_volume, volume_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a volume")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "volume-id", help = "ID of the volume")]
    pub volume_id: String,

    #[clap(long = "name", help = "New name of the volume")]
    pub name: Option<String>,

    #[clap(
        long = "size",
        help = "New size of the volume, volumes can only grow",
        value_parser = parse_volume_size
    )]
    pub size: Option<f64>,

    #[clap(long = "bus", help = "New bus", value_parser = ["VIRTIO", "IDE"])]
    pub bus: Option<String>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Volume>()?;

    ensure!(
        options.name.is_some() || options.size.is_some() || options.bus.is_some(),
        "Nothing to update, pass at least one of --name, --size or --bus"
    );

    let properties = VolumeProperties {
        name: options.name,
        size: options.size,
        bus: options.bus,
        ..Default::default()
    };

    let (volume, request) = update_volume(
        &state.http,
        &options.datacenter_id,
        &options.volume_id,
        properties,
    )
    .await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &volume_path(&options.datacenter_id, &options.volume_id),
        )
        .await?;

    log::info!("Updated volume `{}`", volume.id);

    output.print_one(&volume)
}
