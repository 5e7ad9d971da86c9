use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Server, ServerProperties};
use super::utils::{parse_ram, server_path, update_server};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,

    #[clap(long = "name", help = "New name of the server")]
    pub name: Option<String>,

    #[clap(long = "cores", help = "New number of cores")]
    pub cores: Option<u32>,

    #[clap(
        long = "ram",
        help = "New memory size, e.g. 4GB. Plain numbers are megabytes",
        value_parser = parse_ram
    )]
    pub ram: Option<u64>,

    #[clap(long = "cpu-family", help = "New CPU family")]
    pub cpu_family: Option<String>,

    #[clap(
        long = "availability-zone",
        help = "New availability zone",
        value_parser = ["AUTO", "ZONE_1", "ZONE_2"]
    )]
    pub availability_zone: Option<String>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Server>()?;

    let properties = ServerProperties {
        name: options.name,
        cores: options.cores,
        ram: options.ram,
        cpu_family: options.cpu_family,
        availability_zone: options.availability_zone,
        ..Default::default()
    };

    ensure!(
        serde_json::to_value(&properties)?
            .as_object()
            .is_some_and(|fields| !fields.is_empty()),
        "Nothing to update, pass at least one property to change"
    );

    let (server, request) = update_server(
        &state.http,
        &options.datacenter_id,
        &options.server_id,
        properties,
    )
    .await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &server_path(&options.datacenter_id, &options.server_id),
        )
        .await?;

    log::info!("Updated server `{}`", server.id);

    output.print_one(&server)
}
