use anyhow::Result;
use clap::Parser;

use super::types::{IpBlock, IpBlockProperties};
use super::utils::{create_ipblock, ipblock_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Reserve an IP block")]
pub struct Options {
    #[clap(long = "name", help = "Name of the IP block")]
    pub name: Option<String>,

    #[clap(
        long = "location",
        help = "Location of the IP block, e.g. de/fra",
        default_value = "de/txl"
    )]
    pub location: String,

    #[clap(long = "size", help = "Number of IPs in the block", default_value_t = 2)]
    pub size: u32,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<IpBlock>()?;

    let properties = IpBlockProperties {
        name: options.name,
        location: Some(options.location),
        size: Some(options.size),
        ..Default::default()
    };

    let (ipblock, request) = create_ipblock(&state.http, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &ipblock_path(&ipblock.id))
        .await?;

    log::info!("Reserved IP block `{}`", ipblock.id);

    output.print_one(&ipblock)
}
