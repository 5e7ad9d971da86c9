use anyhow::Result;
use clap::Parser;

use super::types::{IpBlock, IpBlockProperties};
use super::utils::{ipblock_path, update_ipblock};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Rename an IP block")]
pub struct Options {
    #[clap(long = "ipblock-id", help = "ID of the IP block")]
    pub ipblock_id: String,

    #[clap(long = "name", help = "New name of the IP block")]
    pub name: String,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<IpBlock>()?;

    let properties = IpBlockProperties {
        name: Some(options.name),
        ..Default::default()
    };

    let (ipblock, request) = update_ipblock(&state.http, &options.ipblock_id, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &ipblock_path(&options.ipblock_id))
        .await?;

    log::info!("Updated IP block `{}`", ipblock.id);

    output.print_one(&ipblock)
}
