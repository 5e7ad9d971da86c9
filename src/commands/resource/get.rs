use anyhow::Result;
use clap::Parser;

use super::types::{ManagedResource, RESOURCE_TYPES};
use super::utils::get_resource;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a resource by type and ID")]
pub struct Options {
    #[clap(long = "type", help = "Type of the resource", value_parser = RESOURCE_TYPES)]
    pub resource_type: String,

    #[clap(long = "resource-id", help = "ID of the resource")]
    pub resource_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<ManagedResource>()?;

    let resource =
        get_resource(&state.http, &options.resource_type, &options.resource_id).await?;

    output.print_one(&resource)
}
