use anyhow::Result;
use clap::Parser;

use super::types::{ManagedResource, RESOURCE_TYPES};
use super::utils::get_all_resources;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List every resource you have access to")]
pub struct Options {
    #[clap(
        long = "type",
        help = "Show only resources of this type",
        value_parser = RESOURCE_TYPES
    )]
    pub resource_type: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<ManagedResource>()?;

    let resources = get_all_resources(&state.http, options.resource_type.as_deref()).await?;

    output.print(&resources)
}
