use anyhow::Result;
use clap::Parser;

use super::types::Datacenter;
use super::utils::get_all_datacenters;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List datacenters")]
pub struct Options {
    #[clap(long = "location", help = "Show only datacenters in this location, e.g. de/fra")]
    pub location: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Datacenter>()?;

    let mut datacenters = get_all_datacenters(&state.http).await?;

    if let Some(location) = options.location {
        datacenters.retain(|dc| dc.properties.location.as_deref() == Some(location.as_str()));
    }

    output.print(&datacenters)
}
