use anyhow::Result;
use clap::Parser;

use super::types::{Datacenter, DatacenterProperties};
use super::utils::{create_datacenter, datacenter_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a datacenter")]
pub struct Options {
    #[clap(long = "name", help = "Name of the datacenter")]
    pub name: Option<String>,

    #[clap(long = "description", help = "Description of the datacenter")]
    pub description: Option<String>,

    #[clap(
        long = "location",
        help = "Location of the datacenter, e.g. de/fra",
        default_value = "de/txl"
    )]
    pub location: String,

    #[clap(long = "sec-auth-protection", help = "Require 2-factor authentication")]
    pub sec_auth_protection: bool,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Datacenter>()?;

    let properties = DatacenterProperties {
        name: options.name,
        description: options.description,
        location: Some(options.location),
        sec_auth_protection: options.sec_auth_protection.then_some(true),
        ..Default::default()
    };

    let (datacenter, request) = create_datacenter(&state.http, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &datacenter_path(&datacenter.id))
        .await?;

    log::info!("Created datacenter `{}`", datacenter.id);

    output.print_one(&datacenter)
}
