use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Datacenter, DatacenterProperties};
use super::utils::{datacenter_path, update_datacenter};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a datacenter")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "name", help = "New name of the datacenter")]
    pub name: Option<String>,

    #[clap(long = "description", help = "New description of the datacenter")]
    pub description: Option<String>,

    #[clap(long = "sec-auth-protection", help = "Require 2-factor authentication")]
    pub sec_auth_protection: Option<bool>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Datacenter>()?;

    ensure!(
        options.name.is_some()
            || options.description.is_some()
            || options.sec_auth_protection.is_some(),
        "Nothing to update, pass at least one of --name, --description or --sec-auth-protection"
    );

    let properties = DatacenterProperties {
        name: options.name,
        description: options.description,
        sec_auth_protection: options.sec_auth_protection,
        ..Default::default()
    };

    let (datacenter, request) =
        update_datacenter(&state.http, &options.datacenter_id, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &datacenter_path(&datacenter.id))
        .await?;

    log::info!("Updated datacenter `{}`", datacenter.id);

    output.print_one(&datacenter)
}
