use anyhow::Result;
use clap::Parser;

use super::types::{Group, GroupProperties, Privileges};
use super::utils::{create_group, group_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a user group")]
pub struct Options {
    #[clap(long = "name", help = "Name of the group")]
    pub name: String,

    #[clap(flatten)]
    pub privileges: Privileges,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Group>()?;

    let properties = GroupProperties {
        name: Some(options.name),
        privileges: options.privileges,
    };

    let (group, request) = create_group(&state.http, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &group_path(&group.id))
        .await?;

    log::info!("Created group `{}`", group.id);

    output.print_one(&group)
}
