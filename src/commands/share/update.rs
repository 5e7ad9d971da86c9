use anyhow::{ensure, Result};
use clap::Parser;

use super::types::Share;
use super::utils::{get_share, put_share};
use crate::state::State;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Change the privileges of a share")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "resource-id", help = "ID of the shared resource")]
    pub resource_id: String,

    #[clap(long = "edit-privilege", help = "Allow the group to edit the resource")]
    pub edit_privilege: Option<bool>,

    #[clap(long = "share-privilege", help = "Allow the group to share the resource further")]
    pub share_privilege: Option<bool>,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Share>()?;

    ensure!(
        options.edit_privilege.is_some() || options.share_privilege.is_some(),
        "Nothing to update, pass --edit-privilege or --share-privilege"
    );

    let mut properties = get_share(&state.http, &options.group_id, &options.resource_id)
        .await?
        .properties;

    if options.edit_privilege.is_some() {
        properties.edit_privilege = options.edit_privilege;
    }

    if options.share_privilege.is_some() {
        properties.share_privilege = options.share_privilege;
    }

    let (share, request) = put_share(
        &state.http,
        "PUT",
        &options.group_id,
        &options.resource_id,
        properties,
    )
    .await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!("Updated share `{}`", options.resource_id);

    output.print_one(&share)
}
