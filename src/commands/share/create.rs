use anyhow::Result;
use clap::Parser;

use super::types::{Share, ShareProperties};
use super::utils::put_share;
use crate::state::State;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Share a resource with a group")]
pub struct Options {
    #[clap(long = "group-id", help = "ID of the group")]
    pub group_id: String,

    #[clap(long = "resource-id", help = "ID of the resource to share")]
    pub resource_id: String,

    #[clap(long = "edit-privilege", help = "Allow the group to edit the resource")]
    pub edit_privilege: bool,

    #[clap(long = "share-privilege", help = "Allow the group to share the resource further")]
    pub share_privilege: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Share>()?;

    let properties = ShareProperties {
        edit_privilege: Some(options.edit_privilege),
        share_privilege: Some(options.share_privilege),
    };

    let (share, request) = put_share(
        &state.http,
        "POST",
        &options.group_id,
        &options.resource_id,
        properties,
    )
    .await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!(
        "Shared resource `{}` with group `{}`",
        options.resource_id,
        options.group_id
    );

    output.print_one(&share)
}
