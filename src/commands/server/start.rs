use anyhow::Result;
use clap::Parser;

use super::utils::{power_action, server_path, PowerAction};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Start a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let request = power_action(
        &state.http,
        &options.datacenter_id,
        &options.server_id,
        PowerAction::Start,
    )
    .await?;

    options
        .wait
        .wait(
            &state.http,
            request.as_deref(),
            &server_path(&options.datacenter_id, &options.server_id),
        )
        .await?;

    log::info!("Started server `{}`", options.server_id);

    Ok(())
}
