use anyhow::Result;
use clap::Parser;

use super::utils::{power_action, server_path, PowerAction};
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Stop a server, it keeps its resources but is powered off")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(long = "server-id", help = "ID of the server")]
    pub server_id: String,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    confirm(
        &format!(
            "Are you sure you want to stop server `{}`?",
            options.server_id
        ),
        options.force,
    )?;

    let request = power_action(
        &state.http,
        &options.datacenter_id,
        &options.server_id,
        PowerAction::Stop,
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

    log::info!("Stopped server `{}`", options.server_id);

    Ok(())
}
