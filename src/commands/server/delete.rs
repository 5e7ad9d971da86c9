use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_servers, server_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a server")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(
        long = "server-id",
        help = "ID of the server",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub server_id: Option<String>,

    #[clap(long = "all", help = "Delete all servers in the datacenter")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let datacenter_id = &options.datacenter_id;

    let targets = match options.server_id {
        Some(id) => vec![(id.clone(), server_path(datacenter_id, &id))],

        None => get_all_servers(&state.http, datacenter_id)
            .await?
            .into_iter()
            .map(|server| (server.id.clone(), server_path(datacenter_id, &server.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No servers to delete");
        return Ok(());
    }

    confirm(
        &format!("Are you sure you want to delete {} server(s)?", targets.len()),
        options.force,
    )?;

    delete_each(&state.http, "server", &targets, &options.wait).await
}
