use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_ipblocks, ipblock_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Release an IP block")]
pub struct Options {
    #[clap(
        long = "ipblock-id",
        help = "ID of the IP block",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub ipblock_id: Option<String>,

    #[clap(long = "all", help = "Release all IP blocks")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let targets = match options.ipblock_id {
        Some(id) => vec![(id.clone(), ipblock_path(&id))],

        None => get_all_ipblocks(&state.http)
            .await?
            .into_iter()
            .map(|ipblock| (ipblock.id.clone(), ipblock_path(&ipblock.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No IP blocks to release");
        return Ok(());
    }

    confirm(
        &format!(
            "Are you sure you want to release {} IP block(s)?",
            targets.len()
        ),
        options.force,
    )?;

    delete_each(&state.http, "IP block", &targets, &options.wait).await
}
