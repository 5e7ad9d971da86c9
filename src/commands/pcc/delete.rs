use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_pccs, pcc_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a cross connect")]
pub struct Options {
    #[clap(
        long = "pcc-id",
        help = "ID of the cross connect",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub pcc_id: Option<String>,

    #[clap(long = "all", help = "Delete all cross connects")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let targets = match options.pcc_id {
        Some(id) => vec![(id.clone(), pcc_path(&id))],

        None => get_all_pccs(&state.http)
            .await?
            .into_iter()
            .map(|pcc| (pcc.id.clone(), pcc_path(&pcc.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No cross connects to delete");
        return Ok(());
    }

    confirm(
        &format!(
            "Are you sure you want to delete {} cross connect(s)?",
            targets.len()
        ),
        options.force,
    )?;

    delete_each(&state.http, "cross connect", &targets, &options.wait).await
}
