use anyhow::Result;
use clap::Parser;

use super::utils::{get_all_volumes, volume_path};
use crate::state::State;
use crate::utils::batch::delete_each;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a volume")]
pub struct Options {
    #[clap(long = "datacenter-id", help = "ID of the datacenter")]
    pub datacenter_id: String,

    #[clap(
        long = "volume-id",
        help = "ID of the volume",
        required_unless_present = "all",
        conflicts_with = "all"
    )]
    pub volume_id: Option<String>,

    #[clap(long = "all", help = "Delete all volumes in the datacenter")]
    pub all: bool,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let datacenter_id = &options.datacenter_id;

    let targets = match options.volume_id {
        Some(id) => vec![(id.clone(), volume_path(datacenter_id, &id))],

        None => get_all_volumes(&state.http, datacenter_id)
            .await?
            .into_iter()
            .map(|volume| (volume.id.clone(), volume_path(datacenter_id, &volume.id)))
            .collect(),
    };

    if targets.is_empty() {
        log::info!("No volumes to delete");
        return Ok(());
    }

    confirm(
        &format!("Are you sure you want to delete {} volume(s)?", targets.len()),
        options.force,
    )?;

    delete_each(&state.http, "volume", &targets, &options.wait).await
}
