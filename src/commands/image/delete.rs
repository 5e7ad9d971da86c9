use anyhow::Result;
use clap::Parser;

use super::utils::image_path;
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Delete a private image")]
pub struct Options {
    #[clap(long = "image-id", help = "ID of the image")]
    pub image_id: String,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    confirm(
        &format!(
            "Are you sure you want to delete image `{}`?",
            options.image_id
        ),
        options.force,
    )?;

    let request = state.http.delete(&image_path(&options.image_id)).await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!("Deleted image `{}`", options.image_id);

    Ok(())
}
