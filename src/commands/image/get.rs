use anyhow::Result;
use clap::Parser;

use super::types::Image;
use super::utils::get_image;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get an image")]
pub struct Options {
    #[clap(long = "image-id", help = "ID of the image")]
    pub image_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Image>()?;

    let image = get_image(&state.http, &options.image_id).await?;

    output.print_one(&image)
}
