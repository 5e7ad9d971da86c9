use anyhow::Result;
use clap::Parser;

use super::types::Image;
use super::utils::{get_all_images, ImageFilter};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List images")]
pub struct Options {
    #[clap(long = "location", help = "Show only images in this location")]
    pub location: Option<String>,

    #[clap(long = "licence-type", help = "Show only images with this licence type")]
    pub licence_type: Option<String>,

    #[clap(long = "type", help = "Show only images of this type, HDD or CDROM")]
    pub image_type: Option<String>,

    #[clap(long = "image-alias", help = "Show only images with an alias containing this")]
    pub alias: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Image>()?;

    let filter = ImageFilter {
        location: options.location,
        licence_type: options.licence_type,
        image_type: options.image_type,
        alias: options.alias,
    };

    let images = get_all_images(&state.http)
        .await?
        .into_iter()
        .filter(|image| filter.matches(image))
        .collect::<Vec<_>>();

    output.print(&images)
}
