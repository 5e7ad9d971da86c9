use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Image, ImageProperties};
use super::utils::{image_path, update_image};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a private image")]
pub struct Options {
    #[clap(long = "image-id", help = "ID of the image")]
    pub image_id: String,

    #[clap(long = "name", help = "New name of the image")]
    pub name: Option<String>,

    #[clap(long = "description", help = "New description of the image")]
    pub description: Option<String>,

    #[clap(
        long = "licence-type",
        help = "New licence type",
        value_parser = ["LINUX", "WINDOWS", "WINDOWS2016", "UNKNOWN", "OTHER"]
    )]
    pub licence_type: Option<String>,

    #[clap(
        long = "cloud-init",
        help = "Cloud init compatibility",
        value_parser = ["NONE", "V1"]
    )]
    pub cloud_init: Option<String>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Image>()?;

    let properties = ImageProperties {
        name: options.name,
        description: options.description,
        licence_type: options.licence_type,
        cloud_init: options.cloud_init,
        ..Default::default()
    };

    ensure!(
        properties.name.is_some()
            || properties.description.is_some()
            || properties.licence_type.is_some()
            || properties.cloud_init.is_some(),
        "Nothing to update, pass at least one property to change"
    );

    let (image, request) = update_image(&state.http, &options.image_id, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &image_path(&options.image_id))
        .await?;

    log::info!("Updated image `{}`", image.id);

    output.print_one(&image)
}
