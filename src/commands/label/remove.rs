use anyhow::{Context, Result};
use clap::Parser;

use super::types::LabelTarget;
use crate::state::State;
use crate::utils::confirm::confirm;
use crate::utils::wait::RequestWaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Remove a label from a resource")]
#[clap(mut_arg("resource_type", |arg| arg.required(true)))]
pub struct Options {
    #[clap(long = "label-key", help = "Key of the label")]
    pub key: String,

    #[clap(flatten)]
    pub target: LabelTarget,

    #[clap(short = 'f', long = "force", help = "Skip confirmation")]
    pub force: bool,

    #[clap(flatten)]
    pub wait: RequestWaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let labels_path = options
        .target
        .labels_path()?
        .context("--resource-type is required")?;

    confirm(
        &format!("Are you sure you want to remove label `{}`?", options.key),
        options.force,
    )?;

    let request = state
        .http
        .delete(&format!("{labels_path}/{}", options.key))
        .await?;

    options.wait.wait(&state.http, request.as_deref()).await?;

    log::info!("Removed label `{}`", options.key);

    Ok(())
}
