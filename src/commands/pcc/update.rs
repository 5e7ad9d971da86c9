use anyhow::{ensure, Result};
use clap::Parser;

use super::types::{Pcc, PccProperties};
use super::utils::{pcc_path, update_pcc};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Update a cross connect")]
pub struct Options {
    #[clap(long = "pcc-id", help = "ID of the cross connect")]
    pub pcc_id: String,

    #[clap(long = "name", help = "New name of the cross connect")]
    pub name: Option<String>,

    #[clap(long = "description", help = "New description of the cross connect")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Pcc>()?;

    ensure!(
        options.name.is_some() || options.description.is_some(),
        "Nothing to update, pass --name or --description"
    );

    let properties = PccProperties {
        name: options.name,
        description: options.description,
        ..Default::default()
    };

    let (pcc, request) = update_pcc(&state.http, &options.pcc_id, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &pcc_path(&options.pcc_id))
        .await?;

    log::info!("Updated cross connect `{}`", pcc.id);

    output.print_one(&pcc)
}
