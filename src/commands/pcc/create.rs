use anyhow::Result;
use clap::Parser;

use super::types::{Pcc, PccProperties};
use super::utils::{create_pcc, pcc_path};
use crate::state::State;
use crate::utils::wait::WaitOptions;

#[derive(Debug, Parser)]
#[clap(about = "Create a cross connect")]
pub struct Options {
    #[clap(long = "name", help = "Name of the cross connect")]
    pub name: Option<String>,

    #[clap(long = "description", help = "Description of the cross connect")]
    pub description: Option<String>,

    #[clap(flatten)]
    pub wait: WaitOptions,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Pcc>()?;

    let properties = PccProperties {
        name: options.name,
        description: options.description,
        ..Default::default()
    };

    let (pcc, request) = create_pcc(&state.http, properties).await?;

    options
        .wait
        .wait(&state.http, request.as_deref(), &pcc_path(&pcc.id))
        .await?;

    log::info!("Created cross connect `{}`", pcc.id);

    output.print_one(&pcc)
}
