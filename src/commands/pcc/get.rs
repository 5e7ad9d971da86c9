use anyhow::Result;
use clap::Parser;

use super::types::Pcc;
use super::utils::get_pcc;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a cross connect")]
pub struct Options {
    #[clap(long = "pcc-id", help = "ID of the cross connect")]
    pub pcc_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Pcc>()?;

    let pcc = get_pcc(&state.http, &options.pcc_id).await?;

    output.print_one(&pcc)
}
