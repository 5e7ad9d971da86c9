use anyhow::Result;
use clap::Parser;

use super::types::Token;
use super::utils::get_all_tokens;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List authentication tokens")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Token>()?;

    let tokens = get_all_tokens(&state.auth_http).await?;

    output.print(&tokens)
}
