use anyhow::Result;
use clap::Parser;

use super::types::Jwt;
use super::utils::generate_token;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Generate a new authentication token")]
pub struct Options {}

pub async fn handle(_options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Jwt>()?;

    let jwt = generate_token(&state.auth_http).await?;

    log::info!("Generated a new token, it will not be shown again");

    output.print_one(&jwt)
}
