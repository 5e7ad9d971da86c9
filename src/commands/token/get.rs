use anyhow::Result;
use clap::Parser;

use super::types::Token;
use super::utils::get_token;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get an authentication token")]
pub struct Options {
    #[clap(long = "token-id", help = "ID of the token")]
    pub token_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Token>()?;

    let token = get_token(&state.auth_http, &options.token_id).await?;

    output.print_one(&token)
}
