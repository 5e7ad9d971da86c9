use anyhow::Result;
use clap::Parser;

use super::types::Request;
use super::utils::get_request;
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "Get a request and its status")]
pub struct Options {
    #[clap(long = "request-id", help = "ID of the request")]
    pub request_id: String,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Request>()?;

    let request = get_request(&state.http, &options.request_id).await?;

    output.print_one(&request)
}
