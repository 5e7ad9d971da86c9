use anyhow::Result;
use clap::Parser;

use super::types::Request;
use super::utils::{filter_requests, get_all_requests};
use crate::state::State;

#[derive(Debug, Parser)]
#[clap(about = "List requests, newest first")]
pub struct Options {
    #[clap(long = "latest", help = "Show only the N most recent requests")]
    pub latest: Option<usize>,

    #[clap(long = "method", help = "Show only requests with this HTTP method")]
    pub method: Option<String>,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Request>()?;

    let requests = get_all_requests(&state.http).await?;
    let requests = filter_requests(requests, options.method.as_deref(), options.latest);

    output.print(&requests)
}
