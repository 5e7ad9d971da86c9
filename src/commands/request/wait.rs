use std::time::Duration;

use anyhow::Result;
use clap::Parser;

use super::types::Request;
use super::utils::{get_request, status_path};
use crate::config::DEFAULT_TIMEOUT;
use crate::state::State;
use crate::utils::wait::{wait_for_request, Watcher};

#[derive(Debug, Parser)]
#[clap(about = "Wait until a request is DONE or FAILED")]
pub struct Options {
    #[clap(long = "request-id", help = "ID of the request")]
    pub request_id: String,

    #[clap(
        short = 't',
        long = "timeout",
        help = "Seconds to wait for the request",
        default_value_t = DEFAULT_TIMEOUT
    )]
    pub timeout: u64,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    let output = state.printer.prepare::<Request>()?;

    let path = status_path(&options.request_id);

    wait_for_request(
        &state.http,
        Some(path.as_str()),
        Watcher::new(Duration::from_secs(options.timeout)),
    )
    .await?;

    let request = get_request(&state.http, &options.request_id).await?;

    output.print_one(&request)
}
