#![warn(clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use ionosctl::commands::handle_command;
use ionosctl::state::State;
use ionosctl::{utils, CLI};

#[tokio::main]
async fn main() -> Result<()> {
    // setup panic hook
    utils::set_hook();

    // create a new CLI instance
    let cli = CLI::parse();

    utils::logs(cli.verbose);

    let state = match State::new(cli.state_options()).await {
        Ok(state) => state,
        Err(error) => {
            log::error!("{error}");
            std::process::exit(1);
        }
    };

    if let Err(error) = handle_command(cli.commands, state).await {
        log::error!("{error}");
        std::process::exit(1);
    }

    Ok(())
}
