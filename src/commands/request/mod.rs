mod get;
mod list;
pub mod types;
pub mod utils;
mod wait;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "list", alias = "ls")]
    List(list::Options),
    Get(get::Options),
    Wait(wait::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Inspect and wait for provisioning requests")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Get(options) => get::handle(options, state).await,
        Commands::Wait(options) => wait::handle(options, state).await,
    }
}
