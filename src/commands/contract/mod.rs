mod get;
pub mod types;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Get(get::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Inspect your contract and its resource limits")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::Get(options) => get::handle(options, state).await,
    }
}
