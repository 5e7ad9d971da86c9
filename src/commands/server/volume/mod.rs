mod attach;
mod detach;
mod list;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "list", alias = "ls")]
    List(list::Options),
    Attach(attach::Options),
    Detach(detach::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage volumes attached to a server")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Attach(options) => attach::handle(options, state).await,
        Commands::Detach(options) => detach::handle(options, state).await,
    }
}
