mod add;
mod get;
mod list;
mod remove;
pub mod types;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "list", alias = "ls")]
    List(list::Options),
    Get(get::Options),
    Add(add::Options),
    #[clap(name = "remove", alias = "rm")]
    Remove(remove::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage labels of datacenters, servers, volumes, IP blocks, snapshots and images")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Get(options) => get::handle(options, state).await,
        Commands::Add(options) => add::handle(options, state).await,
        Commands::Remove(options) => remove::handle(options, state).await,
    }
}
