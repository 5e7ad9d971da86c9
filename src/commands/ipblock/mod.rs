mod create;
mod delete;
mod get;
mod list;
pub mod types;
mod update;
pub mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    #[clap(name = "list", alias = "ls")]
    List(list::Options),
    Get(get::Options),
    #[clap(name = "create", alias = "new")]
    Create(create::Options),
    Update(update::Options),
    #[clap(name = "delete", alias = "rm")]
    Delete(delete::Options),
}

#[derive(Debug, Parser)]
#[clap(about = "Manage reserved IP blocks")]
#[group(skip)]
pub struct Options {
    #[clap(subcommand)]
    pub commands: Commands,
}

pub async fn handle(options: Options, state: State) -> Result<()> {
    match options.commands {
        Commands::List(options) => list::handle(options, state).await,
        Commands::Get(options) => get::handle(options, state).await,
        Commands::Create(options) => create::handle(options, state).await,
        Commands::Update(options) => update::handle(options, state).await,
        Commands::Delete(options) => delete::handle(options, state).await,
    }
}
