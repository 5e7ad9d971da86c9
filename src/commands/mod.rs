pub mod completions;
pub mod contract;
pub mod datacenter;
pub mod group;
pub mod ids;
pub mod image;
pub mod ipblock;
pub mod label;
pub mod login;
pub mod logout;
pub mod pcc;
pub mod request;
pub mod resource;
pub mod server;
pub mod share;
pub mod snapshot;
pub mod token;
pub mod volume;

use anyhow::Result;
use clap::Subcommand;

use crate::state::State;

#[derive(Debug, Subcommand)]
pub enum Commands {
    Login(login::Options),
    Logout(logout::Options),
    #[clap(name = "datacenter", alias = "dc")]
    Datacenter(datacenter::Options),
    #[clap(name = "server", alias = "svr")]
    Server(server::Options),
    #[clap(name = "volume", alias = "vol")]
    Volume(volume::Options),
    #[clap(name = "snapshot", alias = "snap")]
    Snapshot(snapshot::Options),
    #[clap(name = "image", alias = "img")]
    Image(image::Options),
    #[clap(name = "ipblock", alias = "ip")]
    Ipblock(ipblock::Options),
    #[clap(name = "group", alias = "g")]
    Group(group::Options),
    Share(share::Options),
    #[clap(name = "resource", alias = "res")]
    Resource(resource::Options),
    Contract(contract::Options),
    #[clap(name = "pcc", alias = "cc")]
    Pcc(pcc::Options),
    Label(label::Options),
    Token(token::Options),
    #[clap(name = "request", alias = "req")]
    Request(request::Options),
    Completions(completions::Options),
    #[clap(hide = true)]
    Ids(ids::Options),
}

pub async fn handle_command(command: Commands, state: State) -> Result<()> {
    match command {
        Commands::Login(options) => login::handle(options, state).await,
        Commands::Logout(options) => logout::handle(options, state).await,
        Commands::Datacenter(options) => datacenter::handle(options, state).await,
        Commands::Server(options) => server::handle(options, state).await,
        Commands::Volume(options) => volume::handle(options, state).await,
        Commands::Snapshot(options) => snapshot::handle(options, state).await,
        Commands::Image(options) => image::handle(options, state).await,
        Commands::Ipblock(options) => ipblock::handle(options, state).await,
        Commands::Group(options) => group::handle(options, state).await,
        Commands::Share(options) => share::handle(options, state).await,
        Commands::Resource(options) => resource::handle(options, state).await,
        Commands::Contract(options) => contract::handle(options, state).await,
        Commands::Pcc(options) => pcc::handle(options, state).await,
        Commands::Label(options) => label::handle(options, state).await,
        Commands::Token(options) => token::handle(options, state).await,
        Commands::Request(options) => request::handle(options, state).await,
        Commands::Completions(options) => completions::handle(options),
        Commands::Ids(options) => ids::handle(options, state).await,
    }
}
