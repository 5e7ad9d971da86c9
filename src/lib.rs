pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod state;
pub mod store;
pub mod types;
pub mod utils;

use std::path::PathBuf;

use clap::Parser;
use commands::Commands;
use output::{OutputFormat, Printer};
use state::StateOptions;

#[derive(Debug, Parser)]
#[clap(
    name = "ionosctl",
    about = "Manage IONOS Cloud infrastructure from the command line",
    version,
    author
)]
pub struct CLI {
    #[clap(subcommand)]
    pub commands: Commands,

    #[clap(
        short = 'o',
        long = "output",
        help = "Desired output format",
        value_enum,
        default_value_t = OutputFormat::Text,
        global = true
    )]
    pub output: OutputFormat,

    #[clap(
        long = "cols",
        help = "Set of columns to be printed on output, comma separated",
        value_delimiter = ',',
        global = true
    )]
    pub cols: Vec<String>,

    #[clap(long = "no-headers", help = "Don't print table headers", global = true)]
    pub no_headers: bool,

    #[clap(short = 'q', long = "quiet", help = "Don't print command output", global = true)]
    pub quiet: bool,

    #[clap(
        short = 'v',
        long = "verbose",
        help = "Print more information",
        global = true
    )]
    pub verbose: bool,

    #[clap(
        short = 'u',
        long = "api-url",
        help = "Override the Cloud API URL",
        global = true
    )]
    pub api_url: Option<String>,

    #[clap(
        short = 'c',
        long = "config",
        help = "Path to the configuration file",
        global = true
    )]
    pub config: Option<PathBuf>,
}

impl CLI {
    pub fn state_options(&self) -> StateOptions {
        StateOptions {
            config_path: self.config.clone(),
            override_api_url: self.api_url.clone(),
            printer: Printer {
                format: self.output,
                cols: self.cols.clone(),
                no_headers: self.no_headers,
                quiet: self.quiet,
            },
        }
    }
}
