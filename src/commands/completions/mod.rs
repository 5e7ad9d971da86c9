use std::io;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use clap_complete::{generate, Shell as CompletionShell};

use crate::config::EXEC_NAME;
use crate::CLI;

#[derive(Debug, Parser)]
#[clap(
    about = "Generate completion scripts for the specified shell",
    long_about = "Generate completion scripts for the specified shell. IDs can be completed \
                  dynamically by calling the hidden `ids <kind>` command, which prints one \
                  `ID<TAB>NAME` line per resource"
)]
pub struct Options {
    #[clap(name = "shell", help = "The shell to print the completion script for")]
    shell: CompletionShell,
}

pub fn handle(options: Options) -> Result<()> {
    generate(
        options.shell,
        &mut CLI::command(),
        EXEC_NAME,
        &mut io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod test {
    use clap_complete::generate;

    use super::*;

    #[test]
    fn test_bash_script_mentions_nouns() {
        let mut out = vec![];

        generate(CompletionShell::Bash, &mut CLI::command(), EXEC_NAME, &mut out);

        let script = String::from_utf8(out).unwrap();

        assert!(script.contains("datacenter"));
        assert!(script.contains("--wait-for-request"));
    }
}
