use std::io;

use clap::{Args, CommandFactory};
use clap_complete::Shell;
use eyre::Result;

use super::Cli;

#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    shell: Shell,
}

impl CompletionsCommand {
    pub fn run(&self) -> Result<()> {
        let mut cli = Cli::command();
        let bin = cli.get_name().to_string();
        clap_complete::generate(self.shell, &mut cli, bin, &mut io::stdout());
        Ok(())
    }
}
