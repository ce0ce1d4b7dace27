use std::path::PathBuf;

use apigen_manifest::ApigenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ExplainCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,
}

impl ExplainCommand {
    pub fn run(&self) -> Result<()> {
        let file = ApigenToml::open(&self.config).unwrap_or_exit();
        ops::explain(file.manifest(), file.path()).render(&mut TerminalOutput::new());
        Ok(())
    }
}
