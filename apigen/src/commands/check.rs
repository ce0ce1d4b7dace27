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
pub struct CheckCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let file = ApigenToml::open(&self.config).unwrap_or_exit();
        let report = ops::check(file.manifest(), file.path());

        report.render(&mut TerminalOutput::new());

        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
