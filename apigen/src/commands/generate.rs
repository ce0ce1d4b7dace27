use std::path::PathBuf;

use apigen_manifest::ApigenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to apigen.toml (defaults to ./apigen.toml)
    #[arg(short, long, default_value = "apigen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [generator].output)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Write a JSON snapshot of the pipeline state after each phase
    #[arg(long, value_name = "DIR")]
    pub snapshot: Option<PathBuf>,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let file = ApigenToml::open(&self.config).unwrap_or_exit();

        // Manifest outputs are relative to the manifest; a CLI override is taken as given.
        let output_dir = match &self.output {
            Some(dir) => dir.clone(),
            None => file.root().join(&file.manifest().generator.output),
        };
        tracing::debug!(
            config = %file.path().display(),
            output = %output_dir.display(),
            "generating client"
        );

        let report = ops::generate(
            file.manifest(),
            GenerateOptions {
                output_dir: &output_dir,
                dry_run: self.dry_run,
                snapshot_dir: self.snapshot.as_deref(),
            },
        )?;

        report.render(&mut TerminalOutput::new());

        if !report.is_success() {
            std::process::exit(1);
        }
        Ok(())
    }
}
