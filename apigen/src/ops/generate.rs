//! Generate operation - client generation from a manifest.

use std::path::Path;

use apigen_codegen::pipeline::{CompilationContext, Pipeline, SnapshotPlugin, TracingPlugin};
use apigen_codegen_typescript::{Generator, LanguageCodegen};
use apigen_manifest::Manifest;
use eyre::Result;

use crate::reports::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};

/// Options for the generate operation.
pub struct GenerateOptions<'a> {
    /// Directory the client and model modules are written to.
    pub output_dir: &'a Path,
    /// Whether to preview without writing files.
    pub dry_run: bool,
    /// Where to write per-phase pipeline snapshots, if anywhere.
    pub snapshot_dir: Option<&'a Path>,
}

/// Execute the generate operation.
///
/// Runs the pipeline on the manifest, then renders both modules. Error
/// diagnostics stop the run before anything is written; write failures are
/// collected in the report.
pub fn generate(manifest: &Manifest, opts: GenerateOptions) -> Result<GenerateReport> {
    let mut pipeline = Pipeline::new().plugin(TracingPlugin);
    if let Some(dir) = opts.snapshot_dir {
        pipeline = pipeline.plugin(SnapshotPlugin::with_output_dir(dir));
    }

    let mut ctx = CompilationContext::new(manifest.clone());
    let diagnostics = super::run_pipeline(&pipeline, &mut ctx)?;

    if ctx.has_errors() {
        return Ok(GenerateReport {
            diagnostics,
            snapshot_dir: opts.snapshot_dir.map(Path::to_path_buf),
            result: GenerationResult::Aborted,
        });
    }

    let generator = Generator::from_context(ctx)?;
    let result = if opts.dry_run {
        let files = generator
            .preview()
            .into_iter()
            .map(|f| PreviewFile {
                path: f.path,
                content: f.content,
            })
            .collect();
        GenerationResult::Preview(files)
    } else {
        let report = generator.generate(opts.output_dir);
        GenerationResult::Written(WrittenResult {
            output_dir: opts.output_dir.to_path_buf(),
            written: report.written().map(Path::to_path_buf).collect(),
            failures: report
                .failures()
                .map(|(path, error)| (path.to_path_buf(), error.to_string()))
                .collect(),
        })
    };

    Ok(GenerateReport {
        diagnostics,
        snapshot_dir: opts.snapshot_dir.map(Path::to_path_buf),
        result,
    })
}
