//! Generate command report data structures.

use std::path::PathBuf;

use super::{
    diagnostics::DiagnosticLines,
    output::{Output, Report},
};

/// Report data from code generation.
#[derive(Debug)]
pub struct GenerateReport {
    /// Diagnostics collected by the pipeline.
    pub diagnostics: DiagnosticLines,
    /// Path to pipeline snapshots, if requested.
    pub snapshot_dir: Option<PathBuf>,
    pub result: GenerationResult,
}

/// Result of code generation.
#[derive(Debug)]
pub enum GenerationResult {
    /// Files were written to disk, possibly with failures.
    Written(WrittenResult),
    /// Dry-run preview.
    Preview(Vec<PreviewFile>),
    /// Validation reported errors; nothing was generated.
    Aborted,
}

/// Result when files were written to disk.
#[derive(Debug)]
pub struct WrittenResult {
    pub output_dir: PathBuf,
    pub written: Vec<PathBuf>,
    /// Files that could not be written, with the error text.
    pub failures: Vec<(PathBuf, String)>,
}

/// A file in preview mode.
#[derive(Debug)]
pub struct PreviewFile {
    pub path: String,
    pub content: String,
}

impl GenerateReport {
    /// True when generation ran and every file was written.
    pub fn is_success(&self) -> bool {
        match &self.result {
            GenerationResult::Written(written) => written.failures.is_empty(),
            GenerationResult::Preview(_) => true,
            GenerationResult::Aborted => false,
        }
    }
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if let Some(dir) = &self.snapshot_dir {
            out.key_value("Pipeline snapshots written to", &dir.display().to_string());
            out.newline();
        }

        self.diagnostics.render(out);

        match &self.result {
            GenerationResult::Written(written) => self.render_written(out, written),
            GenerationResult::Preview(files) => self.render_preview(out, files),
            GenerationResult::Aborted => {
                out.error("generation aborted, fix the errors above and re-run");
            }
        }
    }
}

impl GenerateReport {
    fn render_written(&self, out: &mut dyn Output, written: &WrittenResult) {
        out.key_value("Generated", &written.output_dir.display().to_string());
        for path in &written.written {
            out.added_item(&path.display().to_string());
        }

        if !written.failures.is_empty() {
            out.newline();
            out.section("Failed to write");
            for (path, error) in &written.failures {
                out.removed_item(&format!("{}: {}", path.display(), error));
            }
        }
    }

    fn render_preview(&self, out: &mut dyn Output, files: &[PreviewFile]) {
        for file in files {
            out.divider(&file.path);
            out.preformatted(&file.content);
        }

        out.divider("Summary");
        out.preformatted(&format!("{} files would be generated", files.len()));
    }
}
