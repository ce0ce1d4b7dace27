use std::path::{Path, PathBuf};

use eyre::{Result, WrapErr};

/// Banner placed at the top of every generated file.
pub const GENERATED_HEADER: &str = "// Code generated by apigen. DO NOT EDIT.";

/// Trait for types that represent a generated file
pub trait GeneratedFile {
    /// Get the file path relative to the base directory
    fn path(&self, base: &Path) -> PathBuf;

    /// Header line written above the rendered content
    fn header(&self) -> Option<&'static str> {
        Some(GENERATED_HEADER)
    }

    /// Render the file body
    fn render(&self) -> String;

    /// Full file content, header included
    fn contents(&self) -> String {
        match self.header() {
            Some(header) => format!("{}\n\n{}", header, self.render()),
            None => self.render(),
        }
    }

    /// Write the file to disk
    fn write(&self, base: &Path) -> Result<PathBuf> {
        let path = self.path(base);
        write_file(&path, &self.contents())
            .wrap_err_with(|| format!("failed to write '{}'", path.display()))?;
        Ok(path)
    }
}

fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(path, content)?;
    Ok(())
}

/// Result of a single write attempt
#[derive(Debug)]
pub enum WriteOutcome {
    /// File was written
    Written(PathBuf),
    /// Writing failed; the error is kept as text for reporting
    Failed { path: PathBuf, error: String },
}

/// Best-effort record of a batch of writes.
///
/// A failed write does not stop later writes and nothing already written is
/// rolled back.
#[derive(Debug, Default)]
pub struct WriteReport {
    outcomes: Vec<WriteOutcome>,
}

impl WriteReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Write `file` under `base`, logging and recording a failure instead of
    /// returning it.
    pub fn attempt(&mut self, file: &dyn GeneratedFile, base: &Path) {
        match file.write(base) {
            Ok(path) => {
                tracing::debug!(path = %path.display(), "wrote generated file");
                self.outcomes.push(WriteOutcome::Written(path));
            }
            Err(err) => {
                let path = file.path(base);
                tracing::error!(path = %path.display(), error = %format!("{:#}", err), "write failed");
                self.outcomes.push(WriteOutcome::Failed {
                    path,
                    error: format!("{:#}", err),
                });
            }
        }
    }

    /// All outcomes in attempt order
    pub fn outcomes(&self) -> &[WriteOutcome] {
        &self.outcomes
    }

    /// Paths that were written successfully
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.outcomes.iter().filter_map(|o| match o {
            WriteOutcome::Written(path) => Some(path.as_path()),
            WriteOutcome::Failed { .. } => None,
        })
    }

    /// Paths that failed along with their error text
    pub fn failures(&self) -> impl Iterator<Item = (&Path, &str)> {
        self.outcomes.iter().filter_map(|o| match o {
            WriteOutcome::Written(_) => None,
            WriteOutcome::Failed { path, error } => Some((path.as_path(), error.as_str())),
        })
    }

    /// True when every attempted write succeeded
    pub fn is_complete(&self) -> bool {
        self.failures().next().is_none()
    }
}
