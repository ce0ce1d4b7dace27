//! Language-agnostic code generation traits.

use std::path::Path;

use apigen_core::WriteReport;

/// Trait for language-specific client generators.
///
/// Implement this trait to emit the client for a new target language.
pub trait LanguageCodegen {
    /// Language identifier (e.g., "typescript")
    fn language(&self) -> &'static str;

    /// File extension for generated source files (e.g., "ts")
    fn file_extension(&self) -> &'static str;

    /// Preview generated files without writing to disk
    fn preview(&self) -> Vec<PreviewFile>;

    /// Write all files into the specified output directory.
    ///
    /// Writes are best-effort: a failed file is recorded in the report and
    /// the remaining files are still attempted.
    fn generate(&self, output_dir: &Path) -> WriteReport;
}

/// A generated file for preview
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}
