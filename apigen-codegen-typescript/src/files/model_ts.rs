//! The model module (`api.model.ts`).

use std::path::{Path, PathBuf};

use apigen_core::GeneratedFile;

use crate::code_file::CodeFile;

/// The model module holding the data-shape declarations.
pub struct ModelTs {
    file_name: String,
    code: CodeFile,
}

impl ModelTs {
    pub fn new(file_name: impl Into<String>, code: CodeFile) -> Self {
        Self {
            file_name: file_name.into(),
            code,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Number of emitted model declarations.
    pub fn declaration_count(&self) -> usize {
        self.code.len()
    }

    /// True when no model declaration was emitted.
    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }
}

impl GeneratedFile for ModelTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        self.code.render()
    }
}
