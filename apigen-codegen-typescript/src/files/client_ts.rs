//! The client module (`requester.ts`).

use std::path::{Path, PathBuf};

use apigen_core::GeneratedFile;

use crate::code_file::CodeFile;

/// The client module: requester contract, aggregator and group classes.
pub struct ClientTs {
    file_name: String,
    code: CodeFile,
}

impl ClientTs {
    pub fn new(file_name: impl Into<String>, code: CodeFile) -> Self {
        Self {
            file_name: file_name.into(),
            code,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }
}

impl GeneratedFile for ClientTs {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(&self.file_name)
    }

    fn render(&self) -> String {
        self.code.render()
    }
}
