//! Explain command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// A name with a one-line description or value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedItem {
    pub name: String,
    pub description: String,
}

impl NamedItem {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Report data describing a generation run without performing it.
#[derive(Debug)]
pub struct ExplainReport {
    pub config_path: PathBuf,
    /// Pipeline phases in run order.
    pub phases: Vec<NamedItem>,
    pub lints: Vec<NamedItem>,
    /// Effective `[generator]` settings.
    pub settings: Vec<NamedItem>,
    /// Type table entries added by `[types]`.
    pub type_mappings: Vec<NamedItem>,
}

impl Report for ExplainReport {
    fn render(&self, out: &mut dyn Output) {
        out.key_value("Manifest", &self.config_path.display().to_string());
        out.newline();

        out.section("Phases");
        for (i, phase) in self.phases.iter().enumerate() {
            out.list_item(&format!("{}. {} - {}", i + 1, phase.name, phase.description));
        }
        out.newline();

        out.section("Lints");
        for lint in &self.lints {
            out.list_item(&format!("{}: {}", lint.name, lint.description));
        }
        out.newline();

        out.section("Generator");
        for setting in &self.settings {
            out.list_item(&format!("{}: {}", setting.name, setting.description));
        }

        if !self.type_mappings.is_empty() {
            out.newline();
            out.section("Type mappings");
            for mapping in &self.type_mappings {
                out.list_item(&format!("{} -> {}", mapping.name, mapping.description));
            }
        }
    }
}
