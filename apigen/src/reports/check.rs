//! Check command report data structures.

use std::path::PathBuf;

use super::{
    diagnostics::DiagnosticLines,
    output::{Output, Report},
};

/// Report data from manifest validation.
#[derive(Debug)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    pub diagnostics: DiagnosticLines,
    /// Groups that would be generated, in output order.
    pub groups: Vec<GroupSummary>,
    /// Number of model interfaces the model module would declare.
    pub model_count: usize,
}

/// One group of the lowered client.
#[derive(Debug)]
pub struct GroupSummary {
    pub name: String,
    pub routes: Vec<String>,
}

impl CheckReport {
    /// Whether the check passed (no errors).
    pub fn is_valid(&self) -> bool {
        self.diagnostics.errors.is_empty()
    }

    fn route_count(&self) -> usize {
        self.groups.iter().map(|g| g.routes.len()).sum()
    }
}

fn plural(n: usize, word: &str) -> String {
    format!("{} {}{}", n, word, if n == 1 { "" } else { "s" })
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        self.diagnostics.render(out);

        if !self.is_valid() {
            return;
        }
        if !self.diagnostics.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();

        out.section(&format!(
            "{}, {}",
            plural(self.groups.len(), "group"),
            plural(self.route_count(), "route")
        ));
        for group in &self.groups {
            out.list_item(&format!("{} ({})", group.name, group.routes.join(", ")));
        }
        out.key_value("Models", &self.model_count.to_string());
    }
}
