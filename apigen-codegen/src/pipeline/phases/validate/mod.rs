//! Validate phase - runs lints on the manifest.

mod lint;
pub mod lints;

use eyre::{Result, bail};
pub use lint::{Lint, LintInfo};
pub use lints::{
    DuplicateRouteLint, MultipleBodyLint, NameCollisionLint, PathPlaceholderLint,
    UnsupportedMethodLint,
};

use crate::pipeline::{CompilationContext, Phase};

/// Phase that validates the manifest using configurable lints.
pub struct ValidatePhase {
    lints: Vec<Box<dyn Lint>>,
}

impl ValidatePhase {
    /// Create a new validate phase with default lints.
    pub fn new() -> Self {
        Self {
            lints: vec![
                Box::new(PathPlaceholderLint),
                Box::new(UnsupportedMethodLint),
                Box::new(NameCollisionLint),
                Box::new(DuplicateRouteLint),
                Box::new(MultipleBodyLint),
            ],
        }
    }

    /// Create a validate phase with no lints.
    pub fn empty() -> Self {
        Self { lints: Vec::new() }
    }

    /// Add a custom lint to the validation phase.
    pub fn with_lint(mut self, lint: impl Lint + 'static) -> Self {
        self.lints.push(Box::new(lint));
        self
    }

    /// Lints in run order.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.lints
            .iter()
            .map(|l| LintInfo {
                name: l.name(),
                description: l.description(),
            })
            .collect()
    }
}

impl Default for ValidatePhase {
    fn default() -> Self {
        Self::new()
    }
}

impl Phase for ValidatePhase {
    fn name(&self) -> &'static str {
        "validate"
    }

    fn description(&self) -> &'static str {
        "Check route descriptors and collect diagnostics"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        for lint in &self.lints {
            let before = ctx.diagnostics.len();
            lint.check(&ctx.manifest, &mut ctx.diagnostics);

            for diag in &mut ctx.diagnostics[before..] {
                if diag.code.is_none() {
                    diag.code = Some(lint.name().to_string());
                }
                if diag.severity.is_warning() {
                    tracing::warn!(lint = lint.name(), "{}", diag.message);
                }
            }
        }

        // Fail if there are any errors (warnings are allowed)
        if ctx.has_errors() {
            bail!("validation failed with {} error(s)", ctx.error_count());
        }

        Ok(())
    }
}
