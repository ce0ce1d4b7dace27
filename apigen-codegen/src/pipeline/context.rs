//! Compilation context passed through pipeline phases.

use apigen_ir::ClientIR;
use apigen_manifest::Manifest;
use eyre::{Result, eyre};

use super::diagnostic::{Diagnostic, Severity};

/// Context passed through all pipeline phases.
///
/// This struct carries the state of one generation run through each phase,
/// accumulating results and diagnostics along the way.
#[derive(Debug)]
pub struct CompilationContext {
    /// The manifest being compiled.
    pub manifest: Manifest,
    /// The lowered client IR (populated by LowerPhase).
    pub ir: Option<ClientIR>,
    /// Diagnostics collected during compilation.
    pub diagnostics: Vec<Diagnostic>,
}

impl CompilationContext {
    /// Create a new compilation context from a manifest.
    pub fn new(manifest: Manifest) -> Self {
        Self {
            manifest,
            ir: None,
            diagnostics: Vec::new(),
        }
    }

    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_error())
    }

    pub fn has_warnings(&self) -> bool {
        self.diagnostics.iter().any(|d| d.severity.is_warning())
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    pub fn warning_count(&self) -> usize {
        self.warnings().count()
    }

    /// Add a diagnostic.
    pub fn add_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Get all error diagnostics.
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Error))
    }

    /// Get all warning diagnostics.
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d.severity, Severity::Warning))
    }

    /// Take the IR out of the context.
    ///
    /// # Errors
    ///
    /// Returns an error if the IR has not been set (i.e., LowerPhase hasn't run).
    pub fn take_ir(&mut self) -> Result<ClientIR> {
        self.ir
            .take()
            .ok_or_else(|| eyre!("client IR not set - did LowerPhase run?"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_creation() {
        let ctx = CompilationContext::new(Manifest::default());

        assert!(ctx.ir.is_none());
        assert!(ctx.diagnostics.is_empty());
    }

    #[test]
    fn test_context_diagnostics() {
        let mut ctx = CompilationContext::new(Manifest::default());

        ctx.add_diagnostic(Diagnostic::error("test", "test error"));
        ctx.add_diagnostic(Diagnostic::warning("test", "test warning"));
        ctx.add_diagnostic(Diagnostic::info("test", "just info"));

        assert!(ctx.has_errors());
        assert!(ctx.has_warnings());
        assert_eq!(ctx.error_count(), 1);
        assert_eq!(ctx.warning_count(), 1);
    }

    #[test]
    fn test_take_ir_before_lowering_fails() {
        let mut ctx = CompilationContext::new(Manifest::default());
        assert!(ctx.take_ir().is_err());

        ctx.ir = Some(ClientIR::default());
        assert!(ctx.take_ir().is_ok());
        assert!(ctx.ir.is_none());
    }
}
