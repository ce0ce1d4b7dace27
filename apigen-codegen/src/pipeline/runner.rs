//! Pipeline orchestrator.

use apigen_manifest::Manifest;
use eyre::Result;

use super::{
    CompilationContext, Phase, PhaseInfo, Plugin,
    phases::{LintInfo, LowerPhase, ValidatePhase},
};

/// The compilation pipeline orchestrator.
///
/// The pipeline runs the built-in phases (validate, lower) followed by any
/// user phases, calling plugin hooks before and after each phase.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new()
///     .plugin(TracingPlugin)
///     .phase(MyCustomPhase);
///
/// let ctx = pipeline.run(manifest)?;
/// ```
pub struct Pipeline {
    validate: ValidatePhase,
    phases: Vec<Box<dyn Phase>>,
    plugins: Vec<Box<dyn Plugin>>,
}

impl Pipeline {
    /// Create a new pipeline with the default lints.
    pub fn new() -> Self {
        Self {
            validate: ValidatePhase::new(),
            phases: Vec::new(),
            plugins: Vec::new(),
        }
    }

    /// Replace the validate phase (e.g. to add or drop lints).
    pub fn validator(mut self, validate: ValidatePhase) -> Self {
        self.validate = validate;
        self
    }

    /// Add a phase to run after the built-in phases.
    pub fn phase(mut self, phase: impl Phase + 'static) -> Self {
        self.phases.push(Box::new(phase));
        self
    }

    /// Add a plugin to receive phase lifecycle hooks.
    pub fn plugin(mut self, plugin: impl Plugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Phases in run order.
    pub fn phase_info(&self) -> Vec<PhaseInfo> {
        let mut info = vec![PhaseInfo::of(&self.validate), PhaseInfo::of(&LowerPhase)];
        info.extend(self.phases.iter().map(|p| PhaseInfo::of(p.as_ref())));
        info
    }

    /// Lints run by the validate phase.
    pub fn lint_info(&self) -> Vec<LintInfo> {
        self.validate.lint_info()
    }

    /// Run the pipeline on a manifest.
    ///
    /// Executes all phases in order:
    /// 1. ValidatePhase - runs lints, fails on error diagnostics
    /// 2. LowerPhase - builds the client IR
    /// 3. User phases (if any)
    ///
    /// # Errors
    ///
    /// Returns an error if any phase fails fatally.
    pub fn run(&self, manifest: Manifest) -> Result<CompilationContext> {
        let mut ctx = CompilationContext::new(manifest);
        self.run_with(&mut ctx)?;
        Ok(ctx)
    }

    /// Run the pipeline on an existing context.
    ///
    /// Unlike [`run`](Self::run), the context survives a failed phase, so
    /// callers can still report the diagnostics collected so far.
    pub fn run_with(&self, ctx: &mut CompilationContext) -> Result<()> {
        self.run_phase(&self.validate, ctx)?;
        self.run_phase(&LowerPhase, ctx)?;

        for phase in &self.phases {
            self.run_phase(phase.as_ref(), ctx)?;
        }

        Ok(())
    }

    /// Run a single phase with plugin hooks.
    fn run_phase(&self, phase: &dyn Phase, ctx: &mut CompilationContext) -> Result<()> {
        let phase_name = phase.name();

        for plugin in &self.plugins {
            plugin.on_before_phase(phase_name, ctx)?;
        }

        phase.run(ctx)?;

        for plugin in &self.plugins {
            plugin.on_after_phase(phase_name, ctx)?;
        }

        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::pipeline::Diagnostic;

    struct CountingPlugin {
        before_count: Arc<AtomicUsize>,
        after_count: Arc<AtomicUsize>,
    }

    impl CountingPlugin {
        fn new() -> (Self, Arc<AtomicUsize>, Arc<AtomicUsize>) {
            let before = Arc::new(AtomicUsize::new(0));
            let after = Arc::new(AtomicUsize::new(0));
            (
                Self {
                    before_count: before.clone(),
                    after_count: after.clone(),
                },
                before,
                after,
            )
        }
    }

    impl Plugin for CountingPlugin {
        fn name(&self) -> &'static str {
            "counting"
        }

        fn on_before_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.before_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn on_after_phase(&self, _phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
            self.after_count.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    struct NotePhase;

    impl Phase for NotePhase {
        fn name(&self) -> &'static str {
            "note"
        }

        fn description(&self) -> &'static str {
            "Adds an info diagnostic"
        }

        fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
            ctx.add_diagnostic(Diagnostic::info("note", "ran after lowering"));
            Ok(())
        }
    }

    fn make_test_manifest() -> Manifest {
        r#"
        [[routes]]
        group = "com.acme.UserController"
        name = "getUser"
        method = "GET"
        path = "/user"
        "#
        .parse()
        .expect("Failed to parse test manifest")
    }

    #[test]
    fn test_pipeline_runs_phases() {
        let ctx = Pipeline::new()
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        let ir = ctx.ir.expect("IR should be populated");
        assert_eq!(ir.route_count(), 1);
    }

    #[test]
    fn test_phase_and_lint_info() {
        let pipeline = Pipeline::new()
            .validator(ValidatePhase::empty())
            .phase(NotePhase);

        let names: Vec<_> = pipeline.phase_info().iter().map(|p| p.name).collect();
        assert_eq!(names, vec!["validate", "lower", "note"]);
        assert_eq!(pipeline.phase_info()[2].description, "Adds an info diagnostic");
        assert!(pipeline.lint_info().is_empty());
        assert_eq!(Pipeline::new().lint_info().len(), 5);
    }

    #[test]
    fn test_pipeline_plugin_hooks() {
        let (plugin, before_count, after_count) = CountingPlugin::new();

        let pipeline = Pipeline::new().plugin(plugin).phase(NotePhase);
        let ctx = pipeline
            .run(make_test_manifest())
            .expect("pipeline should succeed");

        // 2 built-in phases + 1 user phase
        assert_eq!(before_count.load(Ordering::SeqCst), 3);
        assert_eq!(after_count.load(Ordering::SeqCst), 3);
        assert_eq!(ctx.diagnostics.len(), 1);
    }

    #[test]
    fn test_run_with_keeps_diagnostics_on_failure() {
        let manifest: Manifest = r#"
        [[routes]]
        group = "com.acme.A"
        name = "a"
        method = "GET"
        returns = "com.acme.one.User"

        [[routes]]
        group = "com.acme.A"
        name = "b"
        method = "GET"
        returns = "com.acme.two.User"
        "#
        .parse()
        .unwrap();

        let mut ctx = CompilationContext::new(manifest);
        let result = Pipeline::new().run_with(&mut ctx);

        assert!(result.is_err());
        assert!(ctx.has_errors());
        assert!(ctx.ir.is_none());
    }
}
