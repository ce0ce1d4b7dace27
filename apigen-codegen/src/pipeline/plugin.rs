//! Pipeline plugin trait for extensibility.

use eyre::Result;

use super::CompilationContext;

/// A plugin that can hook into the compilation pipeline.
///
/// Plugins receive callbacks before and after each phase runs, allowing
/// them to inspect or modify the compilation context.
///
/// # Example
///
/// ```ignore
/// struct TimingPlugin {
///     start_times: Mutex<HashMap<String, Instant>>,
/// }
///
/// impl Plugin for TimingPlugin {
///     fn name(&self) -> &'static str { "timing" }
///
///     fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
///         self.start_times.lock().unwrap().insert(phase.to_string(), Instant::now());
///         Ok(())
///     }
/// }
/// ```
pub trait Plugin: Send + Sync {
    /// The name of this plugin (for debugging and logging).
    fn name(&self) -> &'static str;

    /// Called before a phase runs.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_before_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }

    /// Called after a phase completes successfully.
    ///
    /// # Errors
    ///
    /// Return an error to abort the pipeline.
    #[allow(unused_variables)]
    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        Ok(())
    }
}

/// Plugin that logs phase boundaries through `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingPlugin;

impl Plugin for TracingPlugin {
    fn name(&self) -> &'static str {
        "tracing"
    }

    fn on_before_phase(&self, phase: &str, _ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(phase, "phase started");
        Ok(())
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        tracing::debug!(
            phase,
            errors = ctx.error_count(),
            warnings = ctx.warning_count(),
            groups = ctx.ir.as_ref().map_or(0, |ir| ir.groups.len()),
            "phase finished"
        );
        Ok(())
    }
}
