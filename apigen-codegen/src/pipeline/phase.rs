//! Pipeline phase trait.

use eyre::Result;

use super::CompilationContext;

/// One step between the parsed manifest and the generator.
///
/// The pipeline always runs `validate` then `lower`; extra phases run after
/// lowering and see the client IR in the context.
pub trait Phase: Send + Sync {
    /// Name used in diagnostics, plugin hooks and snapshot file names.
    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    /// Run the phase.
    ///
    /// Return an error only to stop the run; problems the user can fix are
    /// reported as diagnostics.
    fn run(&self, ctx: &mut CompilationContext) -> Result<()>;
}

/// Name and description of a phase, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseInfo {
    pub name: &'static str,
    pub description: &'static str,
}

impl PhaseInfo {
    pub fn of(phase: &dyn Phase) -> Self {
        Self {
            name: phase.name(),
            description: phase.description(),
        }
    }
}
