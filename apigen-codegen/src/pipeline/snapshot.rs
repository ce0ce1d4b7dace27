//! Pipeline snapshot plugin for debugging.
//!
//! Captures the pipeline state after each phase so the lowered client IR
//! and the diagnostics can be inspected as JSON.

use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Mutex, PoisonError},
};

use apigen_ir::ClientIR;
use eyre::{Result, WrapErr};
use serde::Serialize;

use super::{CompilationContext, Diagnostic, Plugin};

/// A snapshot of the pipeline state at a specific phase.
#[derive(Debug, Clone, Serialize)]
pub struct PhaseSnapshot {
    /// The phase that just completed.
    pub phase: String,

    /// The client IR (available after the "lower" phase).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ir: Option<ClientIR>,

    /// Diagnostics collected so far.
    pub diagnostics: Vec<Diagnostic>,
}

/// A plugin that captures pipeline state after each phase.
///
/// When an output directory is configured, each snapshot is written to
/// `<dir>/<phase>.json` as soon as the phase completes.
///
/// # Example
///
/// ```ignore
/// let pipeline = Pipeline::new().plugin(SnapshotPlugin::with_output_dir(".apigen/debug"));
/// let ctx = pipeline.run(manifest)?;
/// ```
#[derive(Debug, Default)]
pub struct SnapshotPlugin {
    snapshots: Mutex<Vec<PhaseSnapshot>>,
    output_dir: Option<PathBuf>,
}

impl SnapshotPlugin {
    /// Create a snapshot plugin that only keeps snapshots in memory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a snapshot plugin that also writes to a directory.
    pub fn with_output_dir(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            snapshots: Mutex::new(Vec::new()),
            output_dir: Some(output_dir.into()),
        }
    }

    /// Get all collected snapshots.
    pub fn snapshots(&self) -> Vec<PhaseSnapshot> {
        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn write_snapshot(dir: &Path, snapshot: &PhaseSnapshot) -> Result<()> {
        fs::create_dir_all(dir)?;
        let path = dir.join(format!("{}.json", snapshot.phase));
        let json = serde_json::to_string_pretty(snapshot)?;
        fs::write(&path, json)
            .wrap_err_with(|| format!("failed to write snapshot '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote pipeline snapshot");
        Ok(())
    }
}

impl Plugin for SnapshotPlugin {
    fn name(&self) -> &'static str {
        "snapshot"
    }

    fn on_after_phase(&self, phase: &str, ctx: &mut CompilationContext) -> Result<()> {
        let snapshot = PhaseSnapshot {
            phase: phase.to_string(),
            ir: ctx.ir.clone(),
            diagnostics: ctx.diagnostics.clone(),
        };

        if let Some(dir) = &self.output_dir {
            Self::write_snapshot(dir, &snapshot)?;
        }

        self.snapshots
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(snapshot);
        Ok(())
    }
}
