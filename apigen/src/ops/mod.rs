//! Core operations.
//!
//! This module contains the business logic for apigen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod explain;
pub mod generate;

pub use check::check;
pub use explain::explain;
pub use generate::{GenerateOptions, generate};

use apigen_codegen::pipeline::{CompilationContext, Pipeline};
use eyre::Result;

use crate::reports::DiagnosticLines;

/// Run `pipeline` and keep the context even when a phase fails.
///
/// Returns the phase error only if no error diagnostic explains it.
fn run_pipeline(
    pipeline: &Pipeline,
    ctx: &mut CompilationContext,
) -> Result<DiagnosticLines> {
    let outcome = pipeline.run_with(ctx);
    let lines = DiagnosticLines::from_diagnostics(&ctx.diagnostics);

    match outcome {
        Err(err) if !ctx.has_errors() => Err(err),
        _ => Ok(lines),
    }
}
