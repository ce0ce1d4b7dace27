//! Compilation pipeline for client generation.
//!
//! This module provides a [`Pipeline`] orchestrator that manages the
//! compilation phases from a parsed manifest to the client IR. The pipeline
//! provides:
//!
//! - Explicit phase boundaries (validate → lower)
//! - Plugin hooks for extensibility (before/after each phase)
//! - Unified diagnostics collection
//! - Shared state via [`CompilationContext`]
//!
//! # Example
//!
//! ```ignore
//! use apigen_codegen::pipeline::{Pipeline, TracingPlugin};
//!
//! let ctx = Pipeline::new().plugin(TracingPlugin).run(manifest)?;
//!
//! for diag in ctx.warnings() {
//!     eprintln!("{}", diag);
//! }
//!
//! let generator = Generator::from_context(ctx)?;
//! ```

mod context;
mod diagnostic;
mod phase;
pub mod phases;
mod plugin;
mod runner;
mod snapshot;

pub use context::CompilationContext;
pub use diagnostic::{Diagnostic, Severity};
pub use phase::{Phase, PhaseInfo};
pub use plugin::{Plugin, TracingPlugin};
pub use runner::Pipeline;
pub use snapshot::{PhaseSnapshot, SnapshotPlugin};
