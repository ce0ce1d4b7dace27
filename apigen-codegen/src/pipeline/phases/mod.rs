//! Built-in pipeline phases.
//!
//! - [`ValidatePhase`] - runs lints over the manifest and collects diagnostics
//! - [`LowerPhase`] - transforms the manifest into the client IR

mod lower;
mod validate;

pub use lower::LowerPhase;
pub use validate::{
    DuplicateRouteLint, Lint, LintInfo, MultipleBodyLint, NameCollisionLint, PathPlaceholderLint,
    UnsupportedMethodLint, ValidatePhase,
};
