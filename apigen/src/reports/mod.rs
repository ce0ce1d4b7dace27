//! Report data structures for commands.
//!
//! This module provides data structures that separate data collection from rendering.
//! Commands build reports, then render them to an Output target.

mod check;
mod diagnostics;
mod explain;
mod generate;
mod output;

pub use check::{CheckReport, GroupSummary};
pub use diagnostics::DiagnosticLines;
pub use explain::{ExplainReport, NamedItem};
pub use generate::{GenerateReport, GenerationResult, PreviewFile, WrittenResult};
pub use output::{Report, TerminalOutput};
