//! Core utilities and types for the apigen client generator.
//!
//! This crate provides the file-writing primitives and string helpers
//! shared by the rest of the apigen workspace.

mod file;
mod utils;

// File operations
pub use file::{GENERATED_HEADER, GeneratedFile, WriteOutcome, WriteReport};
// String utilities
pub use utils::{lower_first, simple_name, strip_suffix_once};
