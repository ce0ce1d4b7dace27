//! Shared code generation utilities for the apigen client generator.
//!
//! This crate provides the language-agnostic machinery the TypeScript
//! engine (`apigen-codegen-typescript`) is built on.
//!
//! # Module Organization
//!
//! - [`builder`] - Code generation building blocks (CodeBuilder, CodeFragment, etc.)
//! - [`language`] - Language-specific abstractions (LanguageCodegen, PreviewFile)
//! - [`pipeline`] - Compilation phases, lints, diagnostics and plugins
//! - [`TypeTable`] - Well-known type names and their target templates

pub mod builder;
pub mod language;
pub mod pipeline;
mod type_table;

pub use type_table::TypeTable;
