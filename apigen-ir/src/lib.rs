//! Intermediate representation types for the apigen client generator.
//!
//! This crate provides the value objects shared by the generation pipeline:
//! type references, route and parameter descriptors, and the grouped client
//! IR the TypeScript engine consumes.
//!
//! # Architecture
//!
//! ```text
//! apigen.toml (TOML) → apigen-manifest (parsing) → apigen-ir (descriptors) → codegen
//! ```
//!
//! The IR types are:
//! - Language-agnostic (no TypeScript-specific concerns)
//! - Discovery-agnostic (any route source can produce them)
//! - Plain values (structural equality, no hidden state)

mod client;
mod envelope;
mod route;
mod types;

pub use client::{ClientIR, GroupIR};
pub use envelope::Envelopes;
pub use route::{HttpMethod, Parameter, Requiredness, Route, SourceKind, url_placeholders};
pub use types::{NamedType, ParseTypeError, TypeRef};
