// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

//! Parsing and validation of `apigen.toml` manifests.
//!
//! A manifest is the serialized form of the route descriptors a discovery
//! step produced, together with the generator settings that shape the
//! emitted client.

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    ApigenToml, FieldDecl, GeneratorConfig, GroupConfig, Manifest, ModelDecl, ParamEntry,
    ParseContext, RouteEntry,
};
