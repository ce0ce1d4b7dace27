//! TypeScript client generator for apigen.
//!
//! This crate turns the client IR into two TypeScript modules:
//!
//! - the client module (`requester.ts` by default): an abstract `Requester`
//!   contract, an `ApiRequester` aggregator with one member per route group,
//!   and one class per group with one method per route;
//! - the model module (`api.model.ts` by default): one interface per model
//!   type referenced by the client.
//!
//! # Usage
//!
//! ```ignore
//! use apigen_codegen::{language::LanguageCodegen, pipeline::Pipeline};
//! use apigen_codegen_typescript::Generator;
//! use apigen_manifest::Manifest;
//! use std::path::Path;
//!
//! let manifest = Manifest::from_file("apigen.toml")?;
//! let ctx = Pipeline::new().run(manifest)?;
//! let generator = Generator::from_context(ctx)?;
//!
//! // Preview files without writing
//! let files = generator.preview();
//!
//! // Write both modules; failures are collected in the report
//! let report = generator.generate(Path::new("src/api"));
//! ```
//!
//! Every rendering rule is a function pointer in [`Strategies`] and can be
//! replaced with [`Generator::with_strategies`]. The model module is produced
//! by a [`ModelEmitter`], [`InterfaceEmitter`] by default.

mod code_file;
mod collector;
mod generator;
mod model;
mod parameters;
mod resolver;
mod synthesizer;

pub mod ast;
pub mod files;
pub mod strategies;

pub use apigen_codegen::{
    TypeTable,
    language::{LanguageCodegen, PreviewFile},
};
pub use code_file::CodeFile;
pub use collector::ReferencedTypes;
pub use generator::{GeneratedClient, Generator};
pub use model::{InterfaceEmitter, ModelContext, ModelEmitter};
pub use parameters::{
    SignatureParam, order_parameters, render_parameter_list, with_effective_requiredness,
};
pub use resolver::{TypeRegistry, TypeResolver};
pub use strategies::Strategies;
pub use synthesizer::{ClientOptions, ClientSynthesizer};
