//! Line-oriented text building for generated modules.
//!
//! AST nodes describe themselves as [`CodeFragment`]s through [`Renderable`];
//! a [`CodeBuilder`] lays the fragments out with one [`Indent`] unit per
//! nesting level.

mod code_builder;
mod indent;
mod renderable;

pub use code_builder::CodeBuilder;
pub use indent::Indent;
pub use renderable::{CodeFragment, Renderable};
