//! TypeScript AST builders for the client and model modules.
//!
//! Each node implements [`Renderable`](apigen_codegen::builder::Renderable)
//! and is rendered through a `CodeBuilder`.

mod class;
mod imports;
mod interface;
mod method;

pub use class::Class;
pub use imports::Import;
pub use interface::{Interface, InterfaceField};
pub use method::{Constructor, Method};
