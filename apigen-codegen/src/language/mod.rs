//! Language-specific abstractions.
//!
//! - [`LanguageCodegen`] - Main trait for language code generators
//! - [`PreviewFile`] - Generated file preview

mod traits;

pub use traits::{LanguageCodegen, PreviewFile};
