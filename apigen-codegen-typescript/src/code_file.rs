//! CodeFile abstraction for structured TypeScript module generation.

use apigen_codegen::builder::{CodeBuilder, CodeFragment, Indent, Renderable};

use crate::ast::Import;

/// A structured representation of a TypeScript module.
///
/// Imports come first, followed by the body elements separated by blank
/// lines.
///
/// # Example
///
/// ```ignore
/// let code = CodeFile::new()
///     .import(Import::namespace("TYPE", "./api.model"))
///     .add(requester_class)
///     .add_all(group_classes)
///     .render();
/// ```
#[derive(Default)]
pub struct CodeFile {
    imports: Vec<Import>,
    body: Vec<Vec<CodeFragment>>,
}

impl CodeFile {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn import(mut self, import: Import) -> Self {
        self.imports.push(import);
        self
    }

    /// Add a body element (any Renderable).
    #[allow(clippy::should_implement_trait)]
    pub fn add<R: Renderable>(mut self, node: R) -> Self {
        self.body.push(node.to_fragments());
        self
    }

    pub fn add_all<R: Renderable>(mut self, nodes: impl IntoIterator<Item = R>) -> Self {
        for node in nodes {
            self.body.push(node.to_fragments());
        }
        self
    }

    /// Render with TypeScript indentation (2 spaces).
    pub fn render(&self) -> String {
        self.render_with_indent(Indent::TYPESCRIPT)
    }

    pub fn render_with_indent(&self, indent: Indent) -> String {
        let mut builder = CodeBuilder::new(indent);

        for import in &self.imports {
            builder.emit(import);
        }

        if !self.imports.is_empty() && !self.body.is_empty() {
            builder.push_blank();
        }

        for (i, fragments) in self.body.iter().enumerate() {
            if i > 0 {
                builder.push_blank();
            }
            for fragment in fragments {
                builder.apply_fragment(fragment.clone());
            }
        }

        builder.build()
    }

    /// Number of body elements.
    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.body.is_empty()
    }
}
