//! Accumulates fragments into indented text.

use super::{CodeFragment, Indent, Renderable};

/// Writes lines at a tracked nesting depth.
///
/// ```
/// use apigen_codegen::builder::{CodeBuilder, CodeFragment};
///
/// let mut builder = CodeBuilder::typescript();
/// builder.apply_fragment(CodeFragment::block(
///     "export class Api {",
///     vec![CodeFragment::line("constructor(private requester: Requester) {}")],
///     "}",
/// ));
///
/// assert_eq!(
///     builder.build(),
///     "export class Api {\n  constructor(private requester: Requester) {}\n}\n"
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct CodeBuilder {
    indent: Indent,
    depth: usize,
    out: String,
}

impl CodeBuilder {
    pub fn new(indent: Indent) -> Self {
        Self {
            indent,
            depth: 0,
            out: String::new(),
        }
    }

    pub fn typescript() -> Self {
        Self::new(Indent::TYPESCRIPT)
    }

    /// Write `s` at the current depth, followed by a newline.
    pub fn push_line(&mut self, s: &str) -> &mut Self {
        for _ in 0..self.depth {
            self.out.push_str(self.indent.unit());
        }
        self.out.push_str(s);
        self.out.push('\n');
        self
    }

    pub fn push_blank(&mut self) -> &mut Self {
        self.out.push('\n');
        self
    }

    /// Write every fragment of `node`.
    pub fn emit(&mut self, node: &impl Renderable) -> &mut Self {
        for fragment in node.to_fragments() {
            self.apply_fragment(fragment);
        }
        self
    }

    pub fn apply_fragment(&mut self, fragment: CodeFragment) {
        match fragment {
            CodeFragment::Line(line) => {
                self.push_line(&line);
            }
            CodeFragment::Blank => {
                self.push_blank();
            }
            CodeFragment::Block { open, body, close } => {
                self.push_line(&open);
                self.depth += 1;
                for inner in body {
                    self.apply_fragment(inner);
                }
                self.depth -= 1;
                self.push_line(&close);
            }
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn build(self) -> String {
        self.out
    }
}
