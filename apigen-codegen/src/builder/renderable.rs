//! Fragments of generated text and the trait producing them.

/// A piece of generated text, before indentation is applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeFragment {
    /// One line at the current depth.
    Line(String),
    /// An empty line, never indented.
    Blank,
    /// `open` at the current depth, `body` one level deeper, then `close`.
    Block {
        open: String,
        body: Vec<CodeFragment>,
        close: String,
    },
}

impl CodeFragment {
    pub fn line(s: impl Into<String>) -> Self {
        Self::Line(s.into())
    }

    pub fn blank() -> Self {
        Self::Blank
    }

    /// A brace-style block: `open`, the indented body, and `close`.
    pub fn block(open: impl Into<String>, body: Vec<CodeFragment>, close: impl Into<String>) -> Self {
        Self::Block {
            open: open.into(),
            body,
            close: close.into(),
        }
    }
}

/// A node that can describe itself as fragments.
pub trait Renderable {
    fn to_fragments(&self) -> Vec<CodeFragment>;
}

impl<T: Renderable + ?Sized> Renderable for &T {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

impl<T: Renderable + ?Sized> Renderable for Box<T> {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        (**self).to_fragments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker;

    impl Renderable for Marker {
        fn to_fragments(&self) -> Vec<CodeFragment> {
            vec![CodeFragment::line("marker")]
        }
    }

    #[test]
    fn test_block_constructor() {
        let block = CodeFragment::block("class A {", vec![CodeFragment::blank()], "}");
        assert_eq!(
            block,
            CodeFragment::Block {
                open: "class A {".into(),
                body: vec![CodeFragment::Blank],
                close: "}".into(),
            }
        );
    }

    #[test]
    fn test_pointers_forward_to_inner() {
        let boxed: Box<dyn Renderable> = Box::new(Marker);
        assert_eq!(boxed.to_fragments(), Marker.to_fragments());
        assert_eq!((&Marker).to_fragments(), vec![CodeFragment::line("marker")]);
    }
}
