//! TypeScript class builder.

use apigen_codegen::builder::{CodeFragment, Renderable};

use super::{Constructor, Method};

/// Builder for TypeScript classes.
///
/// Members render in a fixed layout: fields, then the constructor, then
/// methods, with a blank line between sections and between methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Class {
    name: String,
    is_abstract: bool,
    fields: Vec<(String, String)>,
    constructor: Option<Constructor>,
    methods: Vec<Method>,
}

impl Class {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            is_abstract: false,
            fields: Vec::new(),
            constructor: None,
            methods: Vec::new(),
        }
    }

    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    /// Declare a field (`name: Type;`).
    pub fn field(mut self, name: impl Into<String>, ty: impl Into<String>) -> Self {
        self.fields.push((name.into(), ty.into()));
        self
    }

    pub fn constructor(mut self, constructor: Constructor) -> Self {
        self.constructor = Some(constructor);
        self
    }

    pub fn method(mut self, method: Method) -> Self {
        self.methods.push(method);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> Vec<CodeFragment> {
        let mut sections: Vec<Vec<CodeFragment>> = Vec::new();

        if !self.fields.is_empty() {
            sections.push(
                self.fields
                    .iter()
                    .map(|(name, ty)| CodeFragment::line(format!("{}: {};", name, ty)))
                    .collect(),
            );
        }
        if let Some(constructor) = &self.constructor {
            sections.push(constructor.to_fragments());
        }
        sections.extend(self.methods.iter().map(Renderable::to_fragments));

        let mut body = Vec::new();
        for (i, section) in sections.into_iter().enumerate() {
            if i > 0 {
                body.push(CodeFragment::blank());
            }
            body.extend(section);
        }
        body
    }
}

impl Renderable for Class {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        let abstract_kw = if self.is_abstract { "abstract " } else { "" };
        let body = self.body();

        if body.is_empty() {
            return vec![CodeFragment::line(format!(
                "export {}class {} {{}}",
                abstract_kw, self.name
            ))];
        }
        vec![CodeFragment::block(
            format!("export {}class {} {{", abstract_kw, self.name),
            body,
            "}",
        )]
    }
}
