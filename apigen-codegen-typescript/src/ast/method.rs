//! Class constructor and method builders.

use apigen_codegen::builder::{CodeFragment, Renderable};

/// A class constructor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    params: String,
    body: Vec<String>,
}

impl Constructor {
    /// Constructor with an already rendered parameter list.
    pub fn new(params: impl Into<String>) -> Self {
        Self {
            params: params.into(),
            body: Vec::new(),
        }
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }
}

impl Renderable for Constructor {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.body.is_empty() {
            return vec![CodeFragment::line(format!("constructor({}) {{}}", self.params))];
        }
        vec![CodeFragment::block(
            format!("constructor({}) {{", self.params),
            self.body.iter().map(CodeFragment::line).collect(),
            "}",
        )]
    }
}

/// A class method, concrete or abstract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    params: String,
    returns: Option<String>,
    body: Vec<String>,
    is_abstract: bool,
}

impl Method {
    /// Method with an already rendered parameter list.
    pub fn new(name: impl Into<String>, params: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            params: params.into(),
            returns: None,
            body: Vec::new(),
            is_abstract: false,
        }
    }

    pub fn returns(mut self, ty: impl Into<String>) -> Self {
        self.returns = Some(ty.into());
        self
    }

    pub fn body_line(mut self, line: impl Into<String>) -> Self {
        self.body.push(line.into());
        self
    }

    /// Declare the method without a body.
    pub fn abstract_(mut self) -> Self {
        self.is_abstract = true;
        self
    }

    fn signature(&self) -> String {
        let abstract_kw = if self.is_abstract { "abstract " } else { "" };
        match &self.returns {
            Some(ret) => format!("{}{}({}): {}", abstract_kw, self.name, self.params, ret),
            None => format!("{}{}({})", abstract_kw, self.name, self.params),
        }
    }
}

impl Renderable for Method {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.is_abstract {
            return vec![CodeFragment::line(format!("{};", self.signature()))];
        }
        vec![CodeFragment::block(
            format!("{} {{", self.signature()),
            self.body.iter().map(CodeFragment::line).collect(),
            "}",
        )]
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(node: &impl Renderable) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(node);
        builder.build()
    }

    #[test]
    fn test_empty_constructor() {
        let c = Constructor::new("private requester: Requester");
        assert_eq!(build(&c), "constructor(private requester: Requester) {}\n");
    }

    #[test]
    fn test_constructor_with_body() {
        let c = Constructor::new("private requester: Requester")
            .body_line("this.user = new UserController(this.requester);");
        assert_eq!(
            build(&c),
            "constructor(private requester: Requester) {\n  this.user = new UserController(this.requester);\n}\n"
        );
    }

    #[test]
    fn test_method() {
        let m = Method::new("getUser", "id:number")
            .returns("Promise<TYPE.User>")
            .body_line("return x;");
        assert_eq!(
            build(&m),
            "getUser(id:number): Promise<TYPE.User> {\n  return x;\n}\n"
        );
    }

    #[test]
    fn test_abstract_method() {
        let m = Method::new("request", "param: any").returns("Promise<any>").abstract_();
        assert_eq!(build(&m), "abstract request(param: any): Promise<any>;\n");
    }
}
