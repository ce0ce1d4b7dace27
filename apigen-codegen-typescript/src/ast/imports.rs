//! TypeScript import builder.

use apigen_codegen::builder::{CodeFragment, Renderable};

/// A namespace import: `import * as TYPE from './api.model';`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Import {
    alias: String,
    from: String,
}

impl Import {
    pub fn namespace(alias: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            alias: alias.into(),
            from: from.into(),
        }
    }
}

impl Renderable for Import {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        vec![CodeFragment::line(format!(
            "import * as {} from '{}';",
            self.alias, self.from
        ))]
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::builder::CodeBuilder;

    use super::*;

    #[test]
    fn test_namespace_import() {
        let mut builder = CodeBuilder::typescript();
        builder.emit(&Import::namespace("TYPE", "./api.model"));
        assert_eq!(builder.build(), "import * as TYPE from './api.model';\n");
    }
}
