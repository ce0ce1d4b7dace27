//! TypeScript interface builder.

use apigen_codegen::builder::{CodeFragment, Renderable};

/// A field in a TypeScript interface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InterfaceField {
    pub name: String,
    pub ty: String,
    pub optional: bool,
}

impl InterfaceField {
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            optional: false,
        }
    }

    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }
}

/// Builder for exported TypeScript interfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    name: String,
    type_params: Vec<String>,
    fields: Vec<InterfaceField>,
}

impl Interface {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_params: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Add a generic type parameter (`interface Page<T>`).
    pub fn type_param(mut self, name: impl Into<String>) -> Self {
        self.type_params.push(name.into());
        self
    }

    pub fn field_with(mut self, field: InterfaceField) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    fn header(&self) -> String {
        if self.type_params.is_empty() {
            format!("export interface {}", self.name)
        } else {
            format!(
                "export interface {}<{}>",
                self.name,
                self.type_params.join(", ")
            )
        }
    }

    fn fields_to_fragments(&self) -> Vec<CodeFragment> {
        self.fields
            .iter()
            .map(|field| {
                let optional = if field.optional { "?" } else { "" };
                CodeFragment::line(format!("{}{}: {};", field.name, optional, field.ty))
            })
            .collect()
    }
}

impl Renderable for Interface {
    fn to_fragments(&self) -> Vec<CodeFragment> {
        if self.fields.is_empty() {
            vec![CodeFragment::line(format!("{} {{}}", self.header()))]
        } else {
            vec![CodeFragment::block(
                format!("{} {{", self.header()),
                self.fields_to_fragments(),
                "}",
            )]
        }
    }
}

#[cfg(test)]
mod tests {
    use apigen_codegen::builder::CodeBuilder;

    use super::*;

    fn build(interface: &Interface) -> String {
        let mut builder = CodeBuilder::typescript();
        builder.emit(interface);
        builder.build()
    }

    #[test]
    fn test_empty_interface() {
        assert_eq!(build(&Interface::new("Empty")), "export interface Empty {}\n");
    }

    #[test]
    fn test_interface_with_fields() {
        let i = Interface::new("User")
            .field_with(InterfaceField::new("id", "number"))
            .field_with(InterfaceField::new("nick", "string").optional());
        assert_eq!(
            build(&i),
            "export interface User {\n  id: number;\n  nick?: string;\n}\n"
        );
    }

    #[test]
    fn test_generic_interface() {
        let i = Interface::new("Page")
            .type_param("T")
            .field_with(InterfaceField::new("items", "T[]"));
        assert!(build(&i).starts_with("export interface Page<T> {\n"));
    }
}
