use apigen_ir::TypeRef;
use serde::Deserialize;

/// `[models."<identity>"]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModelDecl {
    /// Type parameters of a generic model (e.g. `["T"]`)
    #[serde(default)]
    pub type_params: Vec<String>,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<FieldDecl>,
}

/// A field of a model declaration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FieldDecl {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: TypeRef,

    #[serde(default)]
    pub optional: bool,
}
