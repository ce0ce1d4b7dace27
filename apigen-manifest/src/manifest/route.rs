use apigen_ir::{HttpMethod, Requiredness, SourceKind, TypeRef};
use serde::Deserialize;
use toml::Spanned;

/// `[groups."<identity>"]` section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupConfig {
    /// Path prefix shared by every route of the group
    #[serde(default)]
    pub base: String,

    /// Leave the group out of the client
    #[serde(default)]
    pub exclude: bool,
}

/// A `[[routes]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    /// Owning group identity
    pub group: String,

    /// Method name, used verbatim in the generated class
    /// Wrapped in Spanned to preserve source location for error reporting
    pub name: Spanned<String>,

    /// HTTP verb
    pub method: HttpMethod,

    /// Route path, appended to the group base path
    #[serde(default)]
    pub path: String,

    /// Declared return type
    #[serde(default = "default_returns")]
    pub returns: TypeRef,

    /// Annotation that marked the route
    pub marker: Option<String>,

    /// Parameters in declaration order
    #[serde(default)]
    pub params: Vec<ParamEntry>,
}

fn default_returns() -> TypeRef {
    TypeRef::named("void")
}

impl RouteEntry {
    /// Route name without span information.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }
}

/// A `[[routes.params]]` entry
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamEntry {
    /// Parameter name
    /// Wrapped in Spanned to preserve source location for error reporting
    pub name: Spanned<String>,

    /// Where the value travels
    #[serde(default = "default_source")]
    pub source: SourceKind,

    /// Declared type
    #[serde(rename = "type")]
    pub ty: TypeRef,

    /// Explicit requiredness, overrides the source-based default
    pub required: Option<bool>,

    /// Server-side default value (makes the parameter optional)
    pub default: Option<toml::Value>,

    /// Leave the parameter out of the signature and call site
    #[serde(default)]
    pub exclude: bool,
}

fn default_source() -> SourceKind {
    SourceKind::Other
}

impl ParamEntry {
    /// Parameter name without span information.
    pub fn name(&self) -> &str {
        self.name.get_ref()
    }

    /// Requiredness as declared, before type exclusions apply.
    ///
    /// Path, query and body parameters are required unless they carry a
    /// default; other parameters are optional.
    pub fn declared_requiredness(&self) -> Requiredness {
        if self.exclude {
            return Requiredness::Excluded;
        }
        match self.required {
            Some(true) => Requiredness::Required,
            Some(false) => Requiredness::Optional,
            None if self.default.is_some() => Requiredness::Optional,
            None if self.source == SourceKind::Other => Requiredness::Optional,
            None => Requiredness::Required,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param(src: &str) -> ParamEntry {
        toml::from_str(src).expect("param should parse")
    }

    #[test]
    fn test_requiredness_defaults_by_source() {
        let p = param("name = \"id\"\nsource = \"path\"\ntype = \"Long\"");
        assert_eq!(p.declared_requiredness(), Requiredness::Required);

        let p = param("name = \"q\"\nsource = \"query\"\ntype = \"String\"");
        assert_eq!(p.declared_requiredness(), Requiredness::Required);

        let p = param("name = \"ctx\"\ntype = \"com.acme.Ctx\"");
        assert_eq!(p.source, SourceKind::Other);
        assert_eq!(p.declared_requiredness(), Requiredness::Optional);
    }

    #[test]
    fn test_requiredness_default_value_makes_optional() {
        let p = param("name = \"page\"\nsource = \"query\"\ntype = \"Integer\"\ndefault = 0");
        assert_eq!(p.declared_requiredness(), Requiredness::Optional);
    }

    #[test]
    fn test_requiredness_explicit_wins() {
        let p = param(
            "name = \"page\"\nsource = \"query\"\ntype = \"Integer\"\ndefault = 0\nrequired = true",
        );
        assert_eq!(p.declared_requiredness(), Requiredness::Required);

        let p = param("name = \"b\"\nsource = \"body\"\ntype = \"String\"\nrequired = false");
        assert_eq!(p.declared_requiredness(), Requiredness::Optional);

        let p = param("name = \"b\"\nsource = \"body\"\ntype = \"String\"\nexclude = true");
        assert_eq!(p.declared_requiredness(), Requiredness::Excluded);
    }

    #[test]
    fn test_route_defaults() {
        let route: RouteEntry =
            toml::from_str("group = \"G\"\nname = \"ping\"\nmethod = \"GET\"").unwrap();
        assert_eq!(route.name(), "ping");
        assert_eq!(route.path, "");
        assert_eq!(route.returns, TypeRef::named("void"));
        assert!(route.params.is_empty());
    }

    #[test]
    fn test_route_rejects_bad_type_expression() {
        let err = toml::from_str::<RouteEntry>(
            "group = \"G\"\nname = \"ping\"\nmethod = \"GET\"\nreturns = \"List<\"",
        )
        .unwrap_err();
        assert!(err.message().contains("expected a type name"));
    }
}
