//! Route and parameter descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::TypeRef;

/// HTTP verb of a route.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
    /// Any other verb, kept verbatim for diagnostics.
    Unsupported(String),
}

impl HttpMethod {
    /// Lowercase verb as written into generated code, empty when unsupported.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Get => "get",
            Self::Post => "post",
            Self::Put => "put",
            Self::Delete => "delete",
            Self::Unsupported(_) => "",
        }
    }

    pub fn is_supported(&self) -> bool {
        !matches!(self, Self::Unsupported(_))
    }
}

impl From<&str> for HttpMethod {
    fn from(value: &str) -> Self {
        match value.to_ascii_uppercase().as_str() {
            "GET" => Self::Get,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "DELETE" => Self::Delete,
            _ => Self::Unsupported(value.to_string()),
        }
    }
}

impl From<String> for HttpMethod {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<HttpMethod> for String {
    fn from(value: HttpMethod) -> Self {
        value.to_string()
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => f.write_str("GET"),
            Self::Post => f.write_str("POST"),
            Self::Put => f.write_str("PUT"),
            Self::Delete => f.write_str("DELETE"),
            Self::Unsupported(verb) => f.write_str(verb),
        }
    }
}

/// Where a parameter's value travels in the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    /// Interpolated into the URL template.
    #[serde(alias = "path_variable")]
    Path,
    /// Sent in the query-parameter object.
    #[serde(alias = "query_param")]
    Query,
    /// Sent as the request body.
    #[serde(alias = "request_body")]
    Body,
    /// Part of the signature only.
    Other,
}

/// Requiredness of a parameter.
///
/// Ordering puts `Required` before `Optional`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Requiredness {
    Required,
    Optional,
    /// Omitted from both the signature and the call site.
    Excluded,
}

/// A parameter of a route.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Parameter {
    pub name: String,
    pub source: SourceKind,
    pub requiredness: Requiredness,
    pub ty: TypeRef,
}

impl Parameter {
    pub fn new(
        name: impl Into<String>,
        source: SourceKind,
        requiredness: Requiredness,
        ty: TypeRef,
    ) -> Self {
        Self {
            name: name.into(),
            source,
            requiredness,
            ty,
        }
    }
}

/// Placeholder names (`{id}`) in a URL template, in order.
///
/// An unterminated `{` ends the scan.
pub fn url_placeholders(template: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut rest = template;
    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        match after.find('}') {
            Some(close) => {
                out.push(&after[..close]);
                rest = &after[close + 1..];
            }
            None => break,
        }
    }
    out
}

/// A discovered route handler, as seen by the generator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Route {
    /// Owning group identity (e.g. `com.acme.UserController`).
    pub group: String,
    /// Method name, used verbatim.
    pub name: String,
    pub http_method: HttpMethod,
    /// Group base path joined with the route path.
    pub url_template: String,
    pub parameters: Vec<Parameter>,
    pub return_type: TypeRef,
    /// Annotation that marked the route, when known.
    pub marker: Option<String>,
}

impl Route {
    /// Placeholder names (`{id}`) in the URL template, in order.
    pub fn placeholders(&self) -> Vec<&str> {
        url_placeholders(&self.url_template)
    }

    /// Parameters that are not excluded.
    pub fn visible_parameters(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters
            .iter()
            .filter(|p| p.requiredness != Requiredness::Excluded)
    }

    /// Visible parameters from the given source.
    pub fn parameters_from(&self, source: SourceKind) -> impl Iterator<Item = &Parameter> {
        self.visible_parameters().filter(move |p| p.source == source)
    }
}
