//! Pluggable rendering rules.
//!
//! Each rule of the client synthesizer is a plain function pointer so that
//! callers can swap a single rule without reimplementing the rest.

use apigen_core::{lower_first, strip_suffix_once};
use apigen_ir::{Parameter, Requiredness, Route, SourceKind, TypeRef};

use crate::resolver::{TypeRegistry, TypeResolver};

/// Renders a type reference as a TypeScript type expression.
pub type TypeNamer = fn(&TypeResolver, &TypeRef, &mut TypeRegistry) -> String;
/// Decides the requiredness of a parameter.
pub type RequirednessRule = fn(&Parameter) -> Requiredness;
/// Renders one signature entry from the parameter, its requiredness and its resolved type.
pub type ParameterRenderer = fn(&Parameter, Requiredness, &str) -> String;
/// Renders the method return type from the resolved payload type.
pub type ReturnRenderer = fn(&str) -> String;
/// Renders the `url` expression of the call site.
pub type UrlRenderer = fn(&Route) -> String;
/// Renders the verb string of the call site.
pub type HttpVerb = fn(&Route) -> String;
/// Renders the `queryParams` object literal of the call site.
pub type QueryParamsRenderer = fn(&Route) -> String;
/// Renders the `body` expression of the call site.
pub type BodyExtractor = fn(&Route) -> String;
/// Derives the aggregator member name from a group class name.
pub type MemberNamer = fn(&str) -> String;

/// The set of rules used by the client synthesizer.
#[derive(Debug, Clone, Copy)]
pub struct Strategies {
    pub type_namer: TypeNamer,
    pub requiredness: RequirednessRule,
    pub parameter: ParameterRenderer,
    pub returns: ReturnRenderer,
    pub url: UrlRenderer,
    pub http_method: HttpVerb,
    pub query_params: QueryParamsRenderer,
    pub body: BodyExtractor,
    pub member_namer: MemberNamer,
}

impl Default for Strategies {
    fn default() -> Self {
        Self {
            type_namer: resolve_type,
            requiredness: declared_requiredness,
            parameter: render_parameter,
            returns: promise_of,
            url: render_url,
            http_method: http_verb,
            query_params: render_query_params,
            body: first_body,
            member_namer: member_name,
        }
    }
}

pub fn resolve_type(resolver: &TypeResolver, ty: &TypeRef, registry: &mut TypeRegistry) -> String {
    resolver.resolve(ty, registry)
}

pub fn declared_requiredness(param: &Parameter) -> Requiredness {
    param.requiredness
}

/// `name:type`, or `name?:type` when optional.
pub fn render_parameter(param: &Parameter, requiredness: Requiredness, ty: &str) -> String {
    let optional = if requiredness == Requiredness::Optional {
        "?"
    } else {
        ""
    };
    format!("{}{}:{}", param.name, optional, ty)
}

pub fn promise_of(ty: &str) -> String {
    format!("Promise<{}>", ty)
}

/// A quoted literal when the route has no path parameters, otherwise a
/// template literal with each `{name}` placeholder of a path parameter
/// replaced by `${name}`.
///
/// Placeholders without a matching parameter are left as written.
pub fn render_url(route: &Route) -> String {
    let mut path_params = route.parameters_from(SourceKind::Path).peekable();
    if path_params.peek().is_none() {
        return format!("\"{}\"", route.url_template);
    }

    let url = path_params.fold(route.url_template.clone(), |url, param| {
        url.replace(&format!("{{{}}}", param.name), &format!("${{{}}}", param.name))
    });
    format!("`{}`", url)
}

pub fn http_verb(route: &Route) -> String {
    route.http_method.as_str().to_string()
}

/// `{a, b}` with the names of the query parameters, `{}` when there are none.
pub fn render_query_params(route: &Route) -> String {
    let names: Vec<&str> = route
        .parameters_from(SourceKind::Query)
        .map(|p| p.name.as_str())
        .collect();
    format!("{{{}}}", names.join(", "))
}

/// Name of the first body parameter, or `null`.
pub fn first_body(route: &Route) -> String {
    route
        .parameters_from(SourceKind::Body)
        .next()
        .map(|p| p.name.clone())
        .unwrap_or_else(|| "null".to_string())
}

/// `UserController` becomes `user`.
pub fn member_name(class_name: &str) -> String {
    lower_first(strip_suffix_once(class_name, "Controller"))
}
