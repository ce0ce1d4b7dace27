//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use miette::SourceSpan;

use super::{Manifest, RouteEntry, validate::ParseContext};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "apigen.toml")
    }
}

impl Manifest {
    /// Parse an apigen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse an apigen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);
    let generator = &manifest.generator;

    ctx.validate_name(&generator.requester, "requester class")?;
    ctx.validate_name(&generator.model_namespace, "model namespace")?;
    if generator.model_file.trim().is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("generator.model_file cannot be empty"));
    }

    for (name, template) in &manifest.types {
        if template.trim().is_empty() {
            return Err(ctx.source_context().validation_error(format!(
                "type mapping for '{}' cannot be empty",
                name
            )));
        }
    }

    for route in &manifest.routes {
        validate_route(&ctx, route)?;
    }

    for (identity, model) in &manifest.models {
        let model_ctx = ctx.push(identity);
        for field in &model.fields {
            model_ctx.validate_member_name(&field.name, None, "field")?;
        }
        for param in &model.type_params {
            model_ctx.validate_name(param, "type parameter")?;
        }
    }

    Ok(())
}

fn validate_route<'a>(ctx: &ParseContext<'a>, route: &'a RouteEntry) -> Result<()> {
    if route.group.trim().is_empty() {
        return Err(ctx.source_context().validation_error_at(
            format!("route '{}' has an empty group", route.name()),
            route.name.span(),
        ));
    }

    ctx.validate_member_name(route.name(), Some(route.name.span().into()), "route")?;

    let route_ctx = ctx.push(route.name());
    let mut seen: HashMap<&str, SourceSpan> = HashMap::new();
    for param in &route.params {
        let span: SourceSpan = param.name.span().into();
        route_ctx.validate_spanned_name(param.name(), span, "parameter")?;

        if let Some(first) = seen.insert(param.name(), span) {
            return Err(route_ctx.source_context().duplicate_parameter_error(
                param.name(),
                route.name(),
                first,
                span,
            ));
        }
    }

    Ok(())
}
