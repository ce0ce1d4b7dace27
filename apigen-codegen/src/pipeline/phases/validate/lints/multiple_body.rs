//! Lint for routes with more than one request body.

use apigen_ir::{Requiredness, SourceKind};
use apigen_manifest::Manifest;

use super::super::{Lint, lint::route_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a route declares several body parameters.
///
/// Only the first one is sent as `body`.
pub struct MultipleBodyLint;

impl Lint for MultipleBodyLint {
    fn name(&self) -> &'static str {
        "multiple-body"
    }

    fn description(&self) -> &'static str {
        "Detect routes declaring more than one body parameter"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for route in manifest.generated_routes() {
            let bodies: Vec<&str> = route
                .params
                .iter()
                .filter(|p| {
                    p.source == SourceKind::Body
                        && p.declared_requiredness() != Requiredness::Excluded
                })
                .map(|p| p.name())
                .collect();

            if bodies.len() > 1 {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "route '{}' has {} body parameters, only '{}' is sent",
                            route.name(),
                            bodies.len(),
                            bodies[0]
                        ),
                    )
                    .at(route_location(route)),
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse_manifest(content: &str) -> Manifest {
        content.parse().expect("Failed to parse test manifest")
    }

    #[test]
    fn test_single_body() {
        let manifest = parse_manifest(
            r#"
            [[routes]]
            group = "G"
            name = "create"
            method = "POST"

            [[routes.params]]
            name = "user"
            source = "body"
            type = "com.acme.User"
        "#,
        );

        let mut diagnostics = Vec::new();
        MultipleBodyLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_two_bodies() {
        let manifest = parse_manifest(
            r#"
            [[routes]]
            group = "G"
            name = "create"
            method = "POST"

            [[routes.params]]
            name = "user"
            source = "body"
            type = "com.acme.User"

            [[routes.params]]
            name = "extra"
            source = "body"
            type = "String"
        "#,
        );

        let mut diagnostics = Vec::new();
        MultipleBodyLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("only 'user' is sent"));
    }
}
