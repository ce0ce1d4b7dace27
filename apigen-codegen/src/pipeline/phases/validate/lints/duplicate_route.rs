//! Lint for duplicate route names within a group.

use std::collections::HashSet;

use apigen_manifest::Manifest;

use super::super::{Lint, lint::route_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a group declares two routes with the same name.
///
/// Both methods are emitted; TypeScript keeps the last one.
pub struct DuplicateRouteLint;

impl Lint for DuplicateRouteLint {
    fn name(&self) -> &'static str {
        "duplicate-route"
    }

    fn description(&self) -> &'static str {
        "Detect routes sharing a name within one group"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut seen: HashSet<(&str, &str)> = HashSet::new();

        for route in manifest.generated_routes() {
            if !seen.insert((route.group.as_str(), route.name())) {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "duplicate route '{}' in group '{}'",
                            route.name(),
                            route.group
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
    fn test_same_name_in_different_groups() {
        let manifest = parse_manifest(
            r#"
            [[routes]]
            group = "com.acme.UserController"
            name = "list"
            method = "GET"

            [[routes]]
            group = "com.acme.OrderController"
            name = "list"
            method = "GET"
        "#,
        );

        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(&manifest, &mut diagnostics);

        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_duplicate_in_group() {
        let manifest = parse_manifest(
            r#"
            [[routes]]
            group = "com.acme.UserController"
            name = "find"
            method = "GET"

            [[routes]]
            group = "com.acme.UserController"
            name = "find"
            method = "POST"
        "#,
        );

        let mut diagnostics = Vec::new();
        DuplicateRouteLint.check(&manifest, &mut diagnostics);

        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.contains("'find'"));
    }
}
