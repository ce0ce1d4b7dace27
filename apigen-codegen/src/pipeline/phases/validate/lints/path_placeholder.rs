//! Lint for path parameters and URL placeholders that do not line up.

use apigen_ir::{Requiredness, SourceKind, url_placeholders};
use apigen_manifest::Manifest;

use super::super::{Lint, lint::route_location};
use crate::pipeline::Diagnostic;

/// Lint that warns when a path parameter has no `{name}` placeholder in the
/// URL template, or a placeholder has no path parameter.
///
/// Such parameters stay in the signature but the URL is rendered without
/// interpolating them.
pub struct PathPlaceholderLint;

impl Lint for PathPlaceholderLint {
    fn name(&self) -> &'static str {
        "path-placeholder"
    }

    fn description(&self) -> &'static str {
        "Check that path parameters match the URL template placeholders"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for route in manifest.generated_routes() {
            let url = manifest.url_template(route);
            let placeholders = url_placeholders(&url);
            let path_params: Vec<&str> = route
                .params
                .iter()
                .filter(|p| {
                    p.source == SourceKind::Path
                        && p.declared_requiredness() != Requiredness::Excluded
                })
                .map(|p| p.name())
                .collect();

            for name in &path_params {
                if !placeholders.contains(name) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "path parameter '{}' has no '{{{}}}' placeholder in '{}'",
                                name, name, url
                            ),
                        )
                        .at(route_location(route)),
                    );
                }
            }

            for placeholder in &placeholders {
                if !path_params.contains(placeholder) {
                    diagnostics.push(
                        Diagnostic::warning(
                            "validate",
                            format!(
                                "placeholder '{{{}}}' in '{}' has no matching path parameter",
                                placeholder, url
                            ),
                        )
                        .at(route_location(route)),
                    );
                }
            }
        }
    }
}
