//! Lint for HTTP verbs the client cannot express.

use apigen_manifest::Manifest;

use super::super::{Lint, lint::route_location};
use crate::pipeline::Diagnostic;

/// Lint that warns about routes whose verb renders as an empty method string.
pub struct UnsupportedMethodLint;

impl Lint for UnsupportedMethodLint {
    fn name(&self) -> &'static str {
        "unsupported-method"
    }

    fn description(&self) -> &'static str {
        "Detect HTTP verbs other than GET, POST, PUT and DELETE"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        for route in manifest.generated_routes() {
            if !route.method.is_supported() {
                diagnostics.push(
                    Diagnostic::warning(
                        "validate",
                        format!(
                            "route '{}' uses unsupported method '{}', rendered as an empty string",
                            route.name(),
                            route.method
                        ),
                    )
                    .at(route_location(route)),
                );
            }
        }
    }
}
