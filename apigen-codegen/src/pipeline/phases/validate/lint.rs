//! Lint trait for manifest validation.

use apigen_core::simple_name;
use apigen_manifest::{Manifest, RouteEntry};

use crate::pipeline::Diagnostic;

/// A lint that checks the manifest for issues.
pub trait Lint: Send + Sync {
    /// The name of this lint, used as the diagnostic code.
    fn name(&self) -> &'static str;

    /// A human-readable description of what this lint checks.
    fn description(&self) -> &'static str;

    /// Check the manifest and add any diagnostics.
    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>);
}

/// Name and description of a lint, for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LintInfo {
    pub name: &'static str,
    pub description: &'static str,
}

/// Location string for a route, e.g. `routes.UserController.getUser`.
pub(crate) fn route_location(route: &RouteEntry) -> String {
    format!("routes.{}.{}", simple_name(&route.group), route.name())
}
