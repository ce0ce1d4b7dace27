//! Manifest types and parsing for apigen.toml files.

mod file;
mod generator;
mod model;
mod parse;
mod route;
mod validate;

pub use file::ApigenToml;
pub use generator::GeneratorConfig;
use indexmap::IndexMap;
pub use model::{FieldDecl, ModelDecl};
pub use route::{GroupConfig, ParamEntry, RouteEntry};
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for apigen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Generator settings
    #[serde(default)]
    pub generator: GeneratorConfig,

    /// Type table additions, simple name to TypeScript template
    #[serde(default)]
    pub types: IndexMap<String, String>,

    /// Per-group settings keyed by group identity
    #[serde(default)]
    pub groups: IndexMap<String, GroupConfig>,

    /// Route descriptors in discovery order
    #[serde(default)]
    pub routes: Vec<RouteEntry>,

    /// Model declarations keyed by type identity
    #[serde(default)]
    pub models: IndexMap<String, ModelDecl>,
}

impl Manifest {
    /// Settings for a group, if the manifest declares any.
    pub fn group(&self, identity: &str) -> Option<&GroupConfig> {
        self.groups.get(identity)
    }

    /// Returns true if the group is excluded from generation.
    pub fn is_group_excluded(&self, identity: &str) -> bool {
        self.generator
            .exclude_groups
            .iter()
            .any(|g| g == identity || g == apigen_ir::NamedType::new(identity).simple_name())
            || self.group(identity).is_some_and(|g| g.exclude)
    }

    /// Model declaration for a type identity.
    pub fn model(&self, identity: &str) -> Option<&ModelDecl> {
        self.models.get(identity)
    }

    /// Base path of a group, empty when undeclared.
    pub fn base_path(&self, identity: &str) -> &str {
        self.group(identity).map(|g| g.base.as_str()).unwrap_or("")
    }

    /// URL template of a route: the group base path followed by the route path.
    pub fn url_template(&self, route: &RouteEntry) -> String {
        format!("{}{}", self.base_path(&route.group), route.path)
    }

    /// Routes that take part in generation, in discovery order.
    ///
    /// Routes of excluded groups and routes carrying an unknown marker are
    /// skipped.
    pub fn generated_routes(&self) -> impl Iterator<Item = &RouteEntry> {
        self.routes.iter().filter(|route| {
            !self.is_group_excluded(&route.group)
                && self.generator.accepts_marker(route.marker.as_deref())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(content: &str) -> Manifest {
        content.parse().expect("manifest should parse")
    }

    #[test]
    fn test_empty_manifest_uses_defaults() {
        let manifest = parse("");
        assert!(manifest.routes.is_empty());
        assert_eq!(manifest.generator.requester, "Requester");
        assert_eq!(manifest.generator.model_file, "api.model");
        assert_eq!(manifest.generator.model_namespace, "TYPE");
    }

    #[test]
    fn test_group_exclusion() {
        let manifest = parse(
            r#"
            [generator]
            exclude_groups = ["AdminController"]

            [groups."com.acme.InternalController"]
            exclude = true

            [groups."com.acme.UserController"]
            base = "/user"
        "#,
        );

        assert!(manifest.is_group_excluded("com.acme.AdminController"));
        assert!(manifest.is_group_excluded("com.acme.InternalController"));
        assert!(!manifest.is_group_excluded("com.acme.UserController"));
        assert_eq!(manifest.base_path("com.acme.UserController"), "/user");
        assert_eq!(manifest.base_path("com.acme.OtherController"), "");
    }

    #[test]
    fn test_generated_routes_filters_groups_and_markers() {
        let manifest = parse(
            r#"
            [generator]
            exclude_groups = ["com.acme.AdminController"]

            [groups."com.acme.UserController"]
            base = "/user"

            [[routes]]
            group = "com.acme.UserController"
            name = "get"
            method = "GET"
            path = "/{id}"
            marker = "GetMapping"

            [[routes]]
            group = "com.acme.UserController"
            name = "any"
            method = "GET"
            marker = "RequestMapping"

            [[routes]]
            group = "com.acme.AdminController"
            name = "wipe"
            method = "DELETE"
        "#,
        );

        let names: Vec<_> = manifest.generated_routes().map(|r| r.name()).collect();
        assert_eq!(names, vec!["get"]);
        assert_eq!(manifest.url_template(&manifest.routes[0]), "/user/{id}");
    }

    #[test]
    fn test_unknown_top_level_key_rejected() {
        let result: crate::Result<Manifest> = "[cli]\nname = \"x\"".parse();
        assert!(result.is_err());
    }
}
