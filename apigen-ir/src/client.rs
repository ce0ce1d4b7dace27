//! Client Intermediate Representation.
//!
//! The client IR groups route descriptors by their owning group, preserving
//! discovery order for both groups and routes.
//!
//! ```text
//! apigen.toml → Manifest (parsing) → ClientIR (lowering) → Generator (codegen)
//! ```

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Route, TypeRef};

/// Everything the generator needs for one run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ClientIR {
    /// Route groups in discovery order.
    pub groups: Vec<GroupIR>,
    /// Types to declare in the model module even if no route references them.
    pub extra_models: Vec<TypeRef>,
}

/// Routes owned by a single group.
#[derive(Debug, Clone, Serialize)]
pub struct GroupIR {
    /// Group identity (e.g. `com.acme.UserController`).
    pub identity: String,
    pub routes: Vec<Route>,
}

impl GroupIR {
    /// Simple name of the group (e.g. `UserController`).
    pub fn simple_name(&self) -> &str {
        apigen_core::simple_name(&self.identity)
    }
}

impl ClientIR {
    /// Group routes by their `group` field.
    ///
    /// The first route seen for a group fixes that group's position.
    pub fn from_routes(routes: impl IntoIterator<Item = Route>) -> Self {
        let mut groups: IndexMap<String, Vec<Route>> = IndexMap::new();
        for route in routes {
            groups.entry(route.group.clone()).or_default().push(route);
        }

        Self {
            groups: groups
                .into_iter()
                .map(|(identity, routes)| GroupIR { identity, routes })
                .collect(),
            extra_models: Vec::new(),
        }
    }

    pub fn with_extra_models(mut self, extra_models: Vec<TypeRef>) -> Self {
        self.extra_models = extra_models;
        self
    }

    /// All routes, group by group.
    pub fn routes(&self) -> impl Iterator<Item = &Route> {
        self.groups.iter().flat_map(|g| g.routes.iter())
    }

    pub fn route_count(&self) -> usize {
        self.groups.iter().map(|g| g.routes.len()).sum()
    }
}
