//! Lint for distinct model types sharing a simple name.

use std::collections::HashSet;

use apigen_ir::{NamedType, Requiredness, TypeRef};
use apigen_manifest::Manifest;
use indexmap::IndexMap;

use super::super::Lint;
use crate::{TypeTable, pipeline::Diagnostic};

/// Lint that reports concrete types which would land in the same model
/// declaration because they share a simple name.
///
/// This is an error unless `allow_name_collisions` is set.
pub struct NameCollisionLint;

impl Lint for NameCollisionLint {
    fn name(&self) -> &'static str {
        "model-name-collision"
    }

    fn description(&self) -> &'static str {
        "Detect distinct model types with the same simple name"
    }

    fn check(&self, manifest: &Manifest, diagnostics: &mut Vec<Diagnostic>) {
        let mut by_simple: IndexMap<&str, Vec<&str>> = IndexMap::new();
        for ty in referenced_types(manifest) {
            let identities = by_simple.entry(ty.simple_name()).or_default();
            if !identities.contains(&ty.identity()) {
                identities.push(ty.identity());
            }
        }

        for (simple, identities) in by_simple {
            if identities.len() < 2 {
                continue;
            }
            let message = format!(
                "types {} share the model name '{}'",
                identities.join(", "),
                simple
            );
            let diagnostic = if manifest.generator.allow_name_collisions {
                Diagnostic::warning("validate", message)
            } else {
                Diagnostic::error("validate", message)
            };
            diagnostics.push(diagnostic.at(format!("models.{}", simple)));
        }
    }
}

/// Concrete, non-excluded types the model module would declare, in first-seen
/// order. Field types of declared models are followed transitively.
///
/// Names in the type table never become declarations, and parameters whose
/// type is excluded are dropped as they are during lowering.
fn referenced_types(manifest: &Manifest) -> Vec<&NamedType> {
    let generator = &manifest.generator;
    let envelopes = generator.envelopes();
    let table = TypeTable::for_manifest(manifest);

    let mut roots: Vec<&TypeRef> = Vec::new();
    for route in manifest.generated_routes() {
        roots.extend(
            route
                .params
                .iter()
                .filter(|p| {
                    p.declared_requiredness() != Requiredness::Excluded
                        && !generator.is_type_excluded(p.ty.raw())
                })
                .map(|p| &p.ty),
        );
        roots.push(envelopes.payload(&route.returns, generator.unwrap_first_generic));
    }
    roots.extend(generator.extra_models.iter());

    let mut seen: HashSet<&str> = HashSet::new();
    let mut out = Vec::new();
    let mut queue: Vec<&NamedType> = roots.iter().flat_map(|ty| ty.named_types()).collect();
    queue.reverse();

    while let Some(ty) = queue.pop() {
        if !ty.is_concrete()
            || table.contains(ty.simple_name())
            || generator.is_type_excluded(ty)
        {
            continue;
        }
        if !seen.insert(ty.identity()) {
            continue;
        }
        out.push(ty);

        if let Some(model) = manifest.model(ty.identity()) {
            let mut nested: Vec<&NamedType> = model
                .fields
                .iter()
                .flat_map(|field| field.ty.named_types())
                .collect();
            nested.reverse();
            queue.extend(nested);
        }
    }

    out
}
