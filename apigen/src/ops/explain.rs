//! Explain operation - what a generation run would do.

use std::path::Path;

use apigen_codegen::pipeline::Pipeline;
use apigen_manifest::Manifest;

use crate::reports::{ExplainReport, NamedItem};

/// Describe the pipeline and the effective generator settings of `manifest`.
pub fn explain(manifest: &Manifest, config_path: &Path) -> ExplainReport {
    let pipeline = Pipeline::new();
    let generator = &manifest.generator;

    let phases = pipeline
        .phase_info()
        .into_iter()
        .map(|p| NamedItem::new(p.name, p.description))
        .collect();
    let lints = pipeline
        .lint_info()
        .into_iter()
        .map(|l| NamedItem::new(l.name, l.description))
        .collect();

    let settings = vec![
        NamedItem::new("output", generator.output.display().to_string()),
        NamedItem::new("client module", generator.client_file_name()),
        NamedItem::new("model module", generator.model_file_name()),
        NamedItem::new("model namespace", &generator.model_namespace),
        NamedItem::new("requester", &generator.requester),
        NamedItem::new("envelopes", list(&generator.envelopes)),
        NamedItem::new(
            "unwrap first generic",
            generator.unwrap_first_generic.to_string(),
        ),
        NamedItem::new("markers", list(&generator.markers)),
        NamedItem::new("excluded groups", list(&generator.exclude_groups)),
        NamedItem::new("excluded types", list(&generator.exclude_types)),
        NamedItem::new(
            "name collisions",
            if generator.allow_name_collisions {
                "warning"
            } else {
                "error"
            },
        ),
    ];

    ExplainReport {
        config_path: config_path.to_path_buf(),
        phases,
        lints,
        settings,
        type_mappings: manifest
            .types
            .iter()
            .map(|(name, template)| NamedItem::new(name, template))
            .collect(),
    }
}

fn list(items: &[String]) -> String {
    if items.is_empty() {
        "(none)".to_string()
    } else {
        items.join(", ")
    }
}
