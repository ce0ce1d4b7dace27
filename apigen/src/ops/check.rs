//! Check operation - manifest validation.

use std::path::Path;

use apigen_codegen::pipeline::{CompilationContext, Pipeline};
use apigen_codegen_typescript::Generator;
use apigen_manifest::Manifest;

use crate::reports::{CheckReport, DiagnosticLines, GroupSummary};

/// Execute the check operation.
///
/// Runs the pipeline to validate the manifest and summarizes the lowered
/// client when validation passes.
pub fn check(manifest: &Manifest, config_path: &Path) -> CheckReport {
    let mut ctx = CompilationContext::new(manifest.clone());
    let diagnostics = match super::run_pipeline(&Pipeline::new(), &mut ctx) {
        Ok(lines) => lines,
        Err(err) => DiagnosticLines {
            errors: vec![format!("{:#}", err)],
            ..DiagnosticLines::default()
        },
    };

    let mut report = CheckReport {
        config_path: config_path.to_path_buf(),
        diagnostics,
        groups: Vec::new(),
        model_count: 0,
    };

    // The IR is only present when validation passed.
    if let Some(ir) = ctx.ir.take() {
        report.groups = ir
            .groups
            .iter()
            .map(|group| GroupSummary {
                name: group.simple_name().to_string(),
                routes: group.routes.iter().map(|r| r.name.clone()).collect(),
            })
            .collect();
        report.model_count = Generator::new(ir, manifest)
            .render()
            .model
            .declaration_count();
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_str(content: &str) -> CheckReport {
        let manifest: Manifest = content.parse().expect("manifest should parse");
        check(&manifest, Path::new("apigen.toml"))
    }

    #[test]
    fn test_valid_manifest_summary() {
        let report = check_str(
            r#"
            [[routes]]
            group = "com.acme.UserController"
            name = "getUser"
            method = "GET"
            path = "/user/{id}"
            returns = "com.acme.User"

            [[routes.params]]
            name = "id"
            source = "path"
            type = "Long"

            [[routes]]
            group = "com.acme.UserController"
            name = "list"
            method = "GET"
            path = "/user"
            returns = "List<com.acme.User>"
            "#,
        );

        assert!(report.is_valid());
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].name, "UserController");
        assert_eq!(report.groups[0].routes, vec!["getUser", "list"]);
        assert_eq!(report.model_count, 1);
    }

    #[test]
    fn test_errors_skip_summary() {
        let report = check_str(
            r#"
            [[routes]]
            group = "com.acme.a.UserController"
            name = "get"
            method = "GET"
            path = "/a"
            returns = "com.acme.a.User"

            [[routes]]
            group = "com.acme.b.UserController"
            name = "get"
            method = "GET"
            path = "/b"
            returns = "com.acme.b.User"
            "#,
        );

        assert!(!report.is_valid());
        assert!(report.groups.is_empty());
        assert!(
            report
                .diagnostics
                .errors
                .iter()
                .any(|e| e.contains("User"))
        );
    }

    #[test]
    fn test_warnings_keep_manifest_valid() {
        let report = check_str(
            r#"
            [[routes]]
            group = "com.acme.UserController"
            name = "patch"
            method = "PATCH"
            path = "/user"
            returns = "String"
            "#,
        );

        assert!(report.is_valid());
        assert_eq!(report.diagnostics.warnings.len(), 1);
    }
}
