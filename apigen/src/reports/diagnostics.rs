//! Pipeline diagnostics flattened for display.

use apigen_codegen::pipeline::{Diagnostic, Severity};

use super::output::{Output, Report};

/// Diagnostic messages split by severity, with their locations folded in.
#[derive(Debug, Default)]
pub struct DiagnosticLines {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
    pub infos: Vec<String>,
}

impl DiagnosticLines {
    pub fn from_diagnostics(diagnostics: &[Diagnostic]) -> Self {
        let mut lines = Self::default();

        for diag in diagnostics {
            let mut msg = match &diag.code {
                Some(code) => format!("[{}] {}", code, diag.message),
                None => diag.message.clone(),
            };
            if let Some(loc) = &diag.location {
                msg.push_str(&format!("\n  --> {}", loc));
            }

            match diag.severity {
                Severity::Error => lines.errors.push(msg),
                Severity::Warning => lines.warnings.push(msg),
                Severity::Info => lines.infos.push(msg),
            }
        }

        lines
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty() && self.infos.is_empty()
    }
}

impl Report for DiagnosticLines {
    fn render(&self, out: &mut dyn Output) {
        for error in &self.errors {
            out.error(error);
        }
        for warning in &self.warnings {
            out.warning(warning);
        }
        for info in &self.infos {
            out.preformatted(&format!("info: {}", info));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_by_severity() {
        let diagnostics = vec![
            Diagnostic::warning("validate", "verb 'PATCH' is not supported")
                .with_code("unsupported-method")
                .at("routes.UserController.patch"),
            Diagnostic::error("validate", "types clash"),
            Diagnostic::info("lower", "2 groups"),
        ];

        let lines = DiagnosticLines::from_diagnostics(&diagnostics);
        assert_eq!(lines.errors, vec!["types clash"]);
        assert_eq!(
            lines.warnings,
            vec![
                "[unsupported-method] verb 'PATCH' is not supported\n  --> routes.UserController.patch"
            ]
        );
        assert_eq!(lines.infos, vec!["2 groups"]);
    }
}
