//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest, making it easier to pass validation context
/// through nested sections.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "apigen.toml");
/// ctx.validate_name("Requester", "requester class")?;
///
/// // For nested validation
/// let nested = ctx.push("getUser");
/// nested.validate_name("id", "parameter")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["getUser"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "parameter in 'getUser'" or just "route" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a quoted value in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_value_span(self.source.src(), name)
    }

    /// Validate that a name is a usable TypeScript binding name.
    ///
    /// Checks for reserved words and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        self.check_binding(name, kind, self.find_span(name))
    }

    /// Like [`validate_name`](Self::validate_name) with a known span.
    pub fn validate_spanned_name(&self, name: &str, span: SourceSpan, kind: &str) -> Result<()> {
        self.check_binding(name, kind, Some(span))
    }

    /// Validate a class member name.
    ///
    /// Member names may be reserved words, so only the format is checked.
    pub fn validate_member_name(
        &self,
        name: &str,
        span: Option<SourceSpan>,
        kind: &str,
    ) -> Result<()> {
        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span.or_else(|| self.find_span(name)),
            ));
        }
        Ok(())
    }

    fn check_binding(&self, name: &str, kind: &str, span: Option<SourceSpan>) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self
                .source
                .reserved_keyword_error(name, self.context_for(kind), span));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                span,
            ));
        }

        Ok(())
    }
}

/// TypeScript reserved words that cannot be used as binding names
pub(crate) const RESERVED_WORDS: &[&str] = &[
    // Reserved words
    "break", "case", "catch", "class", "const", "continue", "debugger", "default", "delete", "do",
    "else", "enum", "export", "extends", "false", "finally", "for", "function", "if", "import",
    "in", "instanceof", "new", "null", "return", "super", "switch", "this", "throw", "true", "try",
    "typeof", "var", "void", "while", "with",
    // Strict mode reserved words
    "implements", "interface", "let", "package", "private", "protected", "public", "static",
    "yield", "await",
];

/// Check if a name is a TypeScript reserved word
pub(crate) fn is_reserved_word(name: &str) -> bool {
    RESERVED_WORDS.contains(&name)
}

/// Find the span of a quoted TOML value, e.g. `requester = "Api"` for `Api`
pub(crate) fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        for pattern in [
            format!("= {quote}{value}{quote}"),
            format!("={quote}{value}{quote}"),
        ] {
            if let Some(pos) = src.find(&pattern) {
                // skip up to and including the opening quote
                let start = pos + pattern.len() - value.len() - 1;
                return Some(SourceSpan::from((start, value.len())));
            }
        }
    }

    None
}

/// Validate that a name is a valid TypeScript identifier
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, '_' or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_ascii_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, numbers, '_' and '$'");
    }

    None
}
