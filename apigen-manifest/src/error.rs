use std::path::PathBuf;

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Result of manifest loading. Errors carry source text, so they are boxed.
pub type Result<T> = std::result::Result<T, Box<Error>>;

/// Manifest text and file name, shared by every error raised while
/// validating one manifest so each can point into the source.
#[derive(Debug, Clone)]
pub struct SourceContext {
    src: String,
    filename: String,
}

impl SourceContext {
    pub fn new(src: impl Into<String>, filename: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            filename: filename.into(),
        }
    }

    pub fn src(&self) -> &str {
        &self.src
    }

    pub fn filename(&self) -> &str {
        &self.filename
    }

    pub fn named_source(&self) -> NamedSource<String> {
        NamedSource::new(&self.filename, self.src.clone())
    }

    /// Wrap a TOML syntax or shape error, keeping its span.
    pub fn parse_error(&self, source: toml::de::Error) -> Box<Error> {
        let span = source.span().map(SourceSpan::from);
        Box::new(Error::Parse {
            src: self.named_source(),
            span,
            source,
        })
    }

    pub fn validation_error(&self, message: impl Into<String>) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: None,
            message: message.into(),
        })
    }

    pub fn validation_error_at(
        &self,
        message: impl Into<String>,
        span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::Validation {
            src: self.named_source(),
            span: Some(span.into()),
            message: message.into(),
        })
    }

    pub fn reserved_keyword_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::ReservedKeyword {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
        })
    }

    pub fn invalid_identifier_error(
        &self,
        name: impl Into<String>,
        context: impl Into<String>,
        reason: impl Into<String>,
        span: Option<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::InvalidIdentifier {
            src: self.named_source(),
            span,
            name: name.into(),
            context: context.into(),
            reason: reason.into(),
        })
    }

    /// Two parameters of one route share a name; both declarations are labeled.
    pub fn duplicate_parameter_error(
        &self,
        name: impl Into<String>,
        route: impl Into<String>,
        first_span: impl Into<SourceSpan>,
        second_span: impl Into<SourceSpan>,
    ) -> Box<Error> {
        Box::new(Error::DuplicateParameter {
            src: self.named_source(),
            first_span: first_span.into(),
            second_span: second_span.into(),
            name: name.into(),
            route: route.into(),
        })
    }
}

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("failed to read '{path}'")]
    #[diagnostic(help("pass the manifest location with '--config <path>'"))]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse apigen.toml")]
    #[diagnostic(code(apigen::parse_error))]
    Parse {
        #[source_code]
        src: NamedSource<String>,
        #[label("parse error here")]
        span: Option<SourceSpan>,
        #[source]
        source: toml::de::Error,
    },

    #[error("duplicate parameter '{name}' in route '{route}'")]
    #[diagnostic(
        code(apigen::duplicate_parameter),
        help("each parameter of a route becomes an argument of the same method; rename one of them")
    )]
    DuplicateParameter {
        #[source_code]
        src: NamedSource<String>,
        #[label("first declared here")]
        first_span: SourceSpan,
        #[label("declared again here")]
        second_span: SourceSpan,
        name: String,
        route: String,
    },

    #[error("{message}")]
    #[diagnostic(code(apigen::validation_error))]
    Validation {
        #[source_code]
        src: NamedSource<String>,
        #[label("{message}")]
        span: Option<SourceSpan>,
        message: String,
    },

    #[error("'{name}' is a TypeScript reserved word")]
    #[diagnostic(help("rename the {context} '{name}', e.g. '{name}Value'"))]
    ReservedKeyword {
        #[source_code]
        src: NamedSource<String>,
        #[label("reserved word used here")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
    },

    #[error("invalid {context} name '{name}'")]
    #[diagnostic(help(
        "{reason}. Use only letters, numbers, '_' and '$', not starting with a number."
    ))]
    InvalidIdentifier {
        #[source_code]
        src: NamedSource<String>,
        #[label("invalid identifier")]
        span: Option<SourceSpan>,
        name: String,
        context: String,
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_context_accessors() {
        let ctx = SourceContext::new("content", "apigen.toml");
        assert_eq!(ctx.src(), "content");
        assert_eq!(ctx.filename(), "apigen.toml");
    }

    #[test]
    fn test_validation_error_message() {
        let ctx = SourceContext::new("", "apigen.toml");
        let err = ctx.validation_error("route group cannot be empty");
        assert_eq!(err.to_string(), "route group cannot be empty");
    }

    #[test]
    fn test_duplicate_parameter_message() {
        let ctx = SourceContext::new("abcdefgh", "apigen.toml");
        let err = ctx.duplicate_parameter_error("id", "getUser", (0, 2), (4, 2));
        assert_eq!(
            err.to_string(),
            "duplicate parameter 'id' in route 'getUser'"
        );
    }
}
