//! Type references and the type-expression parser.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// A named type, identified by its originating identity.
///
/// The identity is the qualified name when the defining entity is known
/// (`com.acme.User`, `com.acme.Outer$Inner`), or just the simple name for
/// built-ins and type variables (`String`, `T`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamedType {
    identity: String,
}

impl NamedType {
    pub fn new(identity: impl Into<String>) -> Self {
        Self {
            identity: identity.into(),
        }
    }

    /// Full originating identity.
    pub fn identity(&self) -> &str {
        &self.identity
    }

    /// Innermost name, after the last `.` or `$`.
    pub fn simple_name(&self) -> &str {
        apigen_core::simple_name(&self.identity)
    }

    /// Returns true if this type binds to a real defining entity.
    pub fn is_concrete(&self) -> bool {
        self.identity.contains(['.', '$'])
    }

    /// Check whether `pattern` names this type.
    ///
    /// Qualified patterns must match the identity exactly; unqualified ones
    /// match the simple name.
    pub fn matches(&self, pattern: &str) -> bool {
        if pattern.contains(['.', '$']) {
            self.identity == pattern
        } else {
            self.simple_name() == pattern
        }
    }
}

impl fmt::Display for NamedType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identity)
    }
}

/// A recursive type reference.
///
/// Equality is structural: two references are the same when their named
/// types and argument structure are the same.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TypeRef {
    /// A plain named type.
    Named(NamedType),
    /// A generic instantiation with ordered arguments.
    Generic { raw: NamedType, args: Vec<TypeRef> },
}

impl TypeRef {
    /// Create a non-generic reference.
    pub fn named(identity: impl Into<String>) -> Self {
        Self::Named(NamedType::new(identity))
    }

    /// Create a generic reference.
    pub fn generic(raw: impl Into<String>, args: Vec<TypeRef>) -> Self {
        Self::Generic {
            raw: NamedType::new(raw),
            args,
        }
    }

    /// The named type at the root of this reference.
    pub fn raw(&self) -> &NamedType {
        match self {
            Self::Named(named) => named,
            Self::Generic { raw, .. } => raw,
        }
    }

    /// Type arguments, empty for non-generic references.
    pub fn args(&self) -> &[TypeRef] {
        match self {
            Self::Named(_) => &[],
            Self::Generic { args, .. } => args,
        }
    }

    pub fn is_generic(&self) -> bool {
        matches!(self, Self::Generic { .. })
    }

    pub fn first_arg(&self) -> Option<&TypeRef> {
        self.args().first()
    }

    /// All named types in this reference, depth-first, raw before arguments.
    pub fn named_types(&self) -> Vec<&NamedType> {
        let mut out = Vec::new();
        self.collect_named(&mut out);
        out
    }

    fn collect_named<'a>(&'a self, out: &mut Vec<&'a NamedType>) {
        out.push(self.raw());
        for arg in self.args() {
            arg.collect_named(out);
        }
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(named) => write!(f, "{}", named),
            Self::Generic { raw, args } => {
                write!(f, "{}<", raw)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", arg)?;
                }
                f.write_str(">")
            }
        }
    }
}

/// Error produced when a type expression cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseTypeError {
    #[error("expected a type name at offset {at}")]
    ExpectedName { at: usize },
    #[error("unexpected character '{found}' at offset {at}")]
    UnexpectedChar { found: char, at: usize },
    #[error("unexpected end of type expression, missing '>'")]
    UnexpectedEnd,
}

impl FromStr for TypeRef {
    type Err = ParseTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parser = Parser { src: s, pos: 0 };
        let ty = parser.parse_type()?;
        parser.skip_ws();
        match parser.peek() {
            None => Ok(ty),
            Some(found) => Err(ParseTypeError::UnexpectedChar {
                found,
                at: parser.pos,
            }),
        }
    }
}

impl TryFrom<String> for TypeRef {
    type Error = ParseTypeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeRef> for String {
    fn from(value: TypeRef) -> Self {
        value.to_string()
    }
}

struct Parser<'a> {
    src: &'a str,
    pos: usize,
}

impl Parser<'_> {
    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    fn skip_ws(&mut self) {
        while self.peek().is_some_and(char::is_whitespace) {
            self.bump();
        }
    }

    fn ident(&mut self) -> Result<&str, ParseTypeError> {
        let start = self.pos;
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || matches!(c, '_' | '.' | '$'))
        {
            self.bump();
        }
        if self.pos == start {
            return Err(ParseTypeError::ExpectedName { at: start });
        }
        Ok(&self.src[start..self.pos])
    }

    fn parse_type(&mut self) -> Result<TypeRef, ParseTypeError> {
        self.skip_ws();
        let raw = NamedType::new(self.ident()?);
        self.skip_ws();
        if self.peek() != Some('<') {
            return Ok(TypeRef::Named(raw));
        }
        self.bump();

        let mut args = Vec::new();
        loop {
            args.push(self.parse_type()?);
            self.skip_ws();
            let at = self.pos;
            match self.bump() {
                Some(',') => continue,
                Some('>') => break,
                Some(found) => return Err(ParseTypeError::UnexpectedChar { found, at }),
                None => return Err(ParseTypeError::UnexpectedEnd),
            }
        }
        Ok(TypeRef::Generic { raw, args })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_type_simple_name() {
        assert_eq!(NamedType::new("com.acme.User").simple_name(), "User");
        assert_eq!(NamedType::new("com.acme.Outer$Inner").simple_name(), "Inner");
        assert_eq!(NamedType::new("String").simple_name(), "String");
    }

    #[test]
    fn test_named_type_is_concrete() {
        assert!(NamedType::new("com.acme.User").is_concrete());
        assert!(NamedType::new("Outer$Inner").is_concrete());
        assert!(!NamedType::new("String").is_concrete());
        assert!(!NamedType::new("T").is_concrete());
    }

    #[test]
    fn test_named_type_matches() {
        let ty = NamedType::new("org.springframework.http.ResponseEntity");
        assert!(ty.matches("ResponseEntity"));
        assert!(ty.matches("org.springframework.http.ResponseEntity"));
        assert!(!ty.matches("com.acme.ResponseEntity"));
        assert!(!ty.matches("Entity"));
    }

    #[test]
    fn test_parse_named() {
        let ty: TypeRef = "com.acme.User".parse().unwrap();
        assert_eq!(ty, TypeRef::named("com.acme.User"));
        assert!(!ty.is_generic());
    }

    #[test]
    fn test_parse_nested_generic() {
        let ty: TypeRef = "List<Map<com.acme.ABC, String>>".parse().unwrap();
        assert_eq!(
            ty,
            TypeRef::generic(
                "List",
                vec![TypeRef::generic(
                    "Map",
                    vec![TypeRef::named("com.acme.ABC"), TypeRef::named("String")]
                )]
            )
        );
    }

    #[test]
    fn test_parse_tolerates_whitespace() {
        let a: TypeRef = " Map < String ,Long > ".parse().unwrap();
        let b: TypeRef = "Map<String, Long>".parse().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "".parse::<TypeRef>(),
            Err(ParseTypeError::ExpectedName { at: 0 })
        );
        assert_eq!(
            "List<>".parse::<TypeRef>(),
            Err(ParseTypeError::ExpectedName { at: 5 })
        );
        assert_eq!(
            "List<String".parse::<TypeRef>(),
            Err(ParseTypeError::UnexpectedEnd)
        );
        assert_eq!(
            "List<String>>".parse::<TypeRef>(),
            Err(ParseTypeError::UnexpectedChar { found: '>', at: 12 })
        );
        assert_eq!(
            "List<String;>".parse::<TypeRef>(),
            Err(ParseTypeError::UnexpectedChar { found: ';', at: 11 })
        );
    }

    #[test]
    fn test_display_normalizes_spacing() {
        let ty: TypeRef = "Map<String,List< com.acme.ABC >>".parse().unwrap();
        assert_eq!(ty.to_string(), "Map<String, List<com.acme.ABC>>");
    }

    #[test]
    fn test_named_types_depth_first() {
        let ty: TypeRef = "Map<com.acme.A, List<com.acme.B>>".parse().unwrap();
        let names: Vec<_> = ty.named_types().iter().map(|n| n.identity()).collect();
        assert_eq!(names, vec!["Map", "com.acme.A", "List", "com.acme.B"]);
    }

    #[test]
    fn test_serde_uses_expression_strings() {
        let ty: TypeRef = serde_json::from_str("\"Mono<List<com.acme.ABC>>\"").unwrap();
        assert_eq!(ty.raw().identity(), "Mono");
        assert_eq!(
            serde_json::to_string(&ty).unwrap(),
            "\"Mono<List<com.acme.ABC>>\""
        );

        let err = serde_json::from_str::<TypeRef>("\"List<\"").unwrap_err();
        assert!(err.to_string().contains("expected a type name"));
    }
}
