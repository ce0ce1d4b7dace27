//! Envelope unwrapping for return types.

use crate::TypeRef;

/// Raw type names that wrap the real payload of a response
/// (e.g. `ResponseEntity<T>`, `Mono<T>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelopes {
    names: Vec<String>,
}

impl Envelopes {
    pub fn new(names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns true if `ty` is a generic instantiation of an envelope.
    pub fn wraps(&self, ty: &TypeRef) -> bool {
        ty.is_generic() && self.names.iter().any(|name| ty.raw().matches(name))
    }

    /// Strip envelopes until the payload type is reached.
    ///
    /// `Mono<ResponseEntity<List<User>>>` becomes `List<User>`. Non-generic
    /// references are returned unchanged, so unwrapping twice is the same as
    /// unwrapping once.
    pub fn unwrap<'a>(&self, ty: &'a TypeRef) -> &'a TypeRef {
        let mut current = ty;
        while self.wraps(current) {
            match current.first_arg() {
                Some(inner) => current = inner,
                None => break,
            }
        }
        current
    }

    /// The payload type of a route's declared return type.
    ///
    /// With `first_generic` set, a generic return type is first replaced by
    /// its first argument.
    pub fn payload<'a>(&self, declared: &'a TypeRef, first_generic: bool) -> &'a TypeRef {
        let ty = match declared.first_arg() {
            Some(first) if first_generic => first,
            _ => declared,
        };
        self.unwrap(ty)
    }
}

impl Default for Envelopes {
    fn default() -> Self {
        Self::new(["ResponseEntity", "Mono", "Flux"])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(s: &str) -> TypeRef {
        s.parse().unwrap()
    }

    #[test]
    fn test_unwrap_single_envelope() {
        let envelopes = Envelopes::default();
        let declared = ty("ResponseEntity<List<com.acme.ABC>>");
        assert_eq!(envelopes.unwrap(&declared), &ty("List<com.acme.ABC>"));
    }

    #[test]
    fn test_unwrap_double_envelope() {
        let envelopes = Envelopes::default();
        let declared = ty("Mono<ResponseEntity<com.acme.User>>");
        assert_eq!(envelopes.unwrap(&declared), &ty("com.acme.User"));
    }

    #[test]
    fn test_unwrap_qualified_envelope() {
        let envelopes = Envelopes::default();
        let declared = ty("reactor.core.publisher.Flux<String>");
        assert_eq!(envelopes.unwrap(&declared), &ty("String"));
    }

    #[test]
    fn test_unwrap_is_idempotent() {
        let envelopes = Envelopes::default();
        for s in ["Mono<Flux<List<String>>>", "String", "List<Mono<String>>", "ResponseEntity"] {
            let declared = ty(s);
            let once = envelopes.unwrap(&declared);
            assert_eq!(envelopes.unwrap(once), once);
        }
    }

    #[test]
    fn test_non_generic_envelope_unchanged() {
        let envelopes = Envelopes::default();
        let declared = ty("ResponseEntity");
        assert_eq!(envelopes.unwrap(&declared), &declared);
    }

    #[test]
    fn test_custom_envelopes() {
        let envelopes = Envelopes::new(["Result"]);
        let declared = ty("Result<Mono<String>>");
        assert_eq!(envelopes.unwrap(&declared), &ty("Mono<String>"));
    }

    #[test]
    fn test_payload_first_generic() {
        let envelopes = Envelopes::default();
        let declared = ty("Page<ResponseEntity<com.acme.User>>");
        assert_eq!(envelopes.payload(&declared, false), &declared);
        assert_eq!(envelopes.payload(&declared, true), &ty("com.acme.User"));

        let plain = ty("com.acme.User");
        assert_eq!(envelopes.payload(&plain, true), &plain);
    }
}
