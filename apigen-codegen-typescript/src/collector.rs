//! Referenced-type collection for the model module.

use apigen_ir::{NamedType, TypeRef};
use indexmap::IndexSet;

use crate::resolver::TypeRegistry;

/// Distinct type references touched while rendering the client, in
/// first-seen order.
///
/// Deduplication is structural, so `List<User>` and `List<Order>` are two
/// entries while a second `List<User>` is not.
#[derive(Debug, Clone, Default)]
pub struct ReferencedTypes {
    types: IndexSet<TypeRef>,
}

impl ReferencedTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if `ty` was not seen before.
    pub fn add(&mut self, ty: &TypeRef) -> bool {
        self.types.insert(ty.clone())
    }

    pub fn extend<'a>(&mut self, types: impl IntoIterator<Item = &'a TypeRef>) {
        for ty in types {
            self.add(ty);
        }
    }

    pub fn contains(&self, ty: &TypeRef) -> bool {
        self.types.contains(ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TypeRef> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Close the collection: add everything the resolver registered, then
    /// drop references whose root type is excluded.
    pub fn finish(
        mut self,
        registry: &TypeRegistry,
        is_excluded: impl Fn(&NamedType) -> bool,
    ) -> Vec<TypeRef> {
        for named in registry.iter() {
            self.types.insert(TypeRef::Named(named.clone()));
        }
        self.types
            .into_iter()
            .filter(|ty| !is_excluded(ty.raw()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ty(src: &str) -> TypeRef {
        src.parse().expect("type should parse")
    }

    #[test]
    fn test_structural_dedup() {
        let mut types = ReferencedTypes::new();
        assert!(types.add(&ty("List<com.acme.User>")));
        assert!(types.add(&ty("List<com.acme.Order>")));
        assert!(!types.add(&ty("List<com.acme.User>")));
        assert_eq!(types.len(), 2);
    }

    #[test]
    fn test_finish_merges_registry_and_excludes() {
        let mut types = ReferencedTypes::new();
        types.extend(&[ty("com.acme.User"), ty("ResponseEntity<String>")]);

        let mut registry = TypeRegistry::new();
        registry.register(&NamedType::new("com.acme.User"));
        registry.register(&NamedType::new("com.acme.Role"));

        let finished = types.finish(&registry, |t| t.matches("ResponseEntity"));
        assert_eq!(finished, vec![ty("com.acme.User"), ty("com.acme.Role")]);
    }
}
