//! Type name resolution: type references to TypeScript type expressions.

use apigen_codegen::TypeTable;
use apigen_ir::{NamedType, TypeRef};
use indexmap::IndexSet;

/// Placeholder substituted with the resolved type argument(s).
const ARG_PLACEHOLDER: &str = "{}";

/// Argument used when a templated table entry appears without arguments.
const DEFAULT_ARG: &str = "any";

/// Concrete named types seen while resolving, in first-seen order.
///
/// One registry belongs to one generation run.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    types: IndexSet<NamedType>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `ty` if it is concrete. Returns true if it was not seen before.
    pub fn register(&mut self, ty: &NamedType) -> bool {
        ty.is_concrete() && self.types.insert(ty.clone())
    }

    pub fn contains(&self, ty: &NamedType) -> bool {
        self.types.contains(ty)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NamedType> {
        self.types.iter()
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

/// Resolves type references against a [`TypeTable`].
///
/// Names missing from the table are model references and are qualified with
/// the namespace the model module is imported under (`TYPE.User`). An empty
/// namespace yields bare simple names, as used inside the model module.
#[derive(Debug, Clone)]
pub struct TypeResolver {
    table: TypeTable,
    namespace: String,
}

impl TypeResolver {
    pub fn new(table: TypeTable, namespace: impl Into<String>) -> Self {
        Self {
            table,
            namespace: namespace.into(),
        }
    }

    pub fn table(&self) -> &TypeTable {
        &self.table
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// The same table with a different namespace.
    pub fn with_namespace(&self, namespace: impl Into<String>) -> Self {
        Self::new(self.table.clone(), namespace)
    }

    /// Render `ty` as a TypeScript type expression.
    ///
    /// Arguments are resolved depth-first, left to right, before the raw
    /// name. Every concrete named type on the way is recorded in `registry`.
    pub fn resolve(&self, ty: &TypeRef, registry: &mut TypeRegistry) -> String {
        match ty {
            TypeRef::Named(named) => {
                registry.register(named);
                match self.table.get(named.simple_name()) {
                    Some(template) => template.replace(ARG_PLACEHOLDER, DEFAULT_ARG),
                    None => self.qualify(named.simple_name()),
                }
            }
            TypeRef::Generic { raw, args } => {
                let args = args
                    .iter()
                    .map(|arg| self.resolve(arg, registry))
                    .collect::<Vec<_>>()
                    .join(", ");
                registry.register(raw);
                match self.table.get(raw.simple_name()) {
                    Some(template) => template.replace(ARG_PLACEHOLDER, &args),
                    None => format!("{}<{}>", self.qualify(raw.simple_name()), args),
                }
            }
        }
    }

    fn qualify(&self, simple_name: &str) -> String {
        if self.namespace.is_empty() {
            simple_name.to_string()
        } else {
            format!("{}.{}", self.namespace, simple_name)
        }
    }
}

impl Default for TypeResolver {
    fn default() -> Self {
        Self::new(TypeTable::builtin(), "TYPE")
    }
}
