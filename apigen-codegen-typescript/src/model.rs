//! Model module emission.

use std::collections::{HashMap, HashSet, VecDeque};

use apigen_ir::{NamedType, TypeRef};
use apigen_manifest::ModelDecl;
use indexmap::IndexMap;

use crate::{
    ast::{Interface, InterfaceField},
    code_file::CodeFile,
    resolver::{TypeRegistry, TypeResolver},
};

/// What a model emitter can see besides the referenced types.
pub struct ModelContext<'a> {
    /// Resolver without a namespace, for use inside the model module.
    pub resolver: TypeResolver,
    /// Declared models keyed by type identity.
    pub models: &'a IndexMap<String, ModelDecl>,
    /// Types left out of the model module.
    pub is_excluded: &'a dyn Fn(&NamedType) -> bool,
}

/// Turns the referenced types of a run into the model module.
pub trait ModelEmitter {
    fn emit(&self, types: &[TypeRef], ctx: &ModelContext<'_>) -> CodeFile;
}

/// Emits one `export interface` per model name.
///
/// Only concrete types become interfaces; table-mapped names and excluded
/// types are skipped. Types sharing a simple name share one interface, built
/// from the first of them that has a declaration. Field types of declared
/// models are followed, so nested models are emitted too. An undeclared type
/// used with type arguments gets placeholder parameters `T0, T1, ...` so the
/// client's `Page<User>` still typechecks against it.
#[derive(Debug, Clone, Copy, Default)]
pub struct InterfaceEmitter;

/// Model types grouped by simple name, plus the widest generic use of each.
struct Buckets<'t> {
    by_name: IndexMap<&'t str, Vec<&'t NamedType>>,
    arity: HashMap<&'t str, usize>,
}

impl Buckets<'_> {
    fn arity_of(&self, identities: &[&NamedType]) -> usize {
        identities
            .iter()
            .filter_map(|ty| self.arity.get(ty.identity()))
            .copied()
            .max()
            .unwrap_or(0)
    }
}

/// Record the argument count of every generic instantiation inside `ty`.
fn record_arity<'t>(ty: &'t TypeRef, arity: &mut HashMap<&'t str, usize>) {
    if let TypeRef::Generic { raw, args } = ty {
        let seen = arity.entry(raw.identity()).or_default();
        *seen = (*seen).max(args.len());
        for arg in args {
            record_arity(arg, arity);
        }
    }
}

impl InterfaceEmitter {
    /// Concrete model types grouped by simple name, in first-seen order.
    fn buckets<'t>(&self, types: &'t [TypeRef], ctx: &'t ModelContext<'_>) -> Buckets<'t> {
        let mut arity: HashMap<&str, usize> = HashMap::new();
        for ty in types {
            record_arity(ty, &mut arity);
        }

        let mut queue: VecDeque<&NamedType> = types.iter().flat_map(TypeRef::named_types).collect();
        let mut seen: HashSet<&str> = HashSet::new();
        let mut by_name: IndexMap<&str, Vec<&NamedType>> = IndexMap::new();

        while let Some(ty) = queue.pop_front() {
            if !ty.is_concrete()
                || ctx.resolver.table().contains(ty.simple_name())
                || (ctx.is_excluded)(ty)
                || !seen.insert(ty.identity())
            {
                continue;
            }

            by_name.entry(ty.simple_name()).or_default().push(ty);

            if let Some(model) = ctx.models.get(ty.identity()) {
                for field in &model.fields {
                    record_arity(&field.ty, &mut arity);
                    queue.extend(field.ty.named_types());
                }
            }
        }

        Buckets { by_name, arity }
    }

    fn interface(
        &self,
        name: &str,
        identities: &[&NamedType],
        arity: usize,
        ctx: &ModelContext<'_>,
        registry: &mut TypeRegistry,
    ) -> Interface {
        let declared = identities
            .iter()
            .find_map(|ty| ctx.models.get(ty.identity()));

        let Some(model) = declared else {
            return (0..arity).fold(Interface::new(name), |i, n| {
                i.type_param(format!("T{}", n))
            });
        };

        let interface = model
            .type_params
            .iter()
            .fold(Interface::new(name), |i, param| i.type_param(param));

        model.fields.iter().fold(interface, |i, field| {
            let mut decl = InterfaceField::new(&field.name, ctx.resolver.resolve(&field.ty, registry));
            if field.optional {
                decl = decl.optional();
            }
            i.field_with(decl)
        })
    }
}

impl ModelEmitter for InterfaceEmitter {
    fn emit(&self, types: &[TypeRef], ctx: &ModelContext<'_>) -> CodeFile {
        let mut registry = TypeRegistry::new();
        let buckets = self.buckets(types, ctx);
        let interfaces: Vec<Interface> = buckets
            .by_name
            .iter()
            .map(|(name, identities)| {
                let arity = buckets.arity_of(identities);
                self.interface(name, identities, arity, ctx, &mut registry)
            })
            .collect();

        tracing::debug!(models = interfaces.len(), "emitted model interfaces");
        CodeFile::new().add_all(interfaces)
    }
}

#[cfg(test)]
mod tests {
    use apigen_manifest::Manifest;

    use super::*;

    fn ty(src: &str) -> TypeRef {
        src.parse().expect("type should parse")
    }

    fn emit(types: &[TypeRef], manifest: &Manifest) -> String {
        let is_excluded = |t: &NamedType| manifest.generator.is_type_excluded(t);
        let ctx = ModelContext {
            resolver: TypeResolver::default().with_namespace(""),
            models: &manifest.models,
            is_excluded: &is_excluded,
        };
        InterfaceEmitter.emit(types, &ctx).render()
    }

    #[test]
    fn test_undeclared_types_are_empty_interfaces() {
        let code = emit(
            &[ty("List<com.acme.User>"), ty("String"), ty("T")],
            &Manifest::default(),
        );
        assert_eq!(code, "export interface User {}\n");
    }

    #[test]
    fn test_declared_fields_and_transitive_models() {
        let manifest: Manifest = r#"
            [models."com.acme.Order"]
            fields = [
                { name = "id", type = "Long" },
                { name = "lines", type = "List<com.acme.OrderLine>" },
                { name = "note", type = "String", optional = true },
            ]

            [models."com.acme.Page"]
            type_params = ["T"]
            fields = [{ name = "items", type = "List<T>" }, { name = "total", type = "Long" }]
        "#
        .parse()
        .expect("manifest should parse");

        let code = emit(
            &[ty("com.acme.Page<com.acme.Order>")],
            &manifest,
        );

        let expected = "\
export interface Page<T> {
  items: T[];
  total: number;
}

export interface Order {
  id: number;
  lines: OrderLine[];
  note?: string;
}

export interface OrderLine {}
";
        assert_eq!(code, expected);
    }

    #[test]
    fn test_excluded_and_table_types_skipped() {
        let code = emit(
            &[
                ty("org.springframework.http.ResponseEntity"),
                ty("java.util.List"),
                ty("com.acme.User"),
            ],
            &Manifest::default(),
        );
        assert_eq!(code, "export interface User {}\n");
    }

    #[test]
    fn test_same_simple_name_shares_one_interface() {
        let manifest: Manifest = r#"
            [models."com.acme.b.Tag"]
            fields = [{ name = "label", type = "String" }]
        "#
        .parse()
        .expect("manifest should parse");

        let code = emit(&[ty("com.acme.a.Tag"), ty("com.acme.b.Tag")], &manifest);
        assert_eq!(code, "export interface Tag {\n  label: string;\n}\n");
    }

    #[test]
    fn test_undeclared_generic_gets_placeholder_params() {
        let code = emit(
            &[
                ty("com.acme.Page<com.acme.User>"),
                ty("com.acme.Pair<String, List<com.acme.Page<Long>>>"),
            ],
            &Manifest::default(),
        );

        let expected = "\
export interface Page<T0> {}

export interface User {}

export interface Pair<T0, T1> {}
";
        assert_eq!(code, expected);
    }
}
