//! Table of well-known type names and their target templates.

use apigen_manifest::Manifest;
use indexmap::IndexMap;

/// Mapping from well-known simple names to TypeScript templates.
///
/// A template may contain `{}`, replaced by the resolved argument list
/// (`List` maps to `{}[]`, so `List<String>` becomes `string[]`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
    entries: IndexMap<String, String>,
}

impl TypeTable {
    /// The built-in table.
    pub fn builtin() -> Self {
        let entries = [
            ("boolean", "boolean"),
            ("Boolean", "boolean"),
            ("Long", "number"),
            ("Integer", "number"),
            ("int", "number"),
            ("long", "number"),
            ("Double", "number"),
            ("double", "number"),
            ("BigDecimal", "number"),
            ("BigInteger", "number"),
            ("String", "string"),
            ("Date", "Date"),
            ("List", "{}[]"),
            ("ArrayList", "{}[]"),
            ("Set", "{}[]"),
            ("HashSet", "{}[]"),
            ("Map", "Map<{}>"),
            ("HashMap", "Map<{}>"),
            ("Object", "any"),
            ("Void", "void"),
            ("void", "void"),
        ];

        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }

    /// The built-in table extended with the manifest's `[types]` mappings.
    pub fn for_manifest(manifest: &Manifest) -> Self {
        let mut table = Self::builtin();
        table.extend(manifest.types.iter().map(|(k, v)| (k.as_str(), v.as_str())));
        table
    }

    /// Add or replace entries, keeping the position of replaced ones.
    pub fn extend<K, V>(&mut self, entries: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<String>,
    {
        for (name, template) in entries {
            self.entries.insert(name.into(), template.into());
        }
    }

    pub fn get(&self, simple_name: &str) -> Option<&str> {
        self.entries.get(simple_name).map(String::as_str)
    }

    pub fn contains(&self, simple_name: &str) -> bool {
        self.entries.contains_key(simple_name)
    }
}

impl Default for TypeTable {
    fn default() -> Self {
        Self::builtin()
    }
}
