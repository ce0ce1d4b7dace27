use std::path::PathBuf;

use apigen_ir::{Envelopes, NamedType, TypeRef};
use serde::Deserialize;

/// `[generator]` section
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Directory the client and model modules are written to
    pub output: PathBuf,

    /// Name of the abstract requester class
    pub requester: String,

    /// Model module file name, without extension
    pub model_file: String,

    /// Namespace the model module is imported under
    pub model_namespace: String,

    /// Replace a generic return type by its first argument before unwrapping
    pub unwrap_first_generic: bool,

    /// Raw names stripped from return types
    pub envelopes: Vec<String>,

    /// Route markers that are generated; routes with another marker are skipped
    pub markers: Vec<String>,

    /// Groups left out of the client
    pub exclude_groups: Vec<String>,

    /// Types left out of the model module and parameter lists
    pub exclude_types: Vec<String>,

    /// Types declared in the model module even if no route references them
    pub extra_models: Vec<TypeRef>,

    /// Report distinct types sharing a simple name as a warning instead of an error
    pub allow_name_collisions: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output: PathBuf::from("."),
            requester: "Requester".into(),
            model_file: "api.model".into(),
            model_namespace: "TYPE".into(),
            unwrap_first_generic: false,
            envelopes: ["ResponseEntity", "Mono", "Flux"].map(String::from).into(),
            markers: ["GetMapping", "PostMapping", "PutMapping", "DeleteMapping"]
                .map(String::from)
                .into(),
            exclude_groups: Vec::new(),
            exclude_types: vec!["ResponseEntity".into()],
            extra_models: Vec::new(),
            allow_name_collisions: false,
        }
    }
}

impl GeneratorConfig {
    /// File name of the client module.
    pub fn client_file_name(&self) -> String {
        format!("{}.ts", self.requester.to_lowercase())
    }

    /// File name of the model module.
    pub fn model_file_name(&self) -> String {
        format!("{}.ts", self.model_file)
    }

    /// Envelope set used to unwrap return types.
    pub fn envelopes(&self) -> Envelopes {
        Envelopes::new(self.envelopes.iter().cloned())
    }

    /// Returns true if `ty` is listed in `exclude_types`.
    pub fn is_type_excluded(&self, ty: &NamedType) -> bool {
        self.exclude_types.iter().any(|pattern| ty.matches(pattern))
    }

    /// Returns true if routes with `marker` are generated.
    ///
    /// Routes without a marker are always generated.
    pub fn accepts_marker(&self, marker: Option<&str>) -> bool {
        marker.is_none_or(|m| self.markers.iter().any(|known| known == m))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        let config = GeneratorConfig::default();
        assert_eq!(config.client_file_name(), "requester.ts");
        assert_eq!(config.model_file_name(), "api.model.ts");

        let config = GeneratorConfig {
            requester: "HttpRequester".into(),
            ..Default::default()
        };
        assert_eq!(config.client_file_name(), "httprequester.ts");
    }

    #[test]
    fn test_accepts_marker() {
        let config = GeneratorConfig::default();
        assert!(config.accepts_marker(None));
        assert!(config.accepts_marker(Some("GetMapping")));
        assert!(!config.accepts_marker(Some("RequestMapping")));
    }

    #[test]
    fn test_type_exclusion() {
        let config = GeneratorConfig::default();
        assert!(config.is_type_excluded(&NamedType::new(
            "org.springframework.http.ResponseEntity"
        )));
        assert!(!config.is_type_excluded(&NamedType::new("com.acme.User")));
    }

    #[test]
    fn test_extra_models_parse_as_types() {
        let config: GeneratorConfig =
            toml::from_str("extra_models = [\"com.acme.Audit\", \"List<com.acme.Tag>\"]").unwrap();
        assert_eq!(config.extra_models[0], TypeRef::named("com.acme.Audit"));
        assert!(config.extra_models[1].is_generic());
    }

    #[test]
    fn test_partial_section_keeps_defaults() {
        let config: GeneratorConfig = toml::from_str("requester = \"Http\"").unwrap();
        assert_eq!(config.requester, "Http");
        assert_eq!(config.envelopes, vec!["ResponseEntity", "Mono", "Flux"]);
        assert_eq!(config.exclude_types, vec!["ResponseEntity"]);
    }
}
