//! TypeScript client generator.

use std::path::Path;

use apigen_codegen::{
    TypeTable,
    language::{LanguageCodegen, PreviewFile},
    pipeline::CompilationContext,
};
use apigen_core::{GeneratedFile, WriteReport};
use apigen_ir::{ClientIR, NamedType, TypeRef};
use apigen_manifest::{GeneratorConfig, Manifest, ModelDecl};
use eyre::Result;
use indexmap::IndexMap;

use crate::{
    collector::ReferencedTypes,
    files::{ClientTs, ModelTs},
    model::{InterfaceEmitter, ModelContext, ModelEmitter},
    resolver::{TypeRegistry, TypeResolver},
    strategies::Strategies,
    synthesizer::{ClientOptions, ClientSynthesizer},
};

/// Output of one generation run.
pub struct GeneratedClient {
    pub client: ClientTs,
    pub model: ModelTs,
    /// Types handed to the model emitter.
    pub referenced: Vec<TypeRef>,
}

/// TypeScript generator producing the client and model modules.
pub struct Generator {
    ir: ClientIR,
    config: GeneratorConfig,
    models: IndexMap<String, ModelDecl>,
    resolver: TypeResolver,
    strategies: Strategies,
    emitter: Box<dyn ModelEmitter>,
}

impl LanguageCodegen for Generator {
    fn language(&self) -> &'static str {
        "typescript"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn preview(&self) -> Vec<PreviewFile> {
        let output = self.render();
        vec![
            PreviewFile {
                path: output.client.file_name().to_string(),
                content: output.client.contents(),
            },
            PreviewFile {
                path: output.model.file_name().to_string(),
                content: output.model.contents(),
            },
        ]
    }

    fn generate(&self, output_dir: &Path) -> WriteReport {
        let output = self.render();
        let mut report = WriteReport::new();
        report.attempt(&output.client, output_dir);
        report.attempt(&output.model, output_dir);
        report
    }
}

impl Generator {
    /// Create a generator for `ir` using the settings of `manifest`.
    pub fn new(ir: ClientIR, manifest: &Manifest) -> Self {
        let table = TypeTable::for_manifest(manifest);

        Self {
            ir,
            resolver: TypeResolver::new(table, &manifest.generator.model_namespace),
            config: manifest.generator.clone(),
            models: manifest.models.clone(),
            strategies: Strategies::default(),
            emitter: Box::new(InterfaceEmitter),
        }
    }

    /// Create a generator from a pipeline context that went through lowering.
    pub fn from_context(mut ctx: CompilationContext) -> Result<Self> {
        let ir = ctx.take_ir()?;
        Ok(Self::new(ir, &ctx.manifest))
    }

    /// Replace the rendering rules.
    pub fn with_strategies(mut self, strategies: Strategies) -> Self {
        self.strategies = strategies;
        self
    }

    /// Replace the model emitter.
    pub fn with_model_emitter(mut self, emitter: impl ModelEmitter + 'static) -> Self {
        self.emitter = Box::new(emitter);
        self
    }

    pub fn ir(&self) -> &ClientIR {
        &self.ir
    }

    /// Render both modules.
    pub fn render(&self) -> GeneratedClient {
        let options = ClientOptions {
            requester: self.config.requester.clone(),
            model_module: format!("./{}", self.config.model_file),
            envelopes: self.config.envelopes(),
            unwrap_first_generic: self.config.unwrap_first_generic,
        };

        let mut referenced = ReferencedTypes::new();
        let mut registry = TypeRegistry::new();
        let client_code = ClientSynthesizer::new(&self.resolver, &self.strategies, &options)
            .synthesize(&self.ir, &mut referenced, &mut registry);
        referenced.extend(&self.ir.extra_models);

        let is_excluded = |ty: &NamedType| self.config.is_type_excluded(ty);
        let types = referenced.finish(&registry, &is_excluded);

        let ctx = ModelContext {
            resolver: self.resolver.with_namespace(""),
            models: &self.models,
            is_excluded: &is_excluded,
        };
        let model_code = self.emitter.emit(&types, &ctx);

        tracing::debug!(
            groups = self.ir.groups.len(),
            routes = self.ir.route_count(),
            referenced = types.len(),
            "rendered typescript client"
        );

        GeneratedClient {
            client: ClientTs::new(self.config.client_file_name(), client_code),
            model: ModelTs::new(self.config.model_file_name(), model_code),
            referenced: types,
        }
    }
}
