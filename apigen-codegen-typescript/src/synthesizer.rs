//! Client module synthesis: requester contract, aggregator and group classes.

use apigen_ir::{ClientIR, Envelopes, GroupIR, Route};

use crate::{
    ast::{Class, Constructor, Import, Method},
    code_file::CodeFile,
    collector::ReferencedTypes,
    parameters::{order_parameters, render_parameter_list, with_effective_requiredness},
    resolver::{TypeRegistry, TypeResolver},
    strategies::Strategies,
};

/// Signature of the requester's single capability.
const REQUEST_PARAM: &str =
    "param: { method: string; url: string; queryParams: any; body: any; returnVoid?: boolean }";

/// Settings the synthesizer needs besides the IR.
#[derive(Debug, Clone)]
pub struct ClientOptions {
    /// Name of the abstract requester class.
    pub requester: String,
    /// Module specifier of the model module, e.g. `./api.model`.
    pub model_module: String,
    pub envelopes: Envelopes,
    pub unwrap_first_generic: bool,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            requester: "Requester".into(),
            model_module: "./api.model".into(),
            envelopes: Envelopes::default(),
            unwrap_first_generic: false,
        }
    }
}

/// Builds the client module from the IR.
pub struct ClientSynthesizer<'a> {
    resolver: &'a TypeResolver,
    strategies: &'a Strategies,
    options: &'a ClientOptions,
}

impl<'a> ClientSynthesizer<'a> {
    pub fn new(
        resolver: &'a TypeResolver,
        strategies: &'a Strategies,
        options: &'a ClientOptions,
    ) -> Self {
        Self {
            resolver,
            strategies,
            options,
        }
    }

    /// Name of the aggregator class, e.g. `ApiRequester`.
    pub fn root_class_name(&self) -> String {
        format!("Api{}", self.options.requester)
    }

    /// Render the client module.
    ///
    /// Parameter types and unwrapped return types are added to `referenced`;
    /// concrete types met during resolution go to `registry`.
    pub fn synthesize(
        &self,
        ir: &ClientIR,
        referenced: &mut ReferencedTypes,
        registry: &mut TypeRegistry,
    ) -> CodeFile {
        let groups: Vec<Class> = ir
            .groups
            .iter()
            .map(|group| self.group_class(group, referenced, registry))
            .collect();

        CodeFile::new()
            .import(Import::namespace(
                self.resolver.namespace(),
                &self.options.model_module,
            ))
            .add(self.requester_class())
            .add(self.root_class(ir))
            .add_all(groups)
    }

    fn constructor_params(&self) -> String {
        format!("private requester: {}", self.options.requester)
    }

    fn requester_class(&self) -> Class {
        Class::new(&self.options.requester).abstract_().method(
            Method::new("request", REQUEST_PARAM)
                .returns("Promise<any>")
                .abstract_(),
        )
    }

    fn root_class(&self, ir: &ClientIR) -> Class {
        let mut class = Class::new(self.root_class_name());
        let mut constructor = Constructor::new(self.constructor_params());

        for group in &ir.groups {
            let class_name = group.simple_name();
            let member = (self.strategies.member_namer)(class_name);
            constructor = constructor.body_line(format!(
                "this.{} = new {}(this.requester);",
                member, class_name
            ));
            class = class.field(member, class_name);
        }

        class.constructor(constructor)
    }

    fn group_class(
        &self,
        group: &GroupIR,
        referenced: &mut ReferencedTypes,
        registry: &mut TypeRegistry,
    ) -> Class {
        let class = Class::new(group.simple_name())
            .constructor(Constructor::new(self.constructor_params()));

        group.routes.iter().fold(class, |class, route| {
            class.method(self.route_method(route, referenced, registry))
        })
    }

    fn route_method(
        &self,
        route: &Route,
        referenced: &mut ReferencedTypes,
        registry: &mut TypeRegistry,
    ) -> Method {
        let strategies = self.strategies;

        for param in order_parameters(route, strategies) {
            referenced.add(&param.param.ty);
        }
        let params = render_parameter_list(route, strategies, self.resolver, registry);

        let payload = self
            .options
            .envelopes
            .payload(&route.return_type, self.options.unwrap_first_generic);
        referenced.add(payload);
        let resolved = (strategies.type_namer)(self.resolver, payload, registry);
        let return_void = if resolved == "void" {
            ", returnVoid: true"
        } else {
            ""
        };

        let call_site = with_effective_requiredness(route, strategies);
        let call = format!(
            "return this.requester.request({{ method: \"{}\", url: {}, queryParams: {}, body: {}{} }});",
            (strategies.http_method)(&call_site),
            (strategies.url)(&call_site),
            (strategies.query_params)(&call_site),
            (strategies.body)(&call_site),
            return_void,
        );

        Method::new(&route.name, params)
            .returns((strategies.returns)(&resolved))
            .body_line(call)
    }
}
