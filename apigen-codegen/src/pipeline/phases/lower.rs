//! Lower phase - transforms the manifest into the client IR.
//!
//! Only routes that take part in generation are lowered: excluded groups and
//! routes with an unknown marker are dropped here, and parameters whose type
//! is excluded become `Requiredness::Excluded`.

use apigen_ir::{ClientIR, Parameter, Requiredness, Route};
use apigen_manifest::{Manifest, ParamEntry, RouteEntry};
use eyre::Result;

use crate::pipeline::{CompilationContext, Diagnostic, Phase};

/// Phase that transforms the manifest into the client IR.
pub struct LowerPhase;

impl Phase for LowerPhase {
    fn name(&self) -> &'static str {
        "lower"
    }

    fn description(&self) -> &'static str {
        "Transform the manifest into grouped route descriptors"
    }

    fn run(&self, ctx: &mut CompilationContext) -> Result<()> {
        let ir = lower_manifest(&ctx.manifest);

        let skipped = ctx.manifest.routes.len() - ir.route_count();
        if skipped > 0 {
            ctx.add_diagnostic(Diagnostic::info(
                self.name(),
                format!("{} route(s) skipped by group or marker filters", skipped),
            ));
        }

        tracing::debug!(
            groups = ir.groups.len(),
            routes = ir.route_count(),
            skipped,
            "lowered manifest"
        );
        ctx.ir = Some(ir);
        Ok(())
    }
}

/// Lower a manifest into the client IR.
fn lower_manifest(manifest: &Manifest) -> ClientIR {
    let routes = manifest
        .generated_routes()
        .map(|route| lower_route(manifest, route));

    ClientIR::from_routes(routes).with_extra_models(manifest.generator.extra_models.clone())
}

fn lower_route(manifest: &Manifest, route: &RouteEntry) -> Route {
    Route {
        group: route.group.clone(),
        name: route.name().to_string(),
        http_method: route.method.clone(),
        url_template: manifest.url_template(route),
        parameters: route
            .params
            .iter()
            .map(|param| lower_param(manifest, param))
            .collect(),
        return_type: route.returns.clone(),
        marker: route.marker.clone(),
    }
}

fn lower_param(manifest: &Manifest, param: &ParamEntry) -> Parameter {
    let requiredness = if manifest.generator.is_type_excluded(param.ty.raw()) {
        Requiredness::Excluded
    } else {
        param.declared_requiredness()
    };

    Parameter::new(param.name(), param.source, requiredness, param.ty.clone())
}
