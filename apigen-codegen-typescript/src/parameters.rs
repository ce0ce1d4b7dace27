//! Parameter ordering and parameter-list rendering.

use apigen_ir::{Parameter, Requiredness, Route};

use crate::{
    resolver::{TypeRegistry, TypeResolver},
    strategies::Strategies,
};

/// A parameter that made it into the signature.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignatureParam<'a> {
    pub param: &'a Parameter,
    pub requiredness: Requiredness,
}

/// Drop excluded parameters and move required ones before optional ones,
/// keeping declaration order within each class.
pub fn order_parameters<'a>(route: &'a Route, strategies: &Strategies) -> Vec<SignatureParam<'a>> {
    let mut params: Vec<SignatureParam<'a>> = route
        .parameters
        .iter()
        .map(|param| SignatureParam {
            param,
            requiredness: (strategies.requiredness)(param),
        })
        .filter(|p| p.requiredness != Requiredness::Excluded)
        .collect();

    // sort_by_key is stable
    params.sort_by_key(|p| p.requiredness);
    params
}

/// A copy of `route` whose parameters carry the requiredness chosen by the
/// strategy, so call-site rules skip exactly what the signature skips.
pub fn with_effective_requiredness(route: &Route, strategies: &Strategies) -> Route {
    let mut effective = route.clone();
    for param in &mut effective.parameters {
        param.requiredness = (strategies.requiredness)(param);
    }
    effective
}

/// The parameter list of a route's method signature, joined with `", "`.
pub fn render_parameter_list(
    route: &Route,
    strategies: &Strategies,
    resolver: &TypeResolver,
    registry: &mut TypeRegistry,
) -> String {
    order_parameters(route, strategies)
        .into_iter()
        .map(|p| {
            let ty = (strategies.type_namer)(resolver, &p.param.ty, registry);
            (strategies.parameter)(p.param, p.requiredness, &ty)
        })
        .collect::<Vec<_>>()
        .join(", ")
}
