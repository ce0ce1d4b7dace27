//! Behavioral properties of the generated client.

use apigen_codegen::pipeline::Pipeline;
use apigen_core::GeneratedFile;
use apigen_codegen_typescript::{
    Generator, LanguageCodegen, Strategies, TypeRegistry, TypeResolver, order_parameters,
};
use apigen_ir::{Envelopes, HttpMethod, Parameter, Requiredness, Route, SourceKind, TypeRef};
use apigen_manifest::Manifest;

const SHOP: &str = include_str!("fixtures/shop.toml");

fn generator(manifest_toml: &str) -> Generator {
    let manifest: Manifest = manifest_toml.parse().expect("Failed to parse manifest");
    let ctx = Pipeline::new().run(manifest).expect("Pipeline failed");
    Generator::from_context(ctx).expect("IR should be lowered")
}

fn ty(src: &str) -> TypeRef {
    src.parse().expect("type should parse")
}

fn resolve(src: &str) -> String {
    TypeResolver::default().resolve(&ty(src), &mut TypeRegistry::new())
}

#[test]
fn test_two_runs_are_byte_identical() {
    let first = generator(SHOP).preview();
    let second = generator(SHOP).preview();
    assert_eq!(first, second);
}

#[test]
fn test_primitive_resolution_is_pure() {
    let resolver = TypeResolver::default();
    let mut registry = TypeRegistry::new();
    for _ in 0..3 {
        assert_eq!(resolver.resolve(&ty("Integer"), &mut registry), "number");
        assert_eq!(resolver.resolve(&ty("String"), &mut registry), "string");
    }
    assert!(registry.is_empty());
}

#[test]
fn test_collection_templates_apply_recursively() {
    assert_eq!(resolve("Map<ABC, List<ABC>>"), "Map<TYPE.ABC, TYPE.ABC[]>");
    assert_eq!(resolve("Set<List<Long>>"), "number[][]");
}

#[test]
fn test_envelope_unwrapping_is_idempotent() {
    let envelopes = Envelopes::default();
    for src in [
        "ResponseEntity<com.acme.User>",
        "Mono<ResponseEntity<List<com.acme.User>>>",
        "Flux<String>",
        "List<com.acme.User>",
        "com.acme.User",
    ] {
        let declared = ty(src);
        let once = envelopes.unwrap(&declared);
        assert_eq!(envelopes.unwrap(once), once, "{}", src);
    }
}

#[test]
fn test_no_optional_before_required() {
    let requiredness = [
        Requiredness::Optional,
        Requiredness::Required,
        Requiredness::Excluded,
        Requiredness::Optional,
        Requiredness::Required,
        Requiredness::Required,
        Requiredness::Optional,
    ];
    let route = Route {
        group: "G".into(),
        name: "call".into(),
        http_method: HttpMethod::Get,
        url_template: "/".into(),
        parameters: requiredness
            .iter()
            .enumerate()
            .map(|(i, r)| Parameter::new(format!("p{}", i), SourceKind::Query, *r, ty("String")))
            .collect(),
        return_type: ty("void"),
        marker: None,
    };

    let ordered = order_parameters(&route, &Strategies::default());
    assert_eq!(ordered.len(), 6);
    let first_optional = ordered
        .iter()
        .position(|p| p.requiredness == Requiredness::Optional)
        .unwrap();
    assert!(
        ordered[first_optional..]
            .iter()
            .all(|p| p.requiredness == Requiredness::Optional)
    );
}

#[test]
fn test_url_rendering() {
    let code = generator(
        r#"
        [[routes]]
        group = "com.acme.UserController"
        name = "list"
        method = "GET"
        path = "/user"

        [[routes]]
        group = "com.acme.UserController"
        name = "get"
        method = "GET"
        path = "/user/{id}"

        [[routes.params]]
        name = "id"
        source = "path"
        type = "Long"
        "#,
    )
    .render()
    .client
    .render();

    assert!(code.contains("url: \"/user\","));
    assert!(code.contains("url: `/user/${id}`,"));
}

#[test]
fn test_unsupported_verb_renders_empty_method() {
    let manifest: Manifest = r#"
        [[routes]]
        group = "com.acme.UserController"
        name = "patch"
        method = "PATCH"
        path = "/user"
    "#
    .parse()
    .unwrap();
    let ctx = Pipeline::new().run(manifest).expect("warnings do not fail the run");
    assert_eq!(ctx.warning_count(), 1);

    let code = Generator::from_context(ctx).unwrap().render().client.render();
    assert!(code.contains("method: \"\""));
}

#[test]
fn test_name_collision_fails_by_default() {
    let content = r#"
        [[routes]]
        group = "G"
        name = "get"
        method = "GET"
        returns = "com.acme.billing.Item"

        [[routes.params]]
        name = "item"
        source = "body"
        type = "com.acme.catalog.Item"
    "#;

    let manifest: Manifest = content.parse().unwrap();
    assert!(Pipeline::new().run(manifest).is_err());

    let allowed = format!("[generator]\nallow_name_collisions = true\n{}", content);
    let model = generator(&allowed).render().model.render();
    assert_eq!(model, "export interface Item {}\n");
}

#[test]
fn test_table_mapped_names_never_collide() {
    let output = generator(
        r#"
        [[routes]]
        group = "com.acme.EventController"
        name = "since"
        method = "GET"
        path = "/events"
        returns = "java.util.Date"

        [[routes.params]]
        name = "from"
        source = "query"
        type = "java.sql.Date"
        "#,
    )
    .render();

    assert!(output.client.render().contains("since(from:Date): Promise<Date> {"));
    assert_eq!(output.model.declaration_count(), 0);
}

#[test]
fn test_undeclared_generic_model_keeps_its_arity() {
    let output = generator(
        r#"
        [[routes]]
        group = "com.acme.UserController"
        name = "page"
        method = "GET"
        path = "/user"
        returns = "com.acme.Page<com.acme.User>"
        "#,
    )
    .render();

    assert!(output.client.render().contains("page(): Promise<TYPE.Page<TYPE.User>> {"));
    let model = output.model.render();
    assert!(model.contains("export interface Page<T0> {}"));
    assert!(model.contains("export interface User {}"));
}
