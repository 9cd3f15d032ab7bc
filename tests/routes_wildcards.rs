use shell_router::{RouteMatch, RouteRegistry, RouterOptions};

fn registry(routes: &[(&str, &str)]) -> RouteRegistry {
    let mut builder = RouteRegistry::builder(RouterOptions::default());
    for (id, template) in routes {
        builder.add(*id, template).expect("route should register");
    }
    builder.seal()
}

fn param<'a>(found: &'a RouteMatch, name: &str) -> Option<&'a str> {
    found.params()?.get(name).map(String::as_str)
}

#[test]
fn registry_when_bare_star_registered_then_captures_under_star() {
    let registry = registry(&[("files", "/files/*")]);
    let found = registry.find("/files/media/images/logo.png");

    assert_eq!(found.id(), Some("files"));
    assert_eq!(param(&found, "*"), Some("media/images/logo.png"));
}

#[test]
fn registry_when_named_catch_all_registered_then_joins_remaining_segments() {
    let registry = registry(&[("docs", "/docs/*path"), ("blog", "/blog/[...slug]")]);

    let found = registry.find("/docs/guide/intro");
    assert_eq!(param(&found, "path"), Some("guide/intro"));

    let found = registry.find("/blog/2024/05/hello");
    assert_eq!(found.id(), Some("blog"));
    assert_eq!(param(&found, "slug"), Some("2024/05/hello"));
}

#[test]
fn registry_when_catch_all_has_nothing_to_consume_then_does_not_match() {
    let registry = registry(&[("docs", "/docs/*path")]);
    assert_eq!(registry.find("/docs"), RouteMatch::Unmatched);
    assert_eq!(registry.find("/docs/"), RouteMatch::Unmatched);
}

#[test]
fn registry_when_catch_all_segments_encoded_then_decodes_each() {
    let registry = registry(&[("docs", "/docs/*path")]);
    let found = registry.find("/docs/a%20b/c%2Fd");
    assert_eq!(param(&found, "path"), Some("a b/c/d"));
}

#[test]
fn registry_when_catch_all_follows_params_then_both_are_captured() {
    let registry = registry(&[("tree", "/:owner/tree/*rest")]);
    let found = registry.find("/octo/tree/main/src/lib.rs");
    assert_eq!(param(&found, "owner"), Some("octo"));
    assert_eq!(param(&found, "rest"), Some("main/src/lib.rs"));
}

#[test]
fn registry_when_specific_route_precedes_catch_all_then_specific_wins() {
    let registry = registry(&[("settings", "/app/settings"), ("app", "/app/*rest")]);
    assert_eq!(registry.find("/app/settings").id(), Some("settings"));
    assert_eq!(registry.find("/app/settings/profile").id(), Some("app"));
}

#[test]
fn registry_when_catch_all_registered_first_then_shadows_later_routes() {
    let registry = registry(&[("app", "/app/*rest"), ("settings", "/app/settings")]);
    assert_eq!(registry.find("/app/settings").id(), Some("app"));
}
