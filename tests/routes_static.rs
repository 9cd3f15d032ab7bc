use shell_router::registry::RegistryError;
use shell_router::{RouteMatch, RouteRegistry, RouterOptions};

fn registry(routes: &[(&str, &str)]) -> RouteRegistry {
    let mut builder = RouteRegistry::builder(RouterOptions::default());
    for (id, template) in routes {
        builder.add(*id, template).expect("route should register");
    }
    builder.seal()
}

#[test]
fn registry_when_root_registered_then_matches_root() {
    let registry = registry(&[("home", "/")]);
    assert_eq!(registry.find("/").id(), Some("home"));
    assert_eq!(registry.find("").id(), Some("home"));
}

#[test]
fn registry_when_static_route_registered_then_matches_exact_path() {
    let registry = registry(&[("about", "/about"), ("team", "/about/team")]);

    assert_eq!(registry.find("/about").id(), Some("about"));
    assert_eq!(registry.find("/about/team").id(), Some("team"));
    assert_eq!(registry.find("/about/team/x"), RouteMatch::Unmatched);
}

#[test]
fn registry_when_trailing_or_duplicate_slashes_then_normalizes() {
    let registry = registry(&[("team", "/about/team")]);
    assert_eq!(registry.find("/about/team/").id(), Some("team"));
    assert_eq!(registry.find("//about///team").id(), Some("team"));
}

#[test]
fn registry_when_strict_trailing_slash_then_rejects_trailing_slash() {
    let options = RouterOptions::builder()
        .strict_trailing_slash(true)
        .build()
        .expect("options should validate");
    let registry = RouteRegistry::builder(options)
        .route("about", "/about")
        .expect("route should register")
        .seal();

    assert_eq!(registry.find("/about").id(), Some("about"));
    assert_eq!(registry.find("/about/"), RouteMatch::Unmatched);
}

#[test]
fn registry_when_case_sensitive_then_literal_case_must_match() {
    let registry = registry(&[("about", "/About")]);
    assert!(registry.find("/About").is_matched());
    assert!(!registry.find("/about").is_matched());
}

#[test]
fn registry_when_case_insensitive_then_literal_case_is_folded() {
    let options = RouterOptions::builder()
        .case_sensitive(false)
        .build()
        .expect("options should validate");
    let registry = RouteRegistry::builder(options)
        .route("about", "/About")
        .expect("route should register")
        .seal();

    assert_eq!(registry.find("/ABOUT").id(), Some("about"));
    assert_eq!(registry.find("/about").id(), Some("about"));
}

#[test]
fn registry_when_nothing_matches_then_returns_unmatched_sentinel() {
    let registry = registry(&[("home", "/")]);
    let found = registry.find("/missing");
    assert_eq!(found, RouteMatch::Unmatched);
    assert!(found.params().is_none());
}

#[test]
fn registry_when_route_id_reused_then_returns_error() {
    let mut builder = RouteRegistry::builder(RouterOptions::default());
    builder.add("home", "/").expect("first route should register");

    match builder.add("home", "/home").expect_err("expected duplicate id error") {
        RegistryError::DuplicateRouteId { id } => assert_eq!(id, "home"),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn registry_when_route_limit_reached_then_returns_error() {
    let options = RouterOptions::builder()
        .max_routes(2)
        .build()
        .expect("options should validate");
    let mut builder = RouteRegistry::builder(options);
    builder.add("a", "/a").expect("route should register");
    builder.add("b", "/b").expect("route should register");

    match builder.add("c", "/c").expect_err("expected max routes error") {
        RegistryError::MaxRoutesExceeded { limit, template } => {
            assert_eq!(limit, 2);
            assert_eq!(template, "/c");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn registry_when_bulk_added_then_positions_follow_input_order() {
    let mut builder = RouteRegistry::builder(RouterOptions::default());
    let positions = builder
        .add_bulk([("home", "/"), ("about", "/about"), ("user", "/users/:id")])
        .expect("bulk add should succeed");
    assert_eq!(positions, vec![0, 1, 2]);

    let registry = builder.seal();
    assert_eq!(registry.position("user"), Some(2));
    assert_eq!(registry.metrics().static_routes, 2);
    assert_eq!(registry.metrics().dynamic_routes(), 1);
    assert_eq!(
        registry.get("about").map(|pattern| pattern.template()),
        Some("/about")
    );
}
