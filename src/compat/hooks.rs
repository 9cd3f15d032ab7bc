use crate::compat::{RouteValue, RouterHandle};
use crate::query::SearchParams;
use crate::router::{ParsedRoute, Router};

pub fn use_router(router: &Router) -> RouterHandle {
    RouterHandle::new(router.clone())
}

pub fn use_pathname(router: &Router) -> RouteValue<String> {
    RouteValue::new(router, |route| route.pathname().to_string())
}

pub fn use_segments(router: &Router) -> RouteValue<Vec<String>> {
    RouteValue::new(router, |route| route.segments().to_vec())
}

/// Query parameters with the matched route's parameters laid over them.
pub fn use_local_search_params(router: &Router) -> RouteValue<SearchParams> {
    RouteValue::new(router, merged_params)
}

/// Same view as `use_local_search_params`; there is a single navigator, so the
/// focused route is always the global one.
pub fn use_global_search_params(router: &Router) -> RouteValue<SearchParams> {
    RouteValue::new(router, merged_params)
}

fn merged_params(route: &ParsedRoute) -> SearchParams {
    let mut merged = route.search_params().clone();
    let mut names: Vec<&String> = route.params().keys().collect();
    names.sort_unstable();
    for name in names {
        merged.insert(name.as_str(), route.params()[name].as_str());
    }
    merged
}
