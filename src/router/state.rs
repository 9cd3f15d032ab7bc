use crate::enums::{NavigationMode, NavigationOrigin};
use crate::history::Location;
use crate::path::{normalize_path, split_segments};
use crate::query::SearchParams;
use crate::registry::RouteRegistry;
use crate::types::{RouteId, RouteMatch, RouteParams};
use bitflags::bitflags;
use serde::Serialize;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum MatchedRoute {
    Route(RouteId),
    Unmatched,
}

/// Decomposition of one URL. Always derived as a whole from a `Location`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedRoute {
    pathname: String,
    segments: Vec<String>,
    params: RouteParams,
    search_params: SearchParams,
    matched: MatchedRoute,
}

impl ParsedRoute {
    /// Route used when no history is attached: `/`, nothing matched.
    pub fn empty() -> Self {
        Self {
            pathname: "/".to_string(),
            segments: Vec::new(),
            params: RouteParams::new(),
            search_params: SearchParams::new(),
            matched: MatchedRoute::Unmatched,
        }
    }

    #[tracing::instrument(level = "trace", skip_all, fields(pathname = %location.pathname))]
    pub fn derive(registry: &RouteRegistry, location: &Location) -> Self {
        let options = registry.options();
        let pathname = normalize_path(&location.pathname, &options.normalization())
            .unwrap_or_else(|_| location.pathname.clone());
        let segments = split_segments(&pathname)
            .into_iter()
            .map(str::to_string)
            .collect();

        let (matched, params) = match registry.find(&pathname) {
            RouteMatch::Matched { id, params } => (MatchedRoute::Route(id), params),
            RouteMatch::Unmatched => (MatchedRoute::Unmatched, RouteParams::new()),
        };

        Self {
            pathname,
            segments,
            params,
            search_params: SearchParams::parse(&location.search),
            matched,
        }
    }

    pub fn pathname(&self) -> &str {
        &self.pathname
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn params(&self) -> &RouteParams {
        &self.params
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn search_params(&self) -> &SearchParams {
        &self.search_params
    }

    pub fn matched(&self) -> &MatchedRoute {
        &self.matched
    }

    pub fn route_id(&self) -> Option<&str> {
        match &self.matched {
            MatchedRoute::Route(id) => Some(id.as_str()),
            MatchedRoute::Unmatched => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.matched == MatchedRoute::Unmatched
    }

    /// Pathname plus query string, without the base path.
    pub fn href(&self) -> String {
        let query = self.search_params.to_query_string();
        if query.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, query)
        }
    }

    pub fn diff(&self, other: &ParsedRoute) -> RouteChanges {
        let mut changes = RouteChanges::empty();
        if self.pathname != other.pathname {
            changes |= RouteChanges::PATHNAME;
        }
        if self.params != other.params {
            changes |= RouteChanges::PARAMS;
        }
        if self.search_params != other.search_params {
            changes |= RouteChanges::SEARCH;
        }
        if self.matched != other.matched {
            changes |= RouteChanges::MATCH;
        }
        changes
    }
}

impl Default for ParsedRoute {
    fn default() -> Self {
        Self::empty()
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RouteChanges: u8 {
        const PATHNAME = 0b0000_0001;
        const PARAMS = 0b0000_0010;
        const SEARCH = 0b0000_0100;
        const MATCH = 0b0000_1000;
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigationIntent {
    pub target_path: String,
    pub mode: NavigationMode,
    pub origin: NavigationOrigin,
}

/// Delivered to facade subscribers once per navigation.
#[derive(Debug, Clone)]
pub struct RouteChange {
    pub route: Rc<ParsedRoute>,
    pub version: u64,
    pub changes: RouteChanges,
    pub intent: NavigationIntent,
}

impl RouteChange {
    pub fn is_noop(&self) -> bool {
        self.changes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::router::RouterOptions;

    fn registry() -> RouteRegistry {
        RouteRegistry::builder(RouterOptions::default())
            .route("user", "/users/:id")
            .unwrap()
            .seal()
    }

    #[test]
    fn derive_fills_every_field_from_location() {
        let location = Location {
            pathname: "/users/42/".to_string(),
            search: "tab=posts&tab=likes".to_string(),
            index: 3,
        };
        let route = ParsedRoute::derive(&registry(), &location);

        assert_eq!(route.pathname(), "/users/42");
        assert_eq!(route.segments(), ["users", "42"]);
        assert_eq!(route.param("id"), Some("42"));
        assert_eq!(route.search_params().get("tab"), Some("posts"));
        assert_eq!(route.route_id(), Some("user"));
        assert_eq!(route.href(), "/users/42?tab=posts");
    }

    #[test]
    fn diff_reports_only_changed_parts() {
        let registry = registry();
        let a = ParsedRoute::derive(&registry, &Location::from_path("/users/1?x=1", 0));
        let b = ParsedRoute::derive(&registry, &Location::from_path("/users/1?x=2", 1));
        let c = ParsedRoute::derive(&registry, &Location::from_path("/nowhere", 2));

        assert!(a.diff(&a.clone()).is_empty());
        assert_eq!(a.diff(&b), RouteChanges::SEARCH);
        assert!(a.diff(&c).contains(RouteChanges::MATCH | RouteChanges::PATHNAME));
        assert!(c.is_not_found());
    }
}
