use crate::query::ParamsPatch;
use crate::router::Router;

/// Imperative navigation handle returned by `use_router`.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    router: Router,
}

impl RouterHandle {
    pub(crate) fn new(router: Router) -> Self {
        Self { router }
    }

    pub fn push(&self, href: &str) {
        self.router.navigate(href);
    }

    pub fn navigate(&self, href: &str) {
        self.router.navigate(href);
    }

    /// A query-only `href` swaps the whole query string; use `set_params` to merge.
    pub fn replace(&self, href: &str) {
        self.router.replace(href);
    }

    pub fn back(&self) {
        self.router.back();
    }

    pub fn can_go_back(&self) -> bool {
        self.router.can_go_back()
    }

    pub fn set_params(&self, patch: &ParamsPatch) {
        self.router.set_params(patch);
    }
}
