use crate::pattern::RoutePattern;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RegistryMetrics {
    pub total_routes_registered: usize,
    pub static_routes: usize,
    pub catch_all_routes: usize,
}

impl RegistryMetrics {
    pub fn record_insert(&mut self, pattern: &RoutePattern) {
        self.total_routes_registered += 1;
        if pattern.is_static() {
            self.static_routes += 1;
        }
        if pattern.has_catch_all() {
            self.catch_all_routes += 1;
        }
    }

    pub fn dynamic_routes(&self) -> usize {
        self.total_routes_registered - self.static_routes
    }
}
