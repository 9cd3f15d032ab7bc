use crate::matcher::find_route;
use crate::pattern::RoutePattern;
use crate::registry::{RegistryError, RegistryMetrics, RegistryResult};
use crate::router::RouterOptions;
use crate::types::{RouteId, RouteMatch};
use hashbrown::HashMap as FastHashMap;

/// Mutable side of the registry. Routes are matched in the order they are added.
#[derive(Debug)]
pub struct RegistryBuilder {
    options: RouterOptions,
    patterns: Vec<RoutePattern>,
    index: FastHashMap<RouteId, usize>,
    metrics: RegistryMetrics,
}

impl RegistryBuilder {
    pub fn new(options: RouterOptions) -> Self {
        Self {
            options,
            patterns: Vec::new(),
            index: FastHashMap::new(),
            metrics: RegistryMetrics::default(),
        }
    }

    pub fn add(&mut self, id: impl Into<RouteId>, template: &str) -> RegistryResult<usize> {
        let id = id.into();

        if self.patterns.len() >= self.options.max_routes {
            return Err(RegistryError::MaxRoutesExceeded {
                limit: self.options.max_routes,
                template: template.to_string(),
            });
        }

        if self.index.contains_key(&id) {
            return Err(RegistryError::DuplicateRouteId { id });
        }

        let pattern = RoutePattern::compile(id.clone(), template, self.options.case_sensitive)?;

        if let Some(earlier) = self.patterns.iter().find(|existing| {
            existing.segments().len() == pattern.segments().len()
                && existing
                    .segments()
                    .iter()
                    .zip(pattern.segments())
                    .all(|(a, b)| a.shape_eq(b))
        }) {
            tracing::warn!(
                route = %id,
                template,
                shadowed_by = earlier.id(),
                "route can never match; an earlier registration accepts the same paths"
            );
        }

        let position = self.patterns.len();
        self.metrics.record_insert(&pattern);
        self.index.insert(id, position);
        self.patterns.push(pattern);

        Ok(position)
    }

    pub fn add_bulk<I, K, T>(&mut self, entries: I) -> RegistryResult<Vec<usize>>
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<RouteId>,
        T: AsRef<str>,
    {
        entries
            .into_iter()
            .map(|(id, template)| self.add(id, template.as_ref()))
            .collect()
    }

    pub fn route(mut self, id: impl Into<RouteId>, template: &str) -> RegistryResult<Self> {
        self.add(id, template)?;
        Ok(self)
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn seal(self) -> RouteRegistry {
        tracing::debug!(
            routes = self.patterns.len(),
            catch_all = self.metrics.catch_all_routes,
            "route registry sealed"
        );

        RouteRegistry {
            options: self.options,
            patterns: self.patterns,
            index: self.index,
            metrics: self.metrics,
        }
    }
}

/// Immutable, compiled route table.
#[derive(Debug, Clone)]
pub struct RouteRegistry {
    options: RouterOptions,
    patterns: Vec<RoutePattern>,
    index: FastHashMap<RouteId, usize>,
    metrics: RegistryMetrics,
}

impl RouteRegistry {
    pub fn builder(options: RouterOptions) -> RegistryBuilder {
        RegistryBuilder::new(options)
    }

    pub fn options(&self) -> &RouterOptions {
        &self.options
    }

    pub fn patterns(&self) -> &[RoutePattern] {
        &self.patterns
    }

    pub fn get(&self, id: &str) -> Option<&RoutePattern> {
        self.index.get(id).map(|&position| &self.patterns[position])
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    pub fn metrics(&self) -> &RegistryMetrics {
        &self.metrics
    }

    /// Matches a pathname (base path already stripped). Never fails.
    pub fn find(&self, pathname: &str) -> RouteMatch {
        find_route(self, pathname)
    }
}
