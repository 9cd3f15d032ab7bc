use crate::errors::RouterResult;
use crate::history::{HistoryBackend, HistoryBridge, MemoryHistory};
use crate::registry::RouteRegistry;
use crate::router::{Router, RouterOptions};
use crate::types::RouteId;

#[derive(Default)]
enum HistorySource {
    #[default]
    Detect,
    Detached,
    Memory(MemoryHistory),
    Backend(Box<dyn HistoryBackend>),
}

/// Collects options and route templates, then compiles them into a [`Router`].
#[derive(Default)]
pub struct RouterBuilder {
    options: RouterOptions,
    routes: Vec<(RouteId, String)>,
    history: HistorySource,
}

impl RouterBuilder {
    pub fn options(mut self, options: RouterOptions) -> Self {
        self.options = options;
        self
    }

    pub fn route(mut self, id: impl Into<RouteId>, template: impl Into<String>) -> Self {
        self.routes.push((id.into(), template.into()));
        self
    }

    pub fn routes<I, K, T>(mut self, routes: I) -> Self
    where
        I: IntoIterator<Item = (K, T)>,
        K: Into<RouteId>,
        T: Into<String>,
    {
        self.routes
            .extend(routes.into_iter().map(|(id, template)| (id.into(), template.into())));
        self
    }

    pub fn memory_history(mut self, history: MemoryHistory) -> Self {
        self.history = HistorySource::Memory(history);
        self
    }

    pub fn backend(mut self, backend: Box<dyn HistoryBackend>) -> Self {
        self.history = HistorySource::Backend(backend);
        self
    }

    pub fn detached(mut self) -> Self {
        self.history = HistorySource::Detached;
        self
    }

    pub fn build(self) -> RouterResult<Router> {
        self.options.validate()?;
        let base_path = self.options.base_path()?;

        let mut registry = RouteRegistry::builder(self.options);
        for (id, template) in self.routes {
            registry.add(id, &template)?;
        }

        let bridge = match self.history {
            HistorySource::Detect => HistoryBridge::detect(base_path),
            HistorySource::Detached => HistoryBridge::detached(base_path),
            HistorySource::Memory(history) => HistoryBridge::memory(history, base_path),
            HistorySource::Backend(backend) => HistoryBridge::new(backend, base_path),
        };

        Ok(Router::new(registry.seal(), bridge))
    }
}
