use crate::enums::RouterPhase;
use crate::history::{HistoryBridge, HistoryEvent};
use crate::ledger::{SubscriptionId, SubscriptionLedger, dispatch};
use crate::path::{resolve_relative, split_href};
use crate::query::{ParamsPatch, SearchParams};
use crate::registry::RouteRegistry;
use crate::router::{NavigationIntent, ParsedRoute, RouteChange, RouterBuilder};
use crate::types::{RouteMatch, RouteParams};
use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type RouteListener = dyn Fn(&RouteChange);

struct RouterInner {
    registry: RouteRegistry,
    bridge: HistoryBridge,
    route: RefCell<Rc<ParsedRoute>>,
    version: Cell<u64>,
    phase: Cell<RouterPhase>,
    ledger: RefCell<SubscriptionLedger<RouteListener>>,
    bridge_subscription: Cell<Option<SubscriptionId>>,
}

impl Drop for RouterInner {
    fn drop(&mut self) {
        if let Some(id) = self.bridge_subscription.take() {
            self.bridge.unsubscribe(id);
        }
    }
}

/// The router facade. Cloning yields another handle to the same state.
#[derive(Clone)]
pub struct Router {
    inner: Rc<RouterInner>,
}

impl fmt::Debug for Router {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Router")
            .field("route", &self.inner.route.borrow())
            .field("version", &self.inner.version.get())
            .field("phase", &self.inner.phase.get())
            .field("routes", &self.inner.registry.len())
            .finish()
    }
}

impl Router {
    pub fn builder() -> RouterBuilder {
        RouterBuilder::default()
    }

    pub fn new(registry: RouteRegistry, bridge: HistoryBridge) -> Self {
        let route = match bridge.location() {
            Some(location) => ParsedRoute::derive(&registry, &location),
            None => ParsedRoute::empty(),
        };

        let router = Self {
            inner: Rc::new(RouterInner {
                registry,
                bridge,
                route: RefCell::new(Rc::new(route)),
                version: Cell::new(0),
                phase: Cell::new(RouterPhase::Idle),
                ledger: RefCell::new(SubscriptionLedger::new()),
                bridge_subscription: Cell::new(None),
            }),
        };

        let weak: Weak<RouterInner> = Rc::downgrade(&router.inner);
        let id = router.inner.bridge.subscribe(move |event| {
            if let Some(inner) = weak.upgrade() {
                Router { inner }.apply(event);
            }
        });
        router.inner.bridge_subscription.set(Some(id));

        router
    }

    pub fn route(&self) -> Rc<ParsedRoute> {
        Rc::clone(&*self.inner.route.borrow())
    }

    pub fn pathname(&self) -> String {
        self.inner.route.borrow().pathname().to_string()
    }

    pub fn segments(&self) -> Vec<String> {
        self.inner.route.borrow().segments().to_vec()
    }

    pub fn params(&self) -> RouteParams {
        self.inner.route.borrow().params().clone()
    }

    pub fn search_params(&self) -> SearchParams {
        self.inner.route.borrow().search_params().clone()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    pub fn phase(&self) -> RouterPhase {
        self.inner.phase.get()
    }

    pub fn registry(&self) -> &RouteRegistry {
        &self.inner.registry
    }

    pub fn history(&self) -> &HistoryBridge {
        &self.inner.bridge
    }

    /// Pushes a new entry. `path` may be absolute, relative to the current
    /// pathname (`./x`, `../x`, `x`) or query-only (`?a=1`).
    pub fn navigate(&self, path: &str) {
        let target = self.resolve_target(path);
        tracing::debug!(from = %self.pathname(), to = %target, "navigate");
        self.inner.bridge.push(&target);
    }

    pub fn replace(&self, path: &str) {
        let target = self.resolve_target(path);
        tracing::debug!(from = %self.pathname(), to = %target, "replace");
        self.inner.bridge.replace(&target);
    }

    /// Merges `patch` into the current query string and replaces the entry.
    pub fn set_params(&self, patch: &ParamsPatch) {
        let target = match self.inner.bridge.pending_location() {
            Some(location) => {
                let merged = patch.apply_to(&SearchParams::parse(&location.search));
                with_query(&location.pathname, &merged.to_query_string())
            }
            None => {
                let route = self.inner.route.borrow();
                let merged = patch.apply_to(route.search_params());
                with_query(route.pathname(), &merged.to_query_string())
            }
        };
        self.inner.bridge.replace(&target);
    }

    pub fn back(&self) {
        self.inner.bridge.back();
    }

    pub fn forward(&self) {
        self.inner.bridge.forward();
    }

    pub fn can_go_back(&self) -> bool {
        self.inner.bridge.can_go_back()
    }

    /// Full URL (base path included) that `navigate(path)` would write.
    pub fn href(&self, path: &str) -> String {
        self.inner.bridge.href(&self.resolve_target(path))
    }

    pub fn match_path(&self, path: &str) -> RouteMatch {
        let target = self.resolve_target(path);
        self.inner.registry.find(split_href(&target).path)
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&RouteChange) + 'static,
    {
        self.inner.ledger.borrow_mut().insert(Rc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.ledger.borrow_mut().remove(id)
    }

    /// Resolves `path` against the newest written location, which is ahead of
    /// the applied route while queued notifications are still pending.
    fn resolve_target(&self, path: &str) -> String {
        let href = split_href(path);
        let current = match self.inner.bridge.pending_location() {
            Some(location) => location.pathname,
            None => self.pathname(),
        };

        let pathname = if href.path.is_empty() {
            current
        } else {
            resolve_relative(&current, href.path)
        };

        with_query(&pathname, href.query.unwrap_or_default())
    }

    fn apply(&self, event: &HistoryEvent) {
        self.inner.phase.set(RouterPhase::Navigating);

        let next = ParsedRoute::derive(&self.inner.registry, &event.location);
        let changes = self.inner.route.borrow().diff(&next);
        if !changes.is_empty() {
            self.inner.version.set(self.inner.version.get() + 1);
            *self.inner.route.borrow_mut() = Rc::new(next);
        }

        let change = RouteChange {
            route: self.route(),
            version: self.inner.version.get(),
            changes,
            intent: NavigationIntent {
                target_path: event.location.href(),
                mode: event.mode,
                origin: event.origin,
            },
        };

        tracing::debug!(
            pathname = change.route.pathname(),
            route = ?change.route.route_id(),
            version = change.version,
            mode = ?event.mode,
            changes = ?changes,
            "route applied"
        );

        dispatch(&self.inner.ledger, |listener| listener(&change));
        self.inner.phase.set(RouterPhase::Idle);
    }
}

fn with_query(pathname: &str, query: &str) -> String {
    if query.is_empty() {
        pathname.to_string()
    } else {
        format!("{pathname}?{query}")
    }
}
