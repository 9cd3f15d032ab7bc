use crate::ledger::SubscriptionId;
use crate::router::{ParsedRoute, Router};
use std::fmt;
use std::rc::Rc;

type Project<T> = dyn Fn(&ParsedRoute) -> T;

/// A projection of the live route. Every `get` reads the router again; nothing
/// is cached between calls.
pub struct RouteValue<T> {
    router: Router,
    project: Rc<Project<T>>,
}

impl<T> Clone for RouteValue<T> {
    fn clone(&self) -> Self {
        Self {
            router: self.router.clone(),
            project: Rc::clone(&self.project),
        }
    }
}

impl<T> fmt::Debug for RouteValue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RouteValue")
            .field("version", &self.router.version())
            .finish_non_exhaustive()
    }
}

impl<T: 'static> RouteValue<T> {
    pub(crate) fn new<F>(router: &Router, project: F) -> Self
    where
        F: Fn(&ParsedRoute) -> T + 'static,
    {
        Self {
            router: router.clone(),
            project: Rc::new(project),
        }
    }

    pub fn get(&self) -> T {
        (self.project)(&*self.router.route())
    }

    pub fn version(&self) -> u64 {
        self.router.version()
    }

    /// Calls `listener` with the new value after every navigation that
    /// actually changed the route.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(T) + 'static,
    {
        let project = Rc::clone(&self.project);
        self.router.subscribe(move |change| {
            if !change.is_noop() {
                listener(project(&*change.route));
            }
        })
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.router.unsubscribe(id)
    }
}
