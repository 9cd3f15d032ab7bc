use crate::enums::{NavigationMode, NavigationOrigin};
use crate::history::{
    HistoryBackend, HistoryEntry, HistoryEvent, HistoryState, Location, MemoryHistory,
};
use crate::ledger::{SubscriptionId, SubscriptionLedger, dispatch};
use crate::path::BasePath;
use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};

type HistoryListener = dyn Fn(&HistoryEvent);

struct BridgeInner {
    backend: RefCell<Option<Box<dyn HistoryBackend>>>,
    base_path: BasePath,
    index: Cell<usize>,
    ledger: RefCell<SubscriptionLedger<HistoryListener>>,
    queue: RefCell<VecDeque<HistoryEvent>>,
    dispatching: Cell<bool>,
}

/// Single owner of the address bar and session history.
///
/// Programmatic writes notify subscribers before returning. Traversals
/// (`back`, `forward`) notify only once the host delivers the pop event.
/// Without a backend (non-browser context) every operation is a no-op and
/// subscribers are never invoked.
#[derive(Clone)]
pub struct HistoryBridge {
    inner: Rc<BridgeInner>,
}

impl fmt::Debug for HistoryBridge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HistoryBridge")
            .field("attached", &self.is_attached())
            .field("base_path", &self.inner.base_path)
            .field("index", &self.inner.index.get())
            .field("subscribers", &self.inner.ledger.borrow().len())
            .finish()
    }
}

impl HistoryBridge {
    pub fn new(backend: Box<dyn HistoryBackend>, base_path: BasePath) -> Self {
        let index = match backend.current() {
            Ok(entry) => entry.state.index,
            Err(err) => {
                tracing::warn!(error = %err, "could not read initial history entry");
                0
            }
        };

        let bridge = Self::with_backend(Some(backend), base_path);
        bridge.inner.index.set(index);

        let weak: Weak<BridgeInner> = Rc::downgrade(&bridge.inner);
        let on_pop = Box::new(move || {
            if let Some(inner) = weak.upgrade() {
                HistoryBridge { inner }.handle_pop();
            }
        });
        let installed = match bridge.inner.backend.borrow_mut().as_mut() {
            Some(backend) => backend.listen(on_pop),
            None => Ok(()),
        };
        if let Err(err) = installed {
            tracing::warn!(
                error = %err,
                "pop listener not installed; back/forward will go unnoticed"
            );
        }

        bridge
    }

    pub fn memory(history: MemoryHistory, base_path: BasePath) -> Self {
        Self::new(Box::new(history), base_path)
    }

    pub fn detached(base_path: BasePath) -> Self {
        Self::with_backend(None, base_path)
    }

    #[cfg(target_arch = "wasm32")]
    pub fn browser(base_path: BasePath) -> Self {
        match crate::history::BrowserHistory::new() {
            Ok(history) => Self::new(Box::new(history), base_path),
            Err(err) => {
                tracing::debug!(error = %err, "browser history unavailable; running detached");
                Self::detached(base_path)
            }
        }
    }

    /// Browser history on wasm32 when a window exists, detached otherwise.
    pub fn detect(base_path: BasePath) -> Self {
        #[cfg(target_arch = "wasm32")]
        {
            Self::browser(base_path)
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            Self::detached(base_path)
        }
    }

    fn with_backend(backend: Option<Box<dyn HistoryBackend>>, base_path: BasePath) -> Self {
        Self {
            inner: Rc::new(BridgeInner {
                backend: RefCell::new(backend),
                base_path,
                index: Cell::new(0),
                ledger: RefCell::new(SubscriptionLedger::new()),
                queue: RefCell::new(VecDeque::new()),
                dispatching: Cell::new(false),
            }),
        }
    }

    pub fn is_attached(&self) -> bool {
        self.inner.backend.borrow().is_some()
    }

    pub fn base_path(&self) -> &BasePath {
        &self.inner.base_path
    }

    pub fn href(&self, path: &str) -> String {
        self.inner.base_path.join(path)
    }

    pub fn location(&self) -> Option<Location> {
        let entry = self.inner.backend.borrow().as_ref()?.current();
        match entry {
            Ok(entry) => Some(self.to_location(entry)),
            Err(err) => {
                tracing::warn!(error = %err, "could not read current history entry");
                None
            }
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.is_attached() && self.inner.index.get() > 0
    }

    pub fn push(&self, path: &str) {
        self.write(path, NavigationMode::Push);
    }

    pub fn replace(&self, path: &str) {
        self.write(path, NavigationMode::Replace);
    }

    pub fn back(&self) {
        self.traverse(-1);
    }

    pub fn forward(&self) {
        self.traverse(1);
    }

    /// Delivers pop events for traversals queued by backends without a native
    /// event source (the in-memory history). Returns how many were delivered.
    pub fn run_pending_traversals(&self) -> usize {
        let mut delivered = 0;
        loop {
            let moved = match self.inner.backend.borrow_mut().as_mut() {
                Some(backend) => backend.next_traversal(),
                None => false,
            };
            if !moved {
                return delivered;
            }
            self.handle_pop();
            delivered += 1;
        }
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&HistoryEvent) + 'static,
    {
        self.inner.ledger.borrow_mut().insert(Rc::new(listener))
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.inner.ledger.borrow_mut().remove(id)
    }

    /// Location of the newest navigation written or popped but not yet
    /// delivered to every subscriber. `None` once the queue has drained.
    pub fn pending_location(&self) -> Option<Location> {
        self.inner
            .queue
            .borrow()
            .back()
            .map(|event| event.location.clone())
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.ledger.borrow().len()
    }

    fn write(&self, path: &str, mode: NavigationMode) {
        let url = self.inner.base_path.join(path);
        let index = match mode {
            NavigationMode::Push => self.inner.index.get() + 1,
            _ => self.inner.index.get(),
        };
        let state = HistoryState { index };

        let result = {
            let mut backend = self.inner.backend.borrow_mut();
            let Some(backend) = backend.as_mut() else {
                tracing::trace!(%url, ?mode, "history detached; write ignored");
                return;
            };
            match mode {
                NavigationMode::Push => backend.push(&url, state),
                _ => backend.replace(&url, state),
            }
        };

        if let Err(err) = result {
            tracing::warn!(error = %err, %url, ?mode, "history write failed; navigation skipped");
            return;
        }

        self.inner.index.set(index);
        self.emit(HistoryEvent {
            location: Location::from_path(path, index),
            mode,
            origin: NavigationOrigin::Programmatic,
        });
    }

    fn traverse(&self, delta: isize) {
        let result = match self.inner.backend.borrow_mut().as_mut() {
            Some(backend) => backend.go(delta),
            None => return,
        };
        if let Err(err) = result {
            tracing::warn!(error = %err, delta, "history traversal failed");
        }
    }

    fn handle_pop(&self) {
        let Some(location) = self.location() else {
            return;
        };
        self.inner.index.set(location.index);
        tracing::debug!(pathname = %location.pathname, index = location.index, "pop event");
        self.emit(HistoryEvent {
            location,
            mode: NavigationMode::Pop,
            origin: NavigationOrigin::BrowserHistory,
        });
    }

    /// Queues `event` and, unless a dispatch round is already running further
    /// up the stack, delivers queued events one at a time until none remain.
    /// An event stays at the front of the queue while it is being delivered.
    fn emit(&self, event: HistoryEvent) {
        self.inner.queue.borrow_mut().push_back(event);
        if self.inner.dispatching.replace(true) {
            return;
        }

        let _guard = DispatchGuard(&self.inner.dispatching);
        loop {
            let next = self.inner.queue.borrow().front().cloned();
            let Some(event) = next else {
                break;
            };
            dispatch(&self.inner.ledger, |listener| listener(&event));
            self.inner.queue.borrow_mut().pop_front();
        }
    }

    fn to_location(&self, entry: HistoryEntry) -> Location {
        let pathname = match self.inner.base_path.strip(&entry.path) {
            Some(stripped) => stripped.to_string(),
            None => {
                tracing::debug!(
                    path = %entry.path,
                    base = self.inner.base_path.as_str(),
                    "url outside base path"
                );
                entry.path.clone()
            }
        };

        Location {
            pathname,
            search: entry.search,
            index: entry.state.index,
        }
    }
}

struct DispatchGuard<'a>(&'a Cell<bool>);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}
