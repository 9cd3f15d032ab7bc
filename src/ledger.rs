use serde::{Deserialize, Serialize};
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

/// Handle returned by `subscribe`; pass it back to unsubscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubscriptionId(u64);

impl SubscriptionId {
    pub fn get(self) -> u64 {
        self.0
    }
}

/// Callbacks keyed by handle, kept in subscription order.
pub(crate) struct SubscriptionLedger<F: ?Sized> {
    next: u64,
    entries: Vec<(SubscriptionId, Rc<F>)>,
}

impl<F: ?Sized> SubscriptionLedger<F> {
    pub(crate) fn new() -> Self {
        Self {
            next: 0,
            entries: Vec::new(),
        }
    }

    pub(crate) fn insert(&mut self, callback: Rc<F>) -> SubscriptionId {
        let id = SubscriptionId(self.next);
        self.next += 1;
        self.entries.push((id, callback));
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        match self.entries.iter().position(|(existing, _)| *existing == id) {
            Some(position) => {
                self.entries.remove(position);
                true
            }
            None => false,
        }
    }

    pub(crate) fn contains(&self, id: SubscriptionId) -> bool {
        self.entries.iter().any(|(existing, _)| *existing == id)
    }

    pub(crate) fn snapshot(&self) -> Vec<(SubscriptionId, Rc<F>)> {
        self.entries
            .iter()
            .map(|(id, callback)| (*id, Rc::clone(callback)))
            .collect()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl<F: ?Sized> Default for SubscriptionLedger<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: ?Sized> fmt::Debug for SubscriptionLedger<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SubscriptionLedger")
            .field("subscribers", &self.entries.len())
            .finish()
    }
}

/// Invokes every subscriber once, in subscription order.
///
/// No borrow is held while a callback runs, so callbacks may subscribe,
/// unsubscribe or trigger further navigation. A subscriber removed during the
/// round is not invoked afterwards.
pub(crate) fn dispatch<F: ?Sized>(
    ledger: &RefCell<SubscriptionLedger<F>>,
    mut invoke: impl FnMut(&F),
) {
    let snapshot = ledger.borrow().snapshot();
    for (id, callback) in snapshot {
        if !ledger.borrow().contains(id) {
            continue;
        }
        invoke(&*callback);
    }
}
