use crate::history::{HistoryBackend, HistoryEntry, HistoryResult, HistoryState};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

#[derive(Debug)]
struct MemoryStack {
    entries: Vec<HistoryEntry>,
    cursor: usize,
    pending: VecDeque<isize>,
}

/// In-process session history.
///
/// Clones share the same stack, so a host (or a test) can keep a handle for
/// inspection after moving one into a bridge. Traversals requested with `go`
/// stay queued until the bridge drains them, mirroring the browser delivering
/// `popstate` on a later event-loop turn.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    inner: Rc<RefCell<MemoryStack>>,
}

impl MemoryHistory {
    pub fn new(initial_url: &str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(MemoryStack {
                entries: vec![HistoryEntry::from_url(initial_url, HistoryState::default())],
                cursor: 0,
                pending: VecDeque::new(),
            })),
        }
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner
            .borrow()
            .entries
            .iter()
            .map(HistoryEntry::url)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.inner.borrow().cursor
    }

    pub fn current_url(&self) -> String {
        let stack = self.inner.borrow();
        stack.entries[stack.cursor].url()
    }

    pub fn pending_traversals(&self) -> usize {
        self.inner.borrow().pending.len()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

impl HistoryBackend for MemoryHistory {
    fn current(&self) -> HistoryResult<HistoryEntry> {
        let stack = self.inner.borrow();
        Ok(stack.entries[stack.cursor].clone())
    }

    fn push(&mut self, url: &str, state: HistoryState) -> HistoryResult<()> {
        let mut stack = self.inner.borrow_mut();
        let keep = stack.cursor + 1;
        stack.entries.truncate(keep);
        stack.entries.push(HistoryEntry::from_url(url, state));
        stack.cursor = keep;
        Ok(())
    }

    fn replace(&mut self, url: &str, state: HistoryState) -> HistoryResult<()> {
        let mut stack = self.inner.borrow_mut();
        let cursor = stack.cursor;
        stack.entries[cursor] = HistoryEntry::from_url(url, state);
        Ok(())
    }

    fn go(&mut self, delta: isize) -> HistoryResult<()> {
        if delta != 0 {
            self.inner.borrow_mut().pending.push_back(delta);
        }
        Ok(())
    }

    fn next_traversal(&mut self) -> bool {
        let mut stack = self.inner.borrow_mut();
        while let Some(delta) = stack.pending.pop_front() {
            let Some(target) = stack.cursor.checked_add_signed(delta) else {
                continue;
            };
            if target < stack.entries.len() {
                stack.cursor = target;
                return true;
            }
        }
        false
    }
}
