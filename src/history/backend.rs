use crate::history::{HistoryEntry, HistoryResult, HistoryState};

/// Session-history primitives the bridge drives.
///
/// Writes take full URLs (base path included). Traversals are asynchronous:
/// `go` only requests one, and the backend reports it later, either through
/// the listener installed with `listen` or by `next_traversal`.
pub trait HistoryBackend {
    fn current(&self) -> HistoryResult<HistoryEntry>;

    fn push(&mut self, url: &str, state: HistoryState) -> HistoryResult<()>;

    fn replace(&mut self, url: &str, state: HistoryState) -> HistoryResult<()>;

    fn go(&mut self, delta: isize) -> HistoryResult<()>;

    fn listen(&mut self, _on_pop: Box<dyn FnMut()>) -> HistoryResult<()> {
        Ok(())
    }

    /// Applies one queued traversal; returns `true` when the active entry changed.
    fn next_traversal(&mut self) -> bool {
        false
    }
}
