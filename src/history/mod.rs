mod backend;
mod bridge;
#[cfg(target_arch = "wasm32")]
mod browser;
mod error;
mod location;
mod memory;

pub use backend::HistoryBackend;
pub use bridge::HistoryBridge;
#[cfg(target_arch = "wasm32")]
pub use browser::BrowserHistory;
pub use error::{HistoryError, HistoryResult};
pub use location::{HistoryEntry, HistoryEvent, HistoryState, Location};
pub use memory::MemoryHistory;
