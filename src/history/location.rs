use crate::enums::{NavigationMode, NavigationOrigin};
use serde::{Deserialize, Serialize};

/// State object stored with every history entry written by the bridge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub index: usize,
}

/// Raw entry as reported by a backend: full path (base path included) and
/// search string without the leading `?`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryEntry {
    pub path: String,
    pub search: String,
    pub state: HistoryState,
}

impl HistoryEntry {
    pub fn from_url(url: &str, state: HistoryState) -> Self {
        let url = url.split_once('#').map_or(url, |(before, _)| before);
        let (path, search) = url.split_once('?').unwrap_or((url, ""));

        Self {
            path: if path.is_empty() { "/".to_string() } else { path.to_string() },
            search: search.to_string(),
            state,
        }
    }

    pub fn url(&self) -> String {
        if self.search.is_empty() {
            self.path.clone()
        } else {
            format!("{}?{}", self.path, self.search)
        }
    }
}

/// The bridge's view of one history entry, with the base path stripped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Location {
    pub pathname: String,
    pub search: String,
    pub index: usize,
}

impl Location {
    pub fn from_path(path: &str, index: usize) -> Self {
        let entry = HistoryEntry::from_url(path, HistoryState { index });
        Self {
            pathname: entry.path,
            search: entry.search,
            index,
        }
    }

    pub fn href(&self) -> String {
        if self.search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{}", self.pathname, self.search)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEvent {
    pub location: Location,
    pub mode: NavigationMode,
    pub origin: NavigationOrigin,
}
