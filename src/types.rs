use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RouteId = String;
pub type RouteParams = HashMap<String, String>;

/// Outcome of matching a pathname against the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RouteMatch {
    Matched { id: RouteId, params: RouteParams },
    Unmatched,
}

impl RouteMatch {
    pub fn is_matched(&self) -> bool {
        matches!(self, Self::Matched { .. })
    }

    pub fn id(&self) -> Option<&str> {
        match self {
            Self::Matched { id, .. } => Some(id.as_str()),
            Self::Unmatched => None,
        }
    }

    pub fn params(&self) -> Option<&RouteParams> {
        match self {
            Self::Matched { params, .. } => Some(params),
            Self::Unmatched => None,
        }
    }
}
