//! Path-based client router for single-page application shells.
//!
//! Routes are compiled once into a [`RouteRegistry`]; a [`Router`] keeps the
//! current [`ParsedRoute`] in sync with session history through a
//! [`HistoryBridge`], and [`compat`] exposes it under hook-style names.

pub mod compat;
pub mod enums;
pub mod errors;
pub mod history;
mod ledger;
mod matcher;
pub mod path;
pub mod pattern;
pub mod query;
pub mod registry;
pub mod router;
pub mod types;

pub use enums::{NavigationMode, NavigationOrigin, RouterPhase};
pub use errors::{RouterError, RouterResult};
pub use history::{HistoryBridge, Location, MemoryHistory};
pub use ledger::SubscriptionId;
pub use query::{ParamsPatch, SearchParams};
pub use registry::{RegistryBuilder, RouteRegistry};
pub use router::{
    MatchedRoute, ParsedRoute, RouteChange, RouteChanges, Router, RouterBuilder, RouterOptions,
};
pub use types::{RouteId, RouteMatch, RouteParams};
