mod builder;
mod options;
mod service;
mod state;

pub use builder::RouterBuilder;
pub use options::{DEFAULT_MAX_ROUTES, RouterOptions, RouterOptionsBuilder, RouterOptionsError};
pub use service::Router;
pub use state::{MatchedRoute, NavigationIntent, ParsedRoute, RouteChange, RouteChanges};
