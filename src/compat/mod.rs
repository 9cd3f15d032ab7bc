//! The router exposed under the hook names of the file-based routing framework
//! the application was written against.

mod handle;
mod hooks;
mod value;

pub use handle::RouterHandle;
pub use hooks::{
    use_global_search_params, use_local_search_params, use_pathname, use_router, use_segments,
};
pub use value::RouteValue;
