mod params;
pub mod resolver;

pub(crate) use params::{decode_value, extend_params};
pub use resolver::find_route;
