mod codec;
mod params;

pub use codec::{decode_component, parse, serialize};
pub use params::{ParamsPatch, SearchParams};
