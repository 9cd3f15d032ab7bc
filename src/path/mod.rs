mod base;
mod error;
mod normalize;
mod resolve;

pub use base::BasePath;
pub use error::{PathError, PathResult};
pub use normalize::{NormalizationOptions, normalize_path, split_segments};
pub use resolve::{Href, resolve_relative, split_href};
