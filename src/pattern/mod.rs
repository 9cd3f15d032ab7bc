mod error;
mod lexer;
mod matcher;
mod route;
mod segment;

pub use error::{PatternError, PatternResult};
pub use lexer::{compile_template, parse_segment};
pub use matcher::{CaptureList, CapturedParam, ParamOffset, match_segment};
pub use route::RoutePattern;
pub use segment::{SegmentDef, SegmentPart, SegmentPattern};
