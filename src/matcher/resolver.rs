use crate::matcher::{decode_value, extend_params};
use crate::path::{normalize_path, split_segments};
use crate::pattern::{RoutePattern, SegmentDef, match_segment};
use crate::registry::RouteRegistry;
use crate::types::{RouteMatch, RouteParams};
use std::borrow::Cow;

/// Returns the first pattern, in registration order, that accepts `pathname`.
#[tracing::instrument(level = "trace", skip(registry), fields(routes=registry.len() as u64))]
pub fn find_route(registry: &RouteRegistry, pathname: &str) -> RouteMatch {
    let options = registry.options();
    let normalized = match normalize_path(pathname, &options.normalization()) {
        Ok(path) => Cow::Owned(path),
        Err(err) => {
            tracing::debug!(error = %err, "matching raw pathname");
            Cow::Borrowed(pathname)
        }
    };

    if options.strict_trailing_slash && normalized.len() > 1 && normalized.ends_with('/') {
        tracing::trace!(path = %normalized, "trailing slash rejected");
        return RouteMatch::Unmatched;
    }

    let segments = split_segments(&normalized);
    let folded: Vec<Cow<'_, str>> = segments
        .iter()
        .map(|seg| {
            if options.case_sensitive {
                Cow::Borrowed(*seg)
            } else {
                Cow::Owned(seg.to_ascii_lowercase())
            }
        })
        .collect();

    for pattern in registry.patterns() {
        if let Some(params) = match_pattern(pattern, &segments, &folded, options.decode_params) {
            tracing::trace!(route = pattern.id(), "route matched");
            return RouteMatch::Matched {
                id: pattern.id().to_string(),
                params,
            };
        }
    }

    RouteMatch::Unmatched
}

fn match_pattern(
    pattern: &RoutePattern,
    segments: &[&str],
    folded: &[Cow<'_, str>],
    decode: bool,
) -> Option<RouteParams> {
    let defs = pattern.segments();
    let mut params = RouteParams::new();

    for (idx, def) in defs.iter().enumerate() {
        match def {
            SegmentDef::Literal(lit) => {
                if folded.get(idx)?.as_ref() != lit.as_str() {
                    return None;
                }
            }
            SegmentDef::Dynamic(pat) => {
                let seg = segments.get(idx)?;
                let seg_l = folded.get(idx)?;
                let captures = match_segment(seg, seg_l, pat)?;
                extend_params(&mut params, seg, captures, decode);
            }
            SegmentDef::CatchAll { name } => {
                let rest = segments.get(idx..).filter(|rest| !rest.is_empty())?;
                let value = rest
                    .iter()
                    .map(|seg| decode_value(seg, decode))
                    .collect::<Vec<_>>()
                    .join("/");
                params.insert(name.clone(), value);
                return Some(params);
            }
        }
    }

    (defs.len() == segments.len()).then_some(params)
}
