use memchr::{memchr, memmem};
use smallvec::SmallVec;

use super::{SegmentPart, SegmentPattern};

pub type ParamOffset = (usize, usize);
pub type CapturedParam = (String, ParamOffset);
pub type CaptureList = SmallVec<[CapturedParam; 4]>;

/// Matches one concrete segment against a dynamic segment pattern.
///
/// `seg_l` is the segment used for literal comparison (ASCII-lowercased when
/// routing is case-insensitive); it has the same byte length as `seg`, so the
/// returned offsets index into both.
#[tracing::instrument(level = "trace", skip(seg_l, pat), fields(seg=%seg, parts=pat.parts.len() as u64))]
pub fn match_segment(seg: &str, seg_l: &str, pat: &SegmentPattern) -> Option<CaptureList> {
    let mut i = 0usize;
    let haystack = seg_l.as_bytes();
    let mut out: CaptureList = SmallVec::new();

    for (idx, part) in pat.parts.iter().enumerate() {
        match part {
            SegmentPart::Literal(lit) => {
                if i + lit.len() > haystack.len() {
                    return None;
                }

                if &haystack[i..i + lit.len()] != lit.as_bytes() {
                    return None;
                }

                i += lit.len();
            }
            SegmentPart::Param { name } => {
                let next_lit = match pat.parts.get(idx + 1) {
                    Some(SegmentPart::Literal(l)) => Some(l.as_str()),
                    _ => None,
                };
                let is_suffix = idx + 2 == pat.parts.len();

                let end = match next_lit {
                    None => haystack.len(),
                    // a trailing literal anchors at the end of the segment
                    Some(nl) if is_suffix => {
                        if haystack.len() < i + nl.len() {
                            return None;
                        }
                        haystack.len() - nl.len()
                    }
                    Some(nl) if nl.len() == 1 => i + memchr(nl.as_bytes()[0], &haystack[i..])?,
                    Some(nl) => i + memmem::find(&haystack[i..], nl.as_bytes())?,
                };

                if end <= i || !seg.is_char_boundary(end) {
                    return None;
                }

                out.push((name.clone(), (i, end - i)));
                i = end;
            }
        }
    }

    if i == haystack.len() { Some(out) } else { None }
}
