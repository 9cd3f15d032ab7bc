use crate::query::SearchParams;
use memchr::{memchr, memchr_iter};
use std::borrow::Cow;

/// Parses a search string (with or without the leading `?`).
///
/// Duplicate keys keep their first value. A pair whose key or value carries
/// malformed percent-encoding is dropped on its own; the rest still parse.
#[tracing::instrument(level = "trace", skip(search), fields(search_len=search.len() as u64))]
pub fn parse(search: &str) -> SearchParams {
    let raw = search.strip_prefix('?').unwrap_or(search);
    let mut params = SearchParams::new();

    let mut start = 0usize;
    let bounds = memchr_iter(b'&', raw.as_bytes()).chain(std::iter::once(raw.len()));
    for end in bounds {
        let pair = &raw[start..end];
        start = end + 1;

        if pair.is_empty() {
            continue;
        }

        let (key, value) = match memchr(b'=', pair.as_bytes()) {
            Some(eq) => (&pair[..eq], &pair[eq + 1..]),
            None => (pair, ""),
        };

        let (Some(key), Some(value)) = (decode_component(key), decode_component(value)) else {
            tracing::debug!(pair, "dropping malformed query pair");
            continue;
        };

        if !params.insert_if_absent(key, value) {
            tracing::trace!(pair, "duplicate query key ignored");
        }
    }

    params
}

/// Serializes pairs in the given order; pairs whose value is `None` are omitted.
pub fn serialize<I, K, V>(pairs: I) -> String
where
    I: IntoIterator<Item = (K, Option<V>)>,
    K: AsRef<str>,
    V: AsRef<str>,
{
    let mut out = String::new();
    for (key, value) in pairs {
        let Some(value) = value else {
            continue;
        };
        if !out.is_empty() {
            out.push('&');
        }
        out.push_str(&urlencoding::encode(key.as_ref()));
        out.push('=');
        out.push_str(&urlencoding::encode(value.as_ref()));
    }
    out
}

/// Form-style decoding: `+` is a space, `%XX` escapes must be complete and
/// the result must be UTF-8.
pub fn decode_component(raw: &str) -> Option<String> {
    let bytes = raw.as_bytes();
    let escapes_valid = memchr_iter(b'%', bytes).all(|idx| {
        matches!(
            (bytes.get(idx + 1), bytes.get(idx + 2)),
            (Some(hi), Some(lo)) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit()
        )
    });
    if !escapes_valid {
        return None;
    }

    let spaced = if raw.contains('+') {
        Cow::Owned(raw.replace('+', " "))
    } else {
        Cow::Borrowed(raw)
    };

    urlencoding::decode(&spaced).ok().map(Cow::into_owned)
}
