use crate::pattern::CapturedParam;
use crate::types::RouteParams;
use std::borrow::Cow;

pub(crate) fn extend_params<I>(params: &mut RouteParams, segment: &str, captures: I, decode: bool)
where
    I: IntoIterator<Item = CapturedParam>,
{
    for (name, (start, len)) in captures {
        let end = start.saturating_add(len);
        if let Some(raw) = segment.get(start..end) {
            params.insert(name, decode_value(raw, decode));
        }
    }
}

/// Percent-decodes a captured value; values that do not decode to UTF-8 are kept raw.
pub(crate) fn decode_value(raw: &str, decode: bool) -> String {
    if !decode || !raw.contains('%') {
        return raw.to_string();
    }
    urlencoding::decode(raw)
        .map(Cow::into_owned)
        .unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(decode_value("caf%C3%A9", true), "café");
        assert_eq!(decode_value("caf%C3%A9", false), "caf%C3%A9");
    }

    #[test]
    fn keeps_raw_value_when_escape_is_not_utf8() {
        assert_eq!(decode_value("bad%FF", true), "bad%FF");
    }

    #[test]
    fn extend_params_slices_by_offset() {
        let mut params = RouteParams::new();
        extend_params(
            &mut params,
            "@octo",
            vec![("username".to_string(), (1, 4))],
            true,
        );
        assert_eq!(params.get("username").map(String::as_str), Some("octo"));
    }
}
