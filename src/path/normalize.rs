use crate::path::{PathError, PathResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NormalizationOptions {
    pub strict_trailing_slash: bool,
}

/// Canonical in-app form of a pathname: leading `/`, no empty segments and,
/// unless `strict_trailing_slash` is set, no trailing `/`.
#[inline]
#[tracing::instrument(level = "trace", skip(path, options), fields(path_len=path.len() as u64))]
pub fn normalize_path(path: &str, options: &NormalizationOptions) -> PathResult<String> {
    let mut output = String::with_capacity(path.len() + 1);
    output.push('/');
    let mut prev_was_slash = true;

    for ch in path.chars() {
        if ch == '/' {
            if prev_was_slash {
                continue;
            }
            output.push('/');
            prev_was_slash = true;
            continue;
        }

        if (ch as u32) <= 0x20 || ch == '\u{7f}' {
            return Err(PathError::ControlOrWhitespace {
                input: path.to_string(),
                byte: ch as u8,
            });
        }

        output.push(ch);
        prev_was_slash = false;
    }

    if !options.strict_trailing_slash && output.len() > 1 && output.ends_with('/') {
        output.pop();
    }

    Ok(output)
}

pub fn split_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|seg| !seg.is_empty()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn collapses_duplicates_and_trims_trailing_slashes() {
        let normalized = normalize_path("//foo//bar///", &NormalizationOptions::default()).unwrap();
        assert_eq!(normalized, "/foo/bar");
    }

    #[test]
    fn keeps_single_trailing_slash_when_strict() {
        let options = NormalizationOptions {
            strict_trailing_slash: true,
        };
        let normalized = normalize_path("/foo//bar//", &options).unwrap();
        assert_eq!(normalized, "/foo/bar/");
    }

    #[test]
    fn adds_leading_slash_and_maps_empty_to_root() {
        let options = NormalizationOptions::default();
        assert_eq!(normalize_path("foo", &options).unwrap(), "/foo");
        assert_eq!(normalize_path("", &options).unwrap(), "/");
        assert_eq!(normalize_path("///", &options).unwrap(), "/");
    }

    #[test]
    fn leaves_percent_escapes_untouched() {
        let normalized = normalize_path("/caf%C3%A9", &NormalizationOptions::default()).unwrap();
        assert_eq!(normalized, "/caf%C3%A9");
    }

    #[test]
    fn accepts_unicode_input() {
        let normalized = normalize_path("/こんにちは", &NormalizationOptions::default()).unwrap();
        assert_eq!(normalized, "/こんにちは");
    }

    #[test]
    fn rejects_control_and_whitespace_bytes() {
        let err = normalize_path("/foo bar", &NormalizationOptions::default()).unwrap_err();
        match err {
            PathError::ControlOrWhitespace { byte, .. } => assert_eq!(byte, b' '),
            other => panic!("expected ControlOrWhitespace, got {other:?}"),
        }
    }

    #[test]
    fn splits_into_non_empty_segments() {
        assert_eq!(split_segments("/a//b/c/"), vec!["a", "b", "c"]);
        assert!(split_segments("/").is_empty());
    }
}
