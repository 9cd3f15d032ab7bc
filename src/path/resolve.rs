/// A navigation target split into its path and query parts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Href<'a> {
    pub path: &'a str,
    pub query: Option<&'a str>,
}

/// Splits `path?query#fragment`. The fragment is discarded.
pub fn split_href(href: &str) -> Href<'_> {
    let without_fragment = match memchr::memchr(b'#', href.as_bytes()) {
        Some(idx) => &href[..idx],
        None => href,
    };

    match memchr::memchr(b'?', without_fragment.as_bytes()) {
        Some(idx) => Href {
            path: &without_fragment[..idx],
            query: Some(&without_fragment[idx + 1..]),
        },
        None => Href {
            path: without_fragment,
            query: None,
        },
    }
}

/// Resolves `target` against `current` with URL reference semantics.
/// `..` never climbs above the root.
pub fn resolve_relative(current: &str, target: &str) -> String {
    if target.starts_with('/') {
        return target.to_string();
    }
    if target.is_empty() {
        return current.to_string();
    }

    let mut stack: Vec<&str> = current.split('/').filter(|seg| !seg.is_empty()).collect();
    if !current.ends_with('/') {
        stack.pop();
    }

    for part in target.split('/') {
        match part {
            "" | "." => {}
            ".." => {
                stack.pop();
            }
            seg => stack.push(seg),
        }
    }

    let mut out = String::with_capacity(current.len() + target.len());
    out.push('/');
    out.push_str(&stack.join("/"));
    if target.ends_with('/') && !stack.is_empty() {
        out.push('/');
    }
    out
}
