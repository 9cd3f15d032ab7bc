use crate::path::{NormalizationOptions, PathError, PathResult, normalize_path};

/// Prefix under which the whole application is served.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BasePath {
    prefix: Option<String>,
}

impl BasePath {
    pub fn root() -> Self {
        Self { prefix: None }
    }

    pub fn parse(raw: &str) -> PathResult<Self> {
        let trimmed = raw.trim_end_matches('/');
        if trimmed.is_empty() {
            return Ok(Self::root());
        }

        if !trimmed.starts_with('/') {
            return Err(PathError::BasePathNotAbsolute {
                input: raw.to_string(),
            });
        }

        if let Some(character) = trimmed.chars().find(|c| matches!(c, '?' | '#')) {
            return Err(PathError::BasePathDisallowedCharacter {
                input: raw.to_string(),
                character,
            });
        }

        let normalized = normalize_path(trimmed, &NormalizationOptions::default())?;

        Ok(Self {
            prefix: Some(normalized),
        })
    }

    pub fn is_root(&self) -> bool {
        self.prefix.is_none()
    }

    pub fn as_str(&self) -> &str {
        self.prefix.as_deref().unwrap_or("")
    }

    /// Returns the in-app pathname, or `None` when `full` lies outside the prefix.
    pub fn strip<'a>(&self, full: &'a str) -> Option<&'a str> {
        let Some(prefix) = self.prefix.as_deref() else {
            return Some(full);
        };

        let rest = full.strip_prefix(prefix)?;
        if rest.is_empty() {
            Some("/")
        } else if rest.starts_with('/') {
            Some(rest)
        } else {
            None
        }
    }

    pub fn join(&self, path: &str) -> String {
        let prefix = self.as_str();
        let mut out = String::with_capacity(prefix.len() + path.len() + 1);
        out.push_str(prefix);
        if !path.starts_with('/') {
            out.push('/');
        }
        out.push_str(path);
        out
    }
}
