use crate::path::{BasePath, NormalizationOptions, PathError};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MAX_ROUTES: usize = 1024;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct RouterOptions {
    pub base_path: Option<String>,
    pub case_sensitive: bool,
    pub strict_trailing_slash: bool,
    pub decode_params: bool,
    pub max_routes: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            base_path: None,
            case_sensitive: true,
            strict_trailing_slash: false,
            decode_params: true,
            max_routes: DEFAULT_MAX_ROUTES,
        }
    }
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), RouterOptionsError> {
        if self.max_routes == 0 {
            return Err(RouterOptionsError::MaxRoutesInvalid { provided: 0 });
        }
        self.base_path()?;
        Ok(())
    }

    pub fn base_path(&self) -> Result<BasePath, RouterOptionsError> {
        match self.base_path.as_deref() {
            Some(raw) => Ok(BasePath::parse(raw)?),
            None => Ok(BasePath::root()),
        }
    }

    pub fn normalization(&self) -> NormalizationOptions {
        NormalizationOptions {
            strict_trailing_slash: self.strict_trailing_slash,
        }
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn base_path<S: Into<String>>(mut self, value: S) -> Self {
        self.options.base_path = Some(value.into());
        self
    }

    pub fn case_sensitive(mut self, value: bool) -> Self {
        self.options.case_sensitive = value;
        self
    }

    pub fn strict_trailing_slash(mut self, value: bool) -> Self {
        self.options.strict_trailing_slash = value;
        self
    }

    pub fn decode_params(mut self, value: bool) -> Self {
        self.options.decode_params = value;
        self
    }

    pub fn max_routes(mut self, value: usize) -> Self {
        self.options.max_routes = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, RouterOptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterOptionsError {
    #[error("max_routes must be at least 1 (got {provided})")]
    MaxRoutesInvalid { provided: usize },
    #[error("invalid base path: {0}")]
    InvalidBasePath(#[from] PathError),
}
