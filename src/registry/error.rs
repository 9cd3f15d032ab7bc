use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("route id '{id}' is already registered")]
    DuplicateRouteId { id: String },
    #[error("route limit of {limit} reached; cannot add '{template}'")]
    MaxRoutesExceeded { limit: usize, template: String },
    #[error(transparent)]
    Pattern(#[from] PatternError),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
