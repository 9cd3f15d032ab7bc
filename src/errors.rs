use crate::history::HistoryError;
use crate::path::PathError;
use crate::pattern::PatternError;
use crate::registry::RegistryError;
use crate::router::RouterOptionsError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RouterError {
    #[error(transparent)]
    Options(#[from] RouterOptionsError),
    #[error(transparent)]
    Path(#[from] PathError),
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    History(#[from] HistoryError),
}

pub type RouterResult<T> = Result<T, RouterError>;
