use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HistoryError {
    #[error("history API is unavailable in this execution context")]
    Unavailable,
    #[error("history operation '{operation}' failed: {message}")]
    Operation {
        operation: &'static str,
        message: String,
    },
    #[error("history state could not be encoded: {message}")]
    State { message: String },
}

pub type HistoryResult<T> = Result<T, HistoryError>;
