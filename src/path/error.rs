use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PathError {
    #[error("path contains control or whitespace byte {byte} in '{input}'")]
    ControlOrWhitespace { input: String, byte: u8 },
    #[error("base path '{input}' must start with '/'")]
    BasePathNotAbsolute { input: String },
    #[error("base path '{input}' contains disallowed character '{character}'")]
    BasePathDisallowedCharacter { input: String, character: char },
}

pub type PathResult<T> = Result<T, PathError>;
