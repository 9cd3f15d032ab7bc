use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("route template '{template}' must start with '/'")]
    NotAbsolute { template: String },
    #[error("segment '{segment}' contains parentheses, which are not allowed")]
    ParenthesisNotAllowed { segment: String },
    #[error("parameter segment '{segment}' is missing a name")]
    ParameterMissingName { segment: String },
    #[error(
        "parameter name '{name}' in segment '{segment}' must start with an alphabetic character or underscore (found '{found}')"
    )]
    ParameterInvalidStart {
        segment: String,
        name: String,
        found: char,
    },
    #[error(
        "parameter name '{name}' in segment '{segment}' contains invalid character '{invalid}'"
    )]
    ParameterInvalidCharacter {
        segment: String,
        name: String,
        invalid: char,
    },
    #[error("segment '{segment}' places two parameters next to each other")]
    AdjacentParameters { segment: String },
    #[error("segment '{segment}' has an unterminated '[' parameter")]
    UnterminatedBracket { segment: String },
    #[error("catch-all segment '{segment}' cannot be combined with literal text")]
    CatchAllMixed { segment: String },
    #[error("catch-all segment '{segment}' must be the last segment of '{template}'")]
    CatchAllNotTerminal { template: String, segment: String },
    #[error("parameter '{name}' appears more than once in '{template}'")]
    DuplicateParamName { template: String, name: String },
}

pub type PatternResult<T> = Result<T, PatternError>;
