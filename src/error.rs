//! Error types for argspan

use thiserror::Error;

/// Result type alias for parse operations
pub type Result<T> = std::result::Result<T, ParseError>;

/// Errors raised while locating and coercing option values
#[derive(Error, Debug)]
pub enum ParseError {
    /// More values followed the flag than the coercer accepts
    #[error("too many values given")]
    TooManyValues,

    /// The flag was present without the value it requires
    #[error("too few values given")]
    TooFewValues,

    /// A value could not be converted to the requested type
    #[error("invalid value '{value}'")]
    InvalidValue { value: String },
}
