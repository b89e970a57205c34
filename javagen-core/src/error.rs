use miette::Diagnostic;
use thiserror::Error;

use crate::Type;

/// Result type for model construction and rendering.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised when a declaration model is misused.
///
/// Every variant is a caller error found at the point of misuse; none of
/// them is transient.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum Error {
    #[error("invalid argument: {message}")]
    #[diagnostic(code(javagen::invalid_argument))]
    InvalidArgument { message: String },

    #[error("type mismatch: expected `{expected}`, found `{actual}`")]
    #[diagnostic(
        code(javagen::type_mismatch),
        help("declared types are only compatible with the exact same class")
    )]
    TypeMismatch { expected: Type, actual: Type },

    #[error("illegal state: {message}")]
    #[diagnostic(code(javagen::illegal_state))]
    IllegalState { message: String },
}

impl Error {
    /// Create an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Create a type mismatch error.
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::TypeMismatch { expected, actual }
    }

    /// Create an illegal state error.
    pub fn illegal_state(message: impl Into<String>) -> Self {
        Self::IllegalState {
            message: message.into(),
        }
    }
}
