/// Parsing errors.
///
/// Defines all error types that can occur while normalizing, validating and
/// parsing an expression. Parse errors are detected before any evaluation takes
/// place.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation and
/// formatting, such as division by zero or values that cannot be rendered as a
/// fraction.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while solving an expression.
///
/// Returned by the public entry points in the crate root. The caller decides
/// whether to report it and exit, or propagate it further.
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// The expression was rejected before evaluation.
    Parse(ParseError),
    /// Evaluation or formatting failed.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<RuntimeError> for Error {
    fn from(value: RuntimeError) -> Self {
        Self::Runtime(value)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
