#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during evaluation and formatting.
pub enum RuntimeError {
    /// Attempted division by zero, either inside an operand such as `1/0` or
    /// by an expression that evaluates to zero.
    DivisionByZero {
        /// Zero-based index of the offending token.
        position: usize,
    },
    /// A value was infinite or NaN and cannot be written as a fraction.
    NonFinite {
        /// The offending value.
        value: f64,
    },
    /// Integer overflow while building a continued-fraction convergent.
    Overflow,
    /// A result was too large to be represented as a whole number.
    LiteralTooLarge,
    /// The approximation precision was not a positive finite number.
    InvalidPrecision {
        /// The rejected precision.
        eps: f64,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { position } => {
                write!(f, "Error at token {position}: Division by zero.")
            },
            Self::NonFinite { value } => {
                write!(f, "Error: {value} cannot be written as a fraction.")
            },
            Self::Overflow => write!(f,
                                     "Error: Integer overflow while trying to approximate the fraction."),
            Self::LiteralTooLarge => write!(f, "Error: Result is too large."),
            Self::InvalidPrecision { eps } => {
                write!(f, "Error: Precision must be a positive number, found {eps}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
