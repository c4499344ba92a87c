#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while validating or parsing an
/// expression.
///
/// Every variant except `InvalidOperand` and `LiteralTooLarge` marks a
/// malformed expression: the token stream does not alternate operand and
/// operator correctly.
pub enum ParseError {
    /// The expression was empty.
    EmptyExpression,
    /// The expression split into an even number of tokens.
    EvenTokenCount {
        /// Number of tokens found.
        count: usize,
    },
    /// An operator was expected but something else was found.
    ExpectedOperator {
        /// The token encountered.
        token:    String,
        /// Zero-based token index.
        position: usize,
    },
    /// A mixed number has a whole part but no fraction after the `_`.
    MissingFraction {
        /// The operand token.
        token:    String,
        /// Zero-based token index.
        position: usize,
    },
    /// An operand token is not an integer, decimal, fraction or mixed number.
    InvalidOperand {
        /// The operand token.
        token:    String,
        /// Zero-based token index.
        position: usize,
    },
    /// A whole-number part does not fit into a 64-bit integer.
    LiteralTooLarge {
        /// Zero-based token index.
        position: usize,
    },
}

impl ParseError {
    /// Returns `true` for the errors the validator reports, i.e. violations of
    /// token parity, alternation or mixed-number shape.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(self,
                 Self::EmptyExpression
                 | Self::EvenTokenCount { .. }
                 | Self::ExpectedOperator { .. }
                 | Self::MissingFraction { .. })
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyExpression => write!(f,
                                            "Invalid expression: input is empty. Example input: 1/2 * 3_3/4"),

            Self::EvenTokenCount { count } => write!(f,
                                                     "Invalid expression: expected an odd number of tokens but found {count}."),

            Self::ExpectedOperator { token, position } => write!(f,
                                                                 "Invalid expression at token {position}: expected one of *, /, +, - but found '{token}'."),

            Self::MissingFraction { token, position } => write!(f,
                                                                "Invalid expression at token {position}: mixed number '{token}' has no fraction part."),

            Self::InvalidOperand { token, position } => {
                write!(f, "Invalid operand at token {position}: '{token}'.")
            },

            Self::LiteralTooLarge { position } => {
                write!(f, "Invalid operand at token {position}: literal is too large.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
