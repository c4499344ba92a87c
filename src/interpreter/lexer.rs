use logos::Logos;

/// The shape of a single operand token.
///
/// An operand token must lex as exactly one of these variants covering the
/// whole token. The lexer only classifies; digits are converted by the
/// parser.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(subpattern int = r"[+-]?[0-9]+")]
#[logos(subpattern real = r"[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?")]
pub enum OperandShape {
    /// A mixed number such as `3_3/4`. The whole part is an integer.
    #[regex(r"(?&int)_(?&real)/(?&real)")]
    Mixed,
    /// A proper or improper fraction such as `9/8`.
    #[regex(r"(?&real)/(?&real)")]
    Fraction,
    /// A plain integer or decimal literal such as `4`, `2.5`, `5.` or `1e3`.
    #[regex(r"(?&real)")]
    Number,
}

impl OperandShape {
    /// Classifies a whole token.
    ///
    /// Returns `None` unless the token is exactly one operand shape.
    ///
    /// # Example
    /// ```
    /// use mixfrac::interpreter::lexer::OperandShape;
    ///
    /// assert_eq!(OperandShape::classify("3_3/4"), Some(OperandShape::Mixed));
    /// assert_eq!(OperandShape::classify("9/8"), Some(OperandShape::Fraction));
    /// assert_eq!(OperandShape::classify("-2.5"), Some(OperandShape::Number));
    /// assert_eq!(OperandShape::classify("1e3"), Some(OperandShape::Number));
    /// assert_eq!(OperandShape::classify("1/2e1"), Some(OperandShape::Fraction));
    /// assert_eq!(OperandShape::classify("1/2/3"), None);
    /// assert_eq!(OperandShape::classify("abc"), None);
    /// assert_eq!(OperandShape::classify(""), None);
    /// ```
    #[must_use]
    pub fn classify(token: &str) -> Option<Self> {
        let mut lexer = Self::lexer(token);
        let shape = lexer.next()?.ok()?;
        if lexer.span() != (0..token.len()) || lexer.next().is_some() {
            return None;
        }
        Some(shape)
    }
}
