use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::i64_to_f64_checked,
};

/// The four legal binary operators.
///
/// Each operator is written as exactly one character; no other symbol is an
/// operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `+`
    Add,
    /// `-`
    Subtract,
}

impl Operator {
    /// All operators, in declaration order.
    pub const ALL: [Self; 4] = [Self::Multiply, Self::Divide, Self::Add, Self::Subtract];

    /// Maps a token to its operator.
    ///
    /// Only an exact single-character match is accepted.
    ///
    /// # Example
    /// ```
    /// use mixfrac::ast::Operator;
    ///
    /// assert_eq!(Operator::from_token("-"), Some(Operator::Subtract));
    /// assert_eq!(Operator::from_token("%"), None);
    /// assert_eq!(Operator::from_token("--"), None);
    /// ```
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.symbol() == token)
    }

    /// The symbol the operator is written as.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Add => "+",
            Self::Subtract => "-",
        }
    }

    /// Applies the operator to two values.
    ///
    /// Division by exactly zero is reported instead of producing an infinite
    /// or NaN value. `position` is the operator's token index.
    ///
    /// # Example
    /// ```
    /// use mixfrac::{ast::Operator, error::RuntimeError};
    ///
    /// assert_eq!(Operator::Divide.apply(1.0, 4.0, 1).unwrap(), 0.25);
    /// assert_eq!(Operator::Divide.apply(1.0, 0.0, 3),
    ///            Err(RuntimeError::DivisionByZero { position: 3 }));
    /// ```
    pub fn apply(self, left: f64, right: f64, position: usize) -> EvalResult<f64> {
        Ok(match self {
               Self::Multiply => left * right,
               Self::Divide => {
                   if right == 0.0 {
                       return Err(RuntimeError::DivisionByZero { position });
                   }
                   left / right
               },
               Self::Add => left + right,
               Self::Subtract => left - right,
           })
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// The decomposition of an operand token.
///
/// A plain integer or decimal literal is stored as `numerator` over a
/// denominator of `1.0` with no whole part.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedNumber {
    /// The part before `_` in a mixed number.
    pub whole:       Option<i64>,
    /// The numerator, or the literal value for a plain number.
    pub numerator:   f64,
    /// The denominator. Zero is representable but has no value.
    pub denominator: f64,
}

impl ParsedNumber {
    /// Builds a plain literal such as `4` or `2.5`.
    #[must_use]
    pub const fn literal(value: f64) -> Self {
        Self { whole:       None,
               numerator:   value,
               denominator: 1.0, }
    }

    /// Computes `whole + numerator / denominator`.
    ///
    /// The whole part is added as-is, so a negative whole part does not flip
    /// the sign of the fraction: `-1_1/2` is `-0.5`.
    ///
    /// # Errors
    /// `DivisionByZero` if the denominator is zero.
    ///
    /// # Example
    /// ```
    /// use mixfrac::ast::ParsedNumber;
    ///
    /// let n = ParsedNumber { whole:       Some(3),
    ///                        numerator:   3.0,
    ///                        denominator: 4.0, };
    /// assert_eq!(n.value(0).unwrap(), 3.75);
    /// ```
    pub fn value(&self, position: usize) -> EvalResult<f64> {
        if self.denominator == 0.0 {
            return Err(RuntimeError::DivisionByZero { position });
        }
        let whole = match self.whole {
            Some(w) => i64_to_f64_checked(w, RuntimeError::LiteralTooLarge)?,
            None => 0.0,
        };
        Ok(whole + self.numerator / self.denominator)
    }
}

/// An operand together with its token index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Operand {
    /// The parsed number.
    pub number:   ParsedNumber,
    /// Zero-based index of the token in the expression.
    pub position: usize,
}

impl Operand {
    /// Evaluates the operand.
    pub fn value(&self) -> EvalResult<f64> {
        self.number.value(self.position)
    }
}

/// An operator together with its token index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorToken {
    /// The operator.
    pub op:       Operator,
    /// Zero-based index of the token in the expression.
    pub position: usize,
}

/// A flat expression: `operand (operator operand)*`.
///
/// Always holds exactly one more operand than operators. Use
/// [`Expression::new`] to build one, which enforces this.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    operands:  Vec<Operand>,
    operators: Vec<OperatorToken>,
}

impl Expression {
    /// Builds an expression, returning `None` if the operand count is not
    /// exactly one more than the operator count.
    #[must_use]
    pub fn new(operands: Vec<Operand>, operators: Vec<OperatorToken>) -> Option<Self> {
        (operands.len() == operators.len() + 1).then_some(Self { operands, operators })
    }

    /// The operands in source order.
    #[must_use]
    pub fn operands(&self) -> &[Operand] {
        &self.operands
    }

    /// The operators in source order.
    #[must_use]
    pub fn operators(&self) -> &[OperatorToken] {
        &self.operators
    }

    /// Borrows the whole expression as a splittable view.
    #[must_use]
    pub fn view(&self) -> ExprView<'_> {
        ExprView { operands:  &self.operands,
                   operators: &self.operators, }
    }
}

/// A borrowed sub-range of an [`Expression`].
///
/// `operands.len() == operators.len() + 1` holds for every view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExprView<'a> {
    /// Operands in the view.
    pub operands:  &'a [Operand],
    /// Operators between them.
    pub operators: &'a [OperatorToken],
}

impl ExprView<'_> {
    /// Splits around the operator at `index`, excluding it.
    ///
    /// # Panics
    /// Panics if `index` is not a valid operator index.
    #[must_use]
    pub fn split_at(self, index: usize) -> (Self, OperatorToken, Self) {
        let left = Self { operands:  &self.operands[..=index],
                          operators: &self.operators[..index], };
        let right = Self { operands:  &self.operands[index + 1..],
                           operators: &self.operators[index + 1..], };
        (left, self.operators[index], right)
    }
}
