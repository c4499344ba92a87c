use crate::ast::{Operator, OperatorToken};

/// Which occurrence of an operator class an expression is split at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitAt {
    /// The first matching operator.
    Leftmost,
    /// The last matching operator.
    Rightmost,
}

/// A group of operators that bind equally loosely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OperatorClass {
    /// Operators in the class.
    pub operators: &'static [Operator],
    /// Which occurrence wins when several are present.
    pub split_at:  SplitAt,
}

impl OperatorClass {
    /// Returns the index of the operator to split at, if any operator of the
    /// class occurs.
    #[must_use]
    pub fn find(&self, operators: &[OperatorToken]) -> Option<usize> {
        let matches = |token: &OperatorToken| self.operators.contains(&token.op);
        match self.split_at {
            SplitAt::Leftmost => operators.iter().position(matches),
            SplitAt::Rightmost => operators.iter().rposition(matches),
        }
    }
}

const LEGACY: &[OperatorClass] =
    &[OperatorClass { operators: &[Operator::Subtract],
                      split_at:  SplitAt::Leftmost, },
      OperatorClass { operators: &[Operator::Add],
                      split_at:  SplitAt::Leftmost, },
      OperatorClass { operators: &[Operator::Divide],
                      split_at:  SplitAt::Leftmost, },
      OperatorClass { operators: &[Operator::Multiply],
                      split_at:  SplitAt::Leftmost, }];

const STANDARD: &[OperatorClass] =
    &[OperatorClass { operators: &[Operator::Add, Operator::Subtract],
                      split_at:  SplitAt::Rightmost, },
      OperatorClass { operators: &[Operator::Multiply, Operator::Divide],
                      split_at:  SplitAt::Rightmost, }];

/// Operator precedence rules.
///
/// Each rule is an ordered list of operator classes. An expression is split
/// around the first class that occurs in it, so earlier classes bind more
/// loosely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Precedence {
    /// `-` before `+` before `/` before `*`, each split at its leftmost
    /// occurrence. `5 - 2 - 1` is `5 - (2 - 1)` and `8 / 2 * 2` is
    /// `8 / (2 * 2)`.
    #[default]
    Legacy,
    /// Conventional arithmetic: `+`/`-` bind looser than `*`/`/` and all
    /// operators are left-associative.
    Standard,
}

impl Precedence {
    /// The operator classes, loosest first.
    #[must_use]
    pub const fn classes(self) -> &'static [OperatorClass] {
        match self {
            Self::Legacy => LEGACY,
            Self::Standard => STANDARD,
        }
    }

    /// Returns the index of the operator an expression is split around.
    ///
    /// Returns `None` only for an empty operator list.
    ///
    /// # Example
    /// ```
    /// use mixfrac::{
    ///     ast::{Operator, OperatorToken},
    ///     interpreter::evaluator::precedence::Precedence,
    /// };
    ///
    /// let ops: Vec<_> = [Operator::Add, Operator::Multiply, Operator::Subtract, Operator::Divide]
    ///     .into_iter()
    ///     .enumerate()
    ///     .map(|(i, op)| OperatorToken { op, position: 2 * i + 1 })
    ///     .collect();
    ///
    /// assert_eq!(Precedence::Legacy.split_index(&ops), Some(2));
    /// assert_eq!(Precedence::Standard.split_index(&ops), Some(2));
    /// assert_eq!(Precedence::Legacy.split_index(&ops[..2]), Some(0));
    /// assert_eq!(Precedence::Legacy.split_index(&[]), None);
    /// ```
    #[must_use]
    pub fn split_index(self, operators: &[OperatorToken]) -> Option<usize> {
        self.classes().iter().find_map(|class| class.find(operators))
    }
}
