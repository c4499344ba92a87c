use tracing::trace;

use crate::{
    ast::{ExprView, Expression},
    error::RuntimeError,
    interpreter::evaluator::precedence::Precedence,
};

/// Result type used by the evaluator and formatter.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default absolute precision of the continued-fraction approximation.
pub const DEFAULT_PRECISION: f64 = 1.0e-6;

/// Settings for evaluating and formatting an expression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Which operator an expression is split around first.
    pub precedence: Precedence,
    /// Absolute precision used when approximating the fractional remainder.
    pub precision:  f64,
}

impl Default for Options {
    fn default() -> Self {
        Self { precedence: Precedence::default(),
               precision:  DEFAULT_PRECISION, }
    }
}

impl Options {
    /// Checks that the precision is a positive finite number.
    ///
    /// # Errors
    /// `InvalidPrecision` otherwise.
    ///
    /// # Example
    /// ```
    /// use mixfrac::interpreter::evaluator::core::Options;
    ///
    /// assert!(Options::default().validated().is_ok());
    ///
    /// let options = Options { precision: 0.0,
    ///                         ..Options::default() };
    /// assert!(options.validated().is_err());
    /// ```
    pub fn validated(self) -> EvalResult<Self> {
        if self.precision.is_finite() && self.precision > 0.0 {
            Ok(self)
        } else {
            Err(RuntimeError::InvalidPrecision { eps: self.precision })
        }
    }
}

/// Evaluates expressions under a fixed precedence.
///
/// The evaluator holds no state between calls; it can be reused freely.
#[derive(Debug, Clone, Copy, Default)]
pub struct Evaluator {
    precedence: Precedence,
}

impl Evaluator {
    /// Creates an evaluator for the given precedence.
    #[must_use]
    pub const fn new(precedence: Precedence) -> Self {
        Self { precedence }
    }

    /// Evaluates a whole expression.
    ///
    /// # Example
    /// ```
    /// use mixfrac::interpreter::{
    ///     evaluator::{core::Evaluator, precedence::Precedence},
    ///     parser::parse_expression,
    /// };
    ///
    /// let expr = parse_expression(&["5", "-", "2", "-", "1"]).unwrap();
    ///
    /// // 5 - (2 - 1)
    /// assert_eq!(Evaluator::new(Precedence::Legacy).eval(&expr).unwrap(), 4.0);
    /// // (5 - 2) - 1
    /// assert_eq!(Evaluator::new(Precedence::Standard).eval(&expr).unwrap(), 2.0);
    /// ```
    pub fn eval(&self, expression: &Expression) -> EvalResult<f64> {
        self.eval_view(expression.view())
    }

    /// Evaluates a sub-range of an expression.
    ///
    /// A single operand evaluates to its own value. Otherwise the view is
    /// split around the operator chosen by the precedence, both halves are
    /// evaluated recursively, and the results are combined.
    pub fn eval_view(&self, view: ExprView<'_>) -> EvalResult<f64> {
        if view.operators.is_empty() {
            return view.operands[0].value();
        }

        let Some(index) = self.precedence.split_index(view.operators) else {
            unreachable!()
        };
        let (left, op, right) = view.split_at(index);
        trace!(op = %op.op, position = op.position, "splitting expression");

        let left = self.eval_view(left)?;
        let right = self.eval_view(right)?;
        op.op.apply(left, right, op.position)
    }
}
