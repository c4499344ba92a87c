/// Core evaluation logic and options.
///
/// Contains the evaluator, its options and the result type shared by
/// evaluation and formatting.
pub mod core;

/// Operator precedence.
///
/// Describes which operator an expression is split around first, for both the
/// legacy and the standard rules.
pub mod precedence;
