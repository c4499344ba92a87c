/// The evaluator module computes the value of a parsed expression.
///
/// The evaluator splits the expression around the operator that binds
/// loosest under the active precedence rules, evaluates both halves
/// recursively and combines them.
///
/// # Responsibilities
/// - Applies the legacy or standard operator precedence.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The formatter module renders a value as a whole number, fraction or mixed
/// number.
///
/// # Responsibilities
/// - Splits a value into a whole part and a remainder.
/// - Approximates the remainder by a continued fraction.
/// - Reports values that cannot be written as a fraction.
pub mod formatter;
/// The lexer module classifies a single operand token.
///
/// The lexer recognises the three operand shapes (plain number, fraction and
/// mixed number) so that the parser only has to split and convert digits.
pub mod lexer;
/// The normalizer module collapses runs of spaces in the raw input.
pub mod normalizer;
/// The parser module builds an [`Expression`](crate::ast::Expression) from
/// validated tokens.
///
/// # Responsibilities
/// - Converts operand tokens into [`ParsedNumber`](crate::ast::ParsedNumber)
///   values.
/// - Maps operator tokens to [`Operator`](crate::ast::Operator)s.
/// - Keeps each token's position for error reporting.
pub mod parser;
/// The validator module checks token parity, operand/operator alternation and
/// mixed-number shape before anything is parsed.
pub mod validator;
