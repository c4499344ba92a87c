/// Operand parsing.
///
/// Converts a single operand token into a [`ParsedNumber`] once the lexer has
/// classified its shape.
pub mod operand;

use tracing::trace;

use crate::{
    ast::{Expression, Operator, OperatorToken},
    error::ParseError,
    interpreter::parser::operand::parse_operand,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses validated tokens into an [`Expression`].
///
/// Even positions are operands and odd positions are operators. The tokens
/// usually come from
/// [`split_tokens`](crate::interpreter::validator::split_tokens), but the
/// structure is checked again so that arbitrary token lists are safe.
///
/// # Errors
/// - `EvenTokenCount` (including zero tokens).
/// - `ExpectedOperator` for a bad operator token.
/// - `InvalidOperand` / `LiteralTooLarge` from [`parse_operand`].
///
/// # Example
/// ```
/// use mixfrac::{ast::Operator, interpreter::parser::parse_expression};
///
/// let expr = parse_expression(&["1/2", "*", "3_3/4"]).unwrap();
/// assert_eq!(expr.operands().len(), 2);
/// assert_eq!(expr.operators()[0].op, Operator::Multiply);
/// assert_eq!(expr.operators()[0].position, 1);
/// ```
pub fn parse_expression(tokens: &[&str]) -> ParseResult<Expression> {
    let mut operands = Vec::with_capacity(tokens.len() / 2 + 1);
    let mut operators = Vec::with_capacity(tokens.len() / 2);

    for (position, token) in tokens.iter().enumerate() {
        if position % 2 == 0 {
            operands.push(parse_operand(token, position)?);
        } else {
            let Some(op) = Operator::from_token(token) else {
                return Err(ParseError::ExpectedOperator { token: (*token).to_string(),
                                                          position });
            };
            operators.push(OperatorToken { op, position });
        }
    }

    trace!(operands = operands.len(), operators = operators.len(), "parsed expression");
    Expression::new(operands, operators).ok_or(ParseError::EvenTokenCount { count: tokens.len() })
}
