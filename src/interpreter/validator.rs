use tracing::debug;

use crate::{
    ast::Operator,
    error::ParseError,
    interpreter::{normalizer::normalize, parser::ParseResult},
};

/// The separator between the whole part and the fraction of a mixed number.
pub const MIXED_SEPARATOR: char = '_';
/// The separator between numerator and denominator.
pub const FRACTION_SEPARATOR: char = '/';

/// Returns `true` if the input is a well-formed expression.
///
/// The input is normalized first. Only the token structure is checked;
/// operands such as `abc` are accepted here and rejected by the parser.
///
/// # Example
/// ```
/// use mixfrac::interpreter::validator::validate;
///
/// assert!(validate("1/2 * 3_3/4"));
/// assert!(!validate("2_3/8 % 9/8"));
/// assert!(!validate("1_1/2 + / 1 * 2"));
/// assert!(!validate("1/2 + 2_14"));
/// assert!(!validate(""));
/// ```
#[must_use]
pub fn validate(input: &str) -> bool {
    check(input).is_ok()
}

/// Checks an expression and reports why it is malformed.
///
/// # Errors
/// - `EmptyExpression` for an empty input.
/// - `EvenTokenCount` if the expression splits into an even number of tokens.
/// - `ExpectedOperator` if an odd-indexed token is not `*`, `/`, `+` or `-`.
/// - `MissingFraction` if an operand has a `_` but no `/`.
pub fn check(input: &str) -> ParseResult<()> {
    split_tokens(&normalize(input)).map(|_| ())
}

/// Splits a normalized expression on single spaces and checks the token
/// structure.
///
/// Returns the tokens in order on success.
///
/// # Errors
/// The same errors as [`check`].
///
/// # Example
/// ```
/// use mixfrac::{error::ParseError, interpreter::validator::split_tokens};
///
/// assert_eq!(split_tokens("1/2 + 1/4").unwrap(), vec!["1/2", "+", "1/4"]);
/// assert_eq!(split_tokens("1_1/2 + 3 2_1/4 - 1/2 / 2"),
///            Err(ParseError::EvenTokenCount { count: 8 }));
/// assert_eq!(split_tokens("1 + 2 3 4"),
///            Err(ParseError::ExpectedOperator { token:    "3".to_string(),
///                                               position: 3, }));
/// ```
pub fn split_tokens(normalized: &str) -> ParseResult<Vec<&str>> {
    if normalized.is_empty() {
        return Err(ParseError::EmptyExpression);
    }

    let tokens: Vec<&str> = normalized.split(' ').collect();
    if tokens.len() % 2 == 0 {
        debug!(count = tokens.len(), "rejecting even token count");
        return Err(ParseError::EvenTokenCount { count: tokens.len() });
    }

    for (position, token) in tokens.iter().enumerate() {
        let expects_operator = position % 2 == 1;
        if expects_operator {
            if Operator::from_token(token).is_none() {
                return Err(ParseError::ExpectedOperator { token: (*token).to_string(),
                                                          position });
            }
        } else if token.contains(MIXED_SEPARATOR) && !token.contains(FRACTION_SEPARATOR) {
            return Err(ParseError::MissingFraction { token: (*token).to_string(),
                                                     position });
        }
    }

    Ok(tokens)
}
