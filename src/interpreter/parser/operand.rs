use std::num::IntErrorKind;

use crate::{
    ast::{Operand, ParsedNumber},
    error::ParseError,
    interpreter::{
        lexer::OperandShape,
        parser::ParseResult,
        validator::{FRACTION_SEPARATOR, MIXED_SEPARATOR},
    },
    util::num::i64_to_f64_checked,
};

/// Parses one operand token.
///
/// Accepted forms:
/// - plain integers and decimals: `4`, `-2`, `0.75`
/// - fractions: `1/2`, `9/8`
/// - mixed numbers: `3_3/4`
///
/// A zero denominator is accepted here and reported when the operand is
/// evaluated.
///
/// # Errors
/// - `InvalidOperand` if the token is none of the forms above.
/// - `LiteralTooLarge` if the whole part is not exactly representable.
///
/// # Example
/// ```
/// use mixfrac::{error::ParseError, interpreter::parser::operand::parse_operand};
///
/// assert_eq!(parse_operand("1/2", 0).unwrap().value().unwrap(), 0.5);
/// assert_eq!(parse_operand("1", 0).unwrap().value().unwrap(), 1.0);
/// assert_eq!(parse_operand("1_1/2", 0).unwrap().value().unwrap(), 1.5);
///
/// assert_eq!(parse_operand("x/2", 4),
///            Err(ParseError::InvalidOperand { token:    "x/2".to_string(),
///                                             position: 4, }));
/// ```
pub fn parse_operand(token: &str, position: usize) -> ParseResult<Operand> {
    let invalid = || ParseError::InvalidOperand { token: token.to_string(),
                                                  position };

    let shape = OperandShape::classify(token).ok_or_else(invalid)?;
    let number = match shape {
        OperandShape::Number => ParsedNumber::literal(parse_real(token).ok_or_else(invalid)?),
        OperandShape::Fraction => {
            let (numerator, denominator) = split_fraction(token).ok_or_else(invalid)?;
            ParsedNumber { whole: None,
                           numerator,
                           denominator }
        },
        OperandShape::Mixed => {
            let (whole, fraction) = token.split_once(MIXED_SEPARATOR).ok_or_else(invalid)?;
            let whole = parse_whole(whole, position)?.ok_or_else(invalid)?;
            let (numerator, denominator) = split_fraction(fraction).ok_or_else(invalid)?;
            ParsedNumber { whole: Some(whole),
                           numerator,
                           denominator }
        },
    };

    Ok(Operand { number, position })
}

fn split_fraction(fraction: &str) -> Option<(f64, f64)> {
    let (numerator, denominator) = fraction.split_once(FRACTION_SEPARATOR)?;
    Some((parse_real(numerator)?, parse_real(denominator)?))
}

fn parse_real(text: &str) -> Option<f64> {
    text.parse().ok()
}

/// Parses the whole part of a mixed number.
///
/// `Ok(None)` means the text is not an integer at all; overflow is reported as
/// `LiteralTooLarge`.
fn parse_whole(text: &str, position: usize) -> ParseResult<Option<i64>> {
    match text.parse::<i64>() {
        Ok(whole) => {
            i64_to_f64_checked(whole, ParseError::LiteralTooLarge { position })?;
            Ok(Some(whole))
        },
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(ParseError::LiteralTooLarge { position })
        },
        Err(_) => Ok(None),
    }
}
