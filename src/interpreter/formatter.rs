/// Continued-fraction rational approximation.
pub mod rational;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, formatter::rational::rational_approximation},
    util::num::{f64_trunc_to_i64, i64_to_f64_checked},
};

/// Renders a value as a whole number, fraction or mixed number.
///
/// The value is split into its whole part (truncated toward zero) and a
/// remainder. The magnitude of the remainder is approximated to within `eps`
/// by a continued fraction, and the sign is written once in front:
///
/// | value  | output   |
/// |--------|----------|
/// | `4.0`  | `4`      |
/// | `0.5`  | `1/2`    |
/// | `3.8`  | `3_4/5`  |
/// | `-1.5` | `-1_1/2` |
///
/// A remainder that approximates to a whole unit is carried into the whole
/// part, and one that approximates to zero is dropped.
///
/// # Errors
/// - `NonFinite` for infinite or NaN values.
/// - `LiteralTooLarge` if the whole part is not exactly representable.
/// - `InvalidPrecision` / `Overflow` from the approximation.
///
/// # Example
/// ```
/// use mixfrac::interpreter::formatter::format_fraction;
///
/// assert_eq!(format_fraction(0.5, 1e-6).unwrap(), "1/2");
/// assert_eq!(format_fraction(3.8, 1e-6).unwrap(), "3_4/5");
/// assert_eq!(format_fraction(4.0, 1e-6).unwrap(), "4");
/// assert_eq!(format_fraction(-0.25, 1e-6).unwrap(), "-1/4");
/// ```
pub fn format_fraction(value: f64, eps: f64) -> EvalResult<String> {
    let whole = f64_trunc_to_i64(value)?;
    let remainder = value - i64_to_f64_checked(whole, RuntimeError::LiteralTooLarge)?;
    if remainder == 0.0 {
        return Ok(whole.to_string());
    }

    let rational = rational_approximation(remainder.abs(), eps)?;
    trace!(remainder, %rational, "approximated remainder");

    let mut whole = whole.unsigned_abs();
    let mut numerator = rational.num.unsigned_abs();
    let denominator = rational.den.unsigned_abs();
    whole += numerator / denominator;
    numerator %= denominator;

    let sign = if value < 0.0 && (whole != 0 || numerator != 0) { "-" } else { "" };
    Ok(match (whole, numerator) {
           (whole, 0) => format!("{sign}{whole}"),
           (0, numerator) => format!("{sign}{numerator}/{denominator}"),
           (whole, numerator) => format!("{sign}{whole}_{numerator}/{denominator}"),
       })
}
