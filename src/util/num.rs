use crate::{error::RuntimeError, interpreter::evaluator::core::EvalResult};

/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `i64` to `f64` if and only if it is exactly
/// representable.
///
/// ## Errors
/// Returns `Err(error)` if the value exceeds `MAX_SAFE_U64_INT` in absolute
/// value.
///
/// ## Parameters
/// - `value`: The integer to convert.
/// - `error`: The error to return if conversion is not lossless.
///
/// ## Example
/// ```
/// use mixfrac::util::num::{MAX_SAFE_U64_INT, i64_to_f64_checked};
///
/// let result = i64_to_f64_checked(42, "too big!");
/// assert_eq!(result.unwrap(), 42.0);
///
/// let big = MAX_SAFE_U64_INT as i64 + 1;
/// assert!(i64_to_f64_checked(big, "too big!").is_err());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn i64_to_f64_checked<E>(value: i64, error: E) -> Result<f64, E> {
    if value.unsigned_abs() > MAX_SAFE_U64_INT {
        return Err(error);
    }
    Ok(value as f64)
}

/// Truncates an `f64` toward zero and converts it to `i64`.
///
/// Unlike a bare `as` cast, this never saturates: infinities, NaN and values
/// outside the exactly representable range are reported.
///
/// ## Errors
/// - `RuntimeError::NonFinite` for infinite or NaN input.
/// - `RuntimeError::LiteralTooLarge` if the magnitude exceeds
///   `MAX_SAFE_U64_INT`.
///
/// ## Example
/// ```
/// use mixfrac::{error::RuntimeError, util::num::f64_trunc_to_i64};
///
/// assert_eq!(f64_trunc_to_i64(3.8).unwrap(), 3);
/// assert_eq!(f64_trunc_to_i64(-1.5).unwrap(), -1);
///
/// let err = f64_trunc_to_i64(f64::INFINITY).unwrap_err();
/// assert!(matches!(err, RuntimeError::NonFinite { .. }));
///
/// let err = f64_trunc_to_i64(1e20).unwrap_err();
/// assert_eq!(err, RuntimeError::LiteralTooLarge);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_trunc_to_i64(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::NonFinite { value });
    }
    let whole = value.trunc();
    if whole.abs() > MAX_SAFE_U64_INT as f64 {
        return Err(RuntimeError::LiteralTooLarge);
    }
    Ok(whole as i64)
}

/// Converts a floored convergent term to `i64`, rejecting terms that would
/// not fit.
///
/// ## Errors
/// - `RuntimeError::NonFinite` for infinite or NaN input.
/// - `RuntimeError::Overflow` if the term is outside the `i64` range.
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
pub fn f64_floor_to_i64(value: f64) -> EvalResult<i64> {
    if !value.is_finite() {
        return Err(RuntimeError::NonFinite { value });
    }
    let floored = value.floor();
    if floored < i64::MIN as f64 || floored >= i64::MAX as f64 {
        return Err(RuntimeError::Overflow);
    }
    Ok(floored as i64)
}
