use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
    util::num::f64_floor_to_i64,
};

/// A numerator/denominator pair with a positive denominator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rational {
    /// Numerator; carries the sign.
    pub num: i64,
    /// Denominator; always positive.
    pub den: i64,
}

impl std::fmt::Display for Rational {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.num, self.den)
    }
}

/// Approximates `x0` by a fraction using its continued-fraction expansion.
///
/// Convergents `h/k` are generated until the unexpanded tail `x - a` is no
/// larger than `eps * k * k`. Inputs built from small fractions stop after a
/// handful of terms. Negative inputs are expanded as-is; the first term is
/// then negative and the numerator carries the sign.
///
/// # Errors
/// - `InvalidPrecision` unless `eps` is positive and finite.
/// - `NonFinite` for infinite or NaN `x0`.
/// - `Overflow` if a convergent no longer fits into an `i64`.
///
/// # Example
/// ```
/// use mixfrac::interpreter::formatter::rational::{Rational, rational_approximation};
///
/// assert_eq!(rational_approximation(0.75, 1e-6).unwrap(),
///            Rational { num: 3, den: 4 });
/// assert_eq!(rational_approximation(-0.5, 1e-6).unwrap(),
///            Rational { num: -1, den: 2 });
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn rational_approximation(x0: f64, eps: f64) -> EvalResult<Rational> {
    if !(eps.is_finite() && eps > 0.0) {
        return Err(RuntimeError::InvalidPrecision { eps });
    }
    if !x0.is_finite() {
        return Err(RuntimeError::NonFinite { value: x0 });
    }

    let mut x = x0;
    let mut a = x.floor();
    let (mut h1, mut k1, mut h, mut k) = (1_i64, 0_i64, f64_floor_to_i64(a)?, 1_i64);

    while x - a > eps * (k as f64) * (k as f64) {
        x = 1.0 / (x - a);
        a = x.floor();
        let term = f64_floor_to_i64(a)?;
        let next_h = convergent(term, h, h1)?;
        let next_k = convergent(term, k, k1)?;
        (h1, k1, h, k) = (h, k, next_h, next_k);
        trace!(term, h, k, "continued-fraction convergent");
    }

    Ok(Rational { num: h, den: k })
}

/// `previous2 + term * previous1`, checked.
fn convergent(term: i64, previous1: i64, previous2: i64) -> EvalResult<i64> {
    term.checked_mul(previous1)
        .and_then(|product| product.checked_add(previous2))
        .ok_or(RuntimeError::Overflow)
}
