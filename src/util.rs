/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between `i64` and `f64`
/// without risking silent data loss. Whole-number parts of operands and of
/// results pass through these helpers.
///
/// All functions return a `Result`, which is `Ok` if the conversion is lossless
/// and valid, or an error if the value is out of range or not finite.
pub mod num;
