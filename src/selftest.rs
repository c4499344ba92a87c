use crate::{
    SolveOptions,
    interpreter::{
        formatter::format_fraction,
        normalizer::normalize,
        parser::operand::parse_operand,
        validator::validate,
    },
    solve,
};

const OPERAND_CASES: &[(&str, f64)] = &[("1/2", 0.5), ("1", 1.0), ("1_1/2", 1.5)];

const SOLVE_CASES: &[(&str, &str)] = &[("1/2 * 3_3/4", "1_7/8"),
                                       ("2_3/8 + 9/8", "3_1/2"),
                                       ("1_1/2 + 1 * 2", "3_1/2"),
                                       ("1_1/2 + 3 * 2_1/4 - 1/2 / 2", "8"),
                                       ("1/2 + 1/4", "3/4")];

const FORMAT_CASES: &[(f64, &str)] = &[(0.5, "1/2"), (3.8, "3_4/5"), (4.0, "4")];

const VALIDATE_CASES: &[(&str, bool)] = &[("1/2 * 3_3/4", true),
                                          ("2_3/8 % 9/8", false),
                                          ("1_1/2 + / 1 * 2", false),
                                          ("1_1/2 + 3 2_1/4 - 1/2 / 2", false),
                                          ("1/2 + 2_14", false)];

const NORMALIZE_CASES: &[(&str, &str)] =
    &[("1/2   *  3_3/4", "1/2 * 3_3/4"),
      ("1_1/2    + 3 *   2_1/4   -   1/2  / 2", "1_1/2 + 3 * 2_1/4 - 1/2 / 2")];

/// A self-test case whose result did not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelfTestFailure {
    /// Which stage the case exercises, e.g. `solve`.
    pub stage:    &'static str,
    /// The input, as written.
    pub input:    String,
    /// The expected result, as written.
    pub expected: String,
    /// What was produced instead.
    pub actual:   String,
}

impl std::fmt::Display for SelfTestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Self-test failed: {}({:?}) returned {} but {} was expected.",
               self.stage, self.input, self.actual, self.expected)
    }
}

impl std::error::Error for SelfTestFailure {}

fn expect<I, T>(stage: &'static str, input: I, expected: T, actual: T) -> Result<(), SelfTestFailure>
    where I: std::fmt::Debug,
          T: std::fmt::Debug + PartialEq
{
    if actual == expected {
        return Ok(());
    }
    Err(SelfTestFailure { stage,
                          input: format!("{input:?}"),
                          expected: format!("{expected:?}"),
                          actual: format!("{actual:?}") })
}

/// Runs the fixed table of known-good cases.
///
/// Stops at the first mismatch.
///
/// # Errors
/// The first failing case.
///
/// # Example
/// ```
/// assert_eq!(mixfrac::selftest::run(), Ok(18));
/// ```
pub fn run() -> Result<usize, SelfTestFailure> {
    let mut passed = 0;

    for &(input, expected) in OPERAND_CASES {
        let actual = parse_operand(input, 0).ok().and_then(|operand| operand.value().ok());
        expect("parse_operand", input, Some(expected), actual)?;
        passed += 1;
    }

    for &(input, expected) in SOLVE_CASES {
        expect("solve", input, Ok(expected.to_string()), solve(input).map_err(|e| e.to_string()))?;
        passed += 1;
    }

    let precision = SolveOptions::default().precision;
    for &(input, expected) in FORMAT_CASES {
        let actual = format_fraction(input, precision).map_err(|e| e.to_string());
        expect("format_fraction", input, Ok(expected.to_string()), actual)?;
        passed += 1;
    }

    for &(input, expected) in VALIDATE_CASES {
        expect("validate", input, expected, validate(input))?;
        passed += 1;
    }

    for &(input, expected) in NORMALIZE_CASES {
        expect("normalize", input, expected.to_string(), normalize(input))?;
        passed += 1;
    }

    Ok(passed)
}
