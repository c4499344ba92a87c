use std::fs;

use mixfrac::{
    Precedence, SolveOptions,
    error::{Error, ParseError, RuntimeError},
    evaluate, selftest, solve, solve_with,
};
use walkdir::WalkDir;

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "txt"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            let actual = solve(&expression);
            if expected == "error" {
                assert!(actual.is_err(),
                        "{path:?}: '{expression}' returned {actual:?} but should fail");
            } else {
                assert_eq!(actual.as_deref(),
                           Ok(expected.as_str()),
                           "{path:?}: '{expression}'");
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

/// Reads `expression => expected` lines, skipping blanks and `#` comments.
fn extract_cases(content: &str) -> Vec<(String, String)> {
    content.lines()
           .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
           .filter_map(|line| {
               let (expression, expected) = line.split_once("=>")?;
               let expression = expression.strip_suffix(' ').unwrap_or(expression);
               Some((expression.to_string(), expected.trim().to_string()))
           })
           .collect()
}

fn assert_solves(src: &str, expected: &str) {
    match solve(src) {
        Ok(result) => assert_eq!(result, expected, "'{src}'"),
        Err(e) => panic!("'{src}' failed: {e}"),
    }
}

fn assert_failure(src: &str) -> Error {
    match solve(src) {
        Ok(result) => panic!("'{src}' succeeded with {result} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn challenge_examples() {
    assert_solves("1/2 * 3_3/4", "1_7/8");
    assert_solves("2_3/8 + 9/8", "3_1/2");
    assert_solves("1_1/2 + 1 * 2", "3_1/2");
    assert_solves("1_1/2 + 3 * 2_1/4 - 1/2 / 2", "8");
    assert_solves("1/2 + 1/4", "3/4");
}

#[test]
fn malformed_expressions_are_parse_errors() {
    assert_eq!(assert_failure(""), Error::Parse(ParseError::EmptyExpression));
    assert_eq!(assert_failure("1 +"), Error::Parse(ParseError::EvenTokenCount { count: 2 }));
    assert_eq!(assert_failure("2_3/8 % 9/8"),
               Error::Parse(ParseError::ExpectedOperator { token:    "%".to_string(),
                                                           position: 1, }));
    assert_eq!(assert_failure("1/2 + 2_14"),
               Error::Parse(ParseError::MissingFraction { token:    "2_14".to_string(),
                                                          position: 2, }));

    for src in ["", "1 +", "2_3/8 % 9/8", "1_1/2 + / 1 * 2", "1/2 + 2_14"] {
        match assert_failure(src) {
            Error::Parse(e) => assert!(e.is_malformed(), "'{src}': {e}"),
            Error::Runtime(e) => panic!("'{src}' should be malformed, got {e}"),
        }
    }
}

#[test]
fn unparsable_operands_are_rejected_after_validation() {
    assert!(mixfrac::validate("abc + 1"));
    assert_eq!(assert_failure("abc + 1"),
               Error::Parse(ParseError::InvalidOperand { token:    "abc".to_string(),
                                                         position: 0, }));
    assert_eq!(assert_failure("1 * 99999999999999999999_1/2"),
               Error::Parse(ParseError::LiteralTooLarge { position: 2 }));
    assert!(matches!(assert_failure("1e + 1"),
                     Error::Parse(ParseError::InvalidOperand { position: 0, .. })));
}

#[test]
fn exponent_and_trailing_dot_literals_parse() {
    assert_solves("1e3 + 1", "1001");
    assert_solves("5. + 1", "6");
    assert_solves("1/2e1", "1/20");
    assert_solves("2_1/1e1 * 10", "21");
    assert_eq!(assert_failure("1e308 * 10"),
               Error::Runtime(RuntimeError::NonFinite { value: f64::INFINITY }));
}

#[test]
fn negative_whole_part_adds_the_fraction() {
    assert_solves("-1_1/2", "-1/2");
    assert_solves("-2_1/4 * 2", "-3_1/2");
}

#[test]
fn division_by_zero_reports_position() {
    assert_eq!(assert_failure("1/0 + 1"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 0 }));
    assert_eq!(assert_failure("3 * 1 / 0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 3 }));
    assert_eq!(assert_failure("1 / 1/2 * 0"),
               Error::Runtime(RuntimeError::DivisionByZero { position: 1 }));
}

#[test]
fn negative_results_carry_the_sign_once() {
    assert_solves("1/2 - 2", "-1_1/2");
    assert_solves("1/4 - 1/2", "-1/4");
    assert_solves("1 - 3", "-2");
}

#[test]
fn legacy_and_standard_precedence_differ() {
    let standard = SolveOptions { precedence: Precedence::Standard,
                                  ..SolveOptions::default() };

    assert_solves("5 - 2 - 1", "4");
    assert_eq!(solve_with("5 - 2 - 1", &standard).unwrap(), "2");

    assert_solves("8 / 2 * 2", "2");
    assert_eq!(solve_with("8 / 2 * 2", &standard).unwrap(), "8");

    assert_solves("1/2 * 4 - 1 + 1/3", "2/3");
    assert_eq!(solve_with("1/2 * 4 - 1 + 1/3", &standard).unwrap(), "1_1/3");
}

#[test]
fn precision_is_validated() {
    let options = SolveOptions { precision: -1.0,
                                 ..SolveOptions::default() };
    assert_eq!(solve_with("1/2", &options),
               Err(Error::Runtime(RuntimeError::InvalidPrecision { eps: -1.0 })));
}

#[test]
fn coarse_precision_gives_simpler_fractions() {
    let coarse = SolveOptions { precision: 0.01,
                                ..SolveOptions::default() };
    assert_eq!(solve_with("1/3 + 1/1000", &coarse).unwrap(), "1/3");
    assert_eq!(solve("1/3 + 1/1000").unwrap(), "223/667");
}

#[test]
fn results_beyond_exact_integers_are_errors() {
    assert_eq!(assert_failure("9007199254740993 * 2"),
               Error::Runtime(RuntimeError::LiteralTooLarge));
}

#[test]
fn evaluate_returns_raw_value() {
    let value = evaluate("2_3/8 + 9/8", &SolveOptions::default()).unwrap();
    assert!((value - 3.5).abs() < 1e-12);
}

#[test]
fn selftest_table_passes() {
    assert_eq!(selftest::run(), Ok(18));
}
