use mixfrac::{
    Rational,
    error::RuntimeError,
    interpreter::{
        formatter::format_fraction,
        lexer::OperandShape,
        normalizer::normalize,
        parser::operand::parse_operand,
        validator::validate,
    },
    rational_approximation,
};

const EPS: f64 = 1e-6;

#[test]
fn normalize_is_idempotent() {
    for src in ["", " ", "    ", "1/2   *  3_3/4", "  a  b  ", "1\t\t+  2", " x", "y "] {
        let once = normalize(src);
        assert_eq!(normalize(&once), once, "'{src}'");
        assert!(!once.contains("  "), "'{src}' -> '{once}'");
    }
}

#[test]
fn mixed_operands_parse_to_their_value() {
    for (whole, numerator, denominator) in [(0, 1, 2), (3, 3, 4), (2, 14, 3), (10, 0, 7), (1, 9, 8)] {
        let token = format!("{whole}_{numerator}/{denominator}");
        let value = parse_operand(&token, 0).unwrap().value().unwrap();
        let expected = f64::from(whole) + f64::from(numerator) / f64::from(denominator);
        assert!((value - expected).abs() < 1e-9, "{token}: {value} != {expected}");
    }
}

#[test]
fn zero_denominator_operand_fails_on_evaluation() {
    let operand = parse_operand("2_1/0", 6).unwrap();
    assert_eq!(operand.value(), Err(RuntimeError::DivisionByZero { position: 6 }));
}

#[test]
fn operand_shapes() {
    assert_eq!(OperandShape::classify("+.5"), Some(OperandShape::Number));
    assert_eq!(OperandShape::classify("1.5/2"), Some(OperandShape::Fraction));
    assert_eq!(OperandShape::classify("1.5_1/2"), None);
    assert_eq!(OperandShape::classify("1_2_3/4"), None);
    assert_eq!(OperandShape::classify("3_/4"), None);
    assert_eq!(OperandShape::classify("-"), None);
}

#[test]
fn even_token_counts_are_rejected() {
    for src in ["1 +", "1 + 2 *", "1/2 1/2", " 1", "1 "] {
        assert!(!validate(src), "'{src}'");
    }
}

#[test]
fn small_mixed_numbers_round_trip() {
    for (value, expected) in [(0.5, "1/2"),
                              (3.8, "3_4/5"),
                              (4.0, "4"),
                              (1.0 + 7.0 / 8.0, "1_7/8"),
                              (2.0 / 3.0, "2/3"),
                              (5.0 + 11.0 / 12.0, "5_11/12")]
    {
        assert_eq!(format_fraction(value, EPS).unwrap(), expected, "{value}");
    }
}

#[test]
fn negative_zero_and_tiny_remainders() {
    assert_eq!(format_fraction(-0.0, EPS).unwrap(), "0");
    assert_eq!(format_fraction(1e-9, EPS).unwrap(), "0");
    assert_eq!(format_fraction(-1e-9, EPS).unwrap(), "0");
    assert_eq!(format_fraction(2.999_999_9, EPS).unwrap(), "3");
    assert_eq!(format_fraction(-2.999_999_9, EPS).unwrap(), "-3");
}

#[test]
fn non_finite_values_cannot_be_formatted() {
    assert!(matches!(format_fraction(f64::INFINITY, EPS),
                     Err(RuntimeError::NonFinite { .. })));
    assert!(matches!(format_fraction(f64::NAN, EPS), Err(RuntimeError::NonFinite { .. })));
}

#[test]
fn continued_fraction_convergents() {
    assert_eq!(rational_approximation(0.875, EPS).unwrap(), Rational { num: 7, den: 8 });
    assert_eq!(rational_approximation(2.5, EPS).unwrap(), Rational { num: 5, den: 2 });
    assert_eq!(rational_approximation(0.0, EPS).unwrap(), Rational { num: 0, den: 1 });

    let pi = rational_approximation(std::f64::consts::PI, EPS).unwrap();
    assert_eq!(pi, Rational { num: 355, den: 113 });
    assert_eq!(pi.to_string(), "355/113");
}

#[test]
fn continued_fraction_rejects_bad_input() {
    assert_eq!(rational_approximation(0.5, 0.0),
               Err(RuntimeError::InvalidPrecision { eps: 0.0 }));
    assert!(matches!(rational_approximation(f64::NAN, EPS),
                     Err(RuntimeError::NonFinite { .. })));
    assert_eq!(rational_approximation(1e-30, 1e-300),
               Err(RuntimeError::Overflow));
}
