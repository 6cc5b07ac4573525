use strcalc_core::{CalculatorError, ErrorKind, StringCalculator};

fn calculator() -> StringCalculator {
    StringCalculator::new()
}

// ---------------------------------------------------------------------------------------------
// add_v1
// ---------------------------------------------------------------------------------------------

#[test]
fn add_v1_returns_zero_for_absent_or_empty_input() {
    let mut calc = calculator();
    assert_eq!(calc.add_v1(None), Ok(0));
    assert_eq!(calc.add_v1(Some("")), Ok(0));
    assert_eq!(calc.add_v1(Some("  ")), Ok(0));
}

#[test]
fn add_v1_sums_one_or_two_numbers() {
    let mut calc = calculator();
    assert_eq!(calc.add_v1(Some("1")), Ok(1));
    assert_eq!(calc.add_v1(Some("1,5")), Ok(6));
}

#[test]
fn add_v1_rejects_more_than_two_numbers() {
    let err = calculator().add_v1(Some("1,2,5")).unwrap_err();
    assert_eq!(err, CalculatorError::TooManyNumbers);
    assert_eq!(
        err.to_string(),
        "The method can only take 0, 1, or 2 numbers."
    );
}

#[test]
fn add_v1_rejects_non_numeric_values() {
    let err = calculator().add_v1(Some("x,2")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidNumber);
    assert_eq!(err.to_string(), "All inputs must be valid numbers.");
}

#[test]
fn add_v1_ignores_whitespace_around_tokens() {
    assert_eq!(calculator().add_v1(Some(" 1 , 2 ")), Ok(3));
}

// ---------------------------------------------------------------------------------------------
// add_v2
// ---------------------------------------------------------------------------------------------

#[test]
fn add_v2_returns_zero_for_absent_or_empty_input() {
    let mut calc = calculator();
    assert_eq!(calc.add_v2(None), Ok(0));
    assert_eq!(calc.add_v2(Some("")), Ok(0));
}

#[test]
fn add_v2_sums_any_count() {
    let mut calc = calculator();
    assert_eq!(calc.add_v2(Some("1")), Ok(1));
    assert_eq!(calc.add_v2(Some("1,5")), Ok(6));
    assert_eq!(calc.add_v2(Some("1,5,7,9")), Ok(22));
}

#[test]
fn add_v2_ignores_whitespace_around_tokens() {
    let mut calc = calculator();
    assert_eq!(calc.add_v2(Some(" 1 , 2 ")), Ok(3));
    assert_eq!(calc.add_v2(Some(" 1 ,2 , 3,  4")), Ok(10));
}

#[test]
fn add_v2_rejects_non_numeric_values() {
    assert_eq!(
        calculator().add_v2(Some("1,a,3")),
        Err(CalculatorError::InvalidNumber)
    );
}

#[test]
fn add_v2_does_not_split_on_newline() {
    assert_eq!(
        calculator().add_v2(Some("1\n2,3")),
        Err(CalculatorError::InvalidNumber)
    );
}

// ---------------------------------------------------------------------------------------------
// add_v3
// ---------------------------------------------------------------------------------------------

#[test]
fn add_v3_splits_on_commas_and_newlines() {
    let mut calc = calculator();
    assert_eq!(calc.add_v3(Some("1\n2,3")), Ok(6));
    assert_eq!(calc.add_v3(Some("1\n2,3\n4,5")), Ok(15));
    assert_eq!(calc.add_v3(Some("1,2,3")), Ok(6));
}

#[test]
fn add_v3_rejects_non_numeric_values() {
    assert_eq!(
        calculator().add_v3(Some("1\nfoo,3")),
        Err(CalculatorError::InvalidNumber)
    );
}

// ---------------------------------------------------------------------------------------------
// add_v4
// ---------------------------------------------------------------------------------------------

#[test]
fn add_v4_uses_semicolon_by_default() {
    assert_eq!(calculator().add_v4(Some("1;2;3")), Ok(6));
}

#[test]
fn add_v4_accepts_declared_delimiter() {
    let mut calc = calculator();
    assert_eq!(calc.add_v4(Some("//#\n4#5#6")), Ok(15));
    assert_eq!(calc.add_v4(Some("//@\n8")), Ok(8));
    assert_eq!(calc.add_v4(Some("//;\n 1 ; 2 ; 3 ")), Ok(6));
    assert_eq!(calc.add_v4(Some("//***\n1***2***3")), Ok(6));
}

#[test]
fn add_v4_rejects_non_numeric_values() {
    assert_eq!(
        calculator().add_v4(Some("//;\n1;abc;3")),
        Err(CalculatorError::InvalidNumber)
    );
}

#[test]
fn add_v4_mixed_delimiters_fail_as_invalid_number() {
    let mut calc = calculator();
    assert_eq!(
        calc.add_v4(Some("1\n2;3")),
        Err(CalculatorError::InvalidNumber)
    );
    assert_eq!(
        calc.add_v4(Some("//;\n1;2,3")),
        Err(CalculatorError::InvalidNumber)
    );
}

#[test]
fn add_v4_rejects_malformed_declaration() {
    let mut calc = calculator();
    let err = calc.add_v4(Some("//;1;2")).unwrap_err();
    assert_eq!(err, CalculatorError::InvalidFormat);
    assert_eq!(
        err.to_string(),
        "Invalid format: Custom delimiter must be followed by numbers."
    );

    assert_eq!(
        calc.add_v4(Some("//;\n")),
        Err(CalculatorError::InvalidFormat)
    );
}

// ---------------------------------------------------------------------------------------------
// add_v5
// ---------------------------------------------------------------------------------------------

#[test]
fn add_v5_reports_all_negatives_in_order() {
    let err = calculator().add_v5(Some("1;-2;-3;4")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NegativesPresent);
    assert_eq!(err.negatives(), &[-2, -3]);
    assert_eq!(err.to_string(), "Negatives not allowed: [-2, -3]");
}

#[test]
fn add_v5_reports_negatives_with_declared_delimiter() {
    let err = calculator().add_v5(Some("//;\n1;2;-3")).unwrap_err();
    assert_eq!(err.to_string(), "Negatives not allowed: [-3]");
}

#[test]
fn add_v5_accepts_single_character_declared_delimiter() {
    assert_eq!(calculator().add_v5(Some("//-\n1-2-3")), Ok(6));
}

#[test]
fn add_v5_tolerates_whitespace() {
    assert_eq!(calculator().add_v5(Some("  1 ; 2 ; 3 ")), Ok(6));
}

#[test]
fn add_v5_treats_control_characters_as_blank() {
    let mut calc = calculator();
    assert_eq!(calc.add_v5(Some("\u{1}")), Ok(0));
    assert_eq!(calc.add_v5(Some("1;\u{1}2\u{1f}")), Ok(3));
}

#[test]
fn add_v5_checks_numbers_before_negatives() {
    assert_eq!(
        calculator().add_v5(Some("-1;two;3")),
        Err(CalculatorError::InvalidNumber)
    );
}

#[test]
fn add_v5_rejects_malformed_declaration() {
    let mut calc = calculator();
    assert_eq!(
        calc.add_v5(Some("//#")),
        Err(CalculatorError::InvalidFormat)
    );
    assert_eq!(
        calc.add_v5(Some("//#\n")),
        Err(CalculatorError::InvalidFormat)
    );
}

#[test]
fn add_v5_returns_zero_for_absent_input() {
    assert_eq!(calculator().add_v5(None), Ok(0));
}

// ---------------------------------------------------------------------------------------------
// called_count
// ---------------------------------------------------------------------------------------------

#[test]
fn called_count_starts_at_zero() {
    assert_eq!(calculator().called_count(), 0);
}

#[test]
fn called_count_tracks_calls_across_versions() {
    let mut calc = calculator();
    let _ = calc.add_v1(Some("1,2"));
    let _ = calc.add_v2(Some("1,2,3"));
    let _ = calc.add_v3(Some("1\n2,3"));
    assert_eq!(calc.called_count(), 3);
}

#[test]
fn called_count_includes_failed_calls() {
    let mut calc = calculator();
    assert!(calc.add_v1(Some("1,2,3")).is_err());
    assert!(calc.add_v4(Some("//;")).is_err());
    assert!(calc.add_v5(Some("-1")).is_err());
    assert_eq!(calc.called_count(), 3);
}

#[test]
fn called_count_does_not_count_itself() {
    let mut calc = calculator();
    let _ = calc.add_v4(None);
    for _ in 0..5 {
        assert_eq!(calc.called_count(), 1);
    }
}

#[test]
fn called_count_is_per_instance() {
    let mut first = calculator();
    let second = calculator();
    let _ = first.add_v2(Some("1"));
    assert_eq!(first.called_count(), 1);
    assert_eq!(second.called_count(), 0);
}
