use std::fs;

use reducta::{
    engine::{
        number::parse_number,
        tokenizer::{tokenize, tokenize_into},
    },
    evaluate,
};

fn assert_result(expression: &str, expected: f64) {
    match evaluate(expression, false) {
        Ok(result) => assert!((result - expected).abs() < 1e-9,
                              "Expression '{expression}' evaluated to {result}, expected {expected}"),
        Err(e) => panic!("Expression '{expression}' failed: {e}"),
    }
}

fn assert_failure_containing(expression: &str, needle: &str) {
    match evaluate(expression, false) {
        Ok(result) => panic!("Expression '{expression}' evaluated to {result} but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "Expression '{expression}' failed with '{message}', expected it to mention '{needle}'");
        },
    }
}

#[test]
fn tokenizing_splits_numbers_and_operators() {
    assert_eq!(tokenize("12+3").unwrap(), vec!["12", "+", "3"]);
    assert_eq!(tokenize("12.5 * 2").unwrap(), vec!["12.5", "*", "2"]);
    assert_eq!(tokenize("2^3+1").unwrap(), vec!["2", "^", "3", "+", "1"]);
}

#[test]
fn tokenizing_treats_all_whitespace_alike() {
    assert_eq!(tokenize("1 +\t2\n* 3").unwrap(), tokenize("1 + 2 * 3").unwrap());
}

#[test]
fn tokenizing_streams_across_lines() {
    let mut tokens = Vec::new();
    tokenize_into("12 +", &mut tokens).unwrap();
    tokenize_into("3 * 4", &mut tokens).unwrap();
    assert_eq!(tokens, tokenize("12 + 3 * 4").unwrap());
}

#[test]
fn tokenizing_rejects_oversized_tokens() {
    let oversized = "1".repeat(2000);
    let message = tokenize(&oversized).unwrap_err().to_string();
    assert!(message.contains("maximum length"));
}

#[test]
fn retokenizing_the_printed_token_list_is_idempotent() {
    let tokens = tokenize("12.5*2 + 7 ^ 2 - .5").unwrap();
    assert_eq!(tokenize(&tokens.join(" ")).unwrap(), tokens);
}

#[test]
fn numeric_literals_parse_digit_by_digit() {
    assert_eq!(parse_number("5"), Some(5.0));
    assert_eq!(parse_number("0.5"), Some(0.5));
    assert_eq!(parse_number(".5"), Some(0.5));
    assert_eq!(parse_number("5."), Some(5.0));
    assert!((parse_number("12.34").unwrap() - 12.34).abs() < 1e-12);
    assert!((parse_number("1048.576").unwrap() - 1048.576).abs() < 1e-9);
}

#[test]
fn numeric_literal_rejects_non_numbers() {
    assert_eq!(parse_number("+"), None);
    assert_eq!(parse_number("1.2.3"), None);
    assert_eq!(parse_number("12a"), None);
    assert_eq!(parse_number("."), None);
    assert_eq!(parse_number(""), None);
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_result("2+3*4", 14.0);
    assert_result("2 + 3 * 4", 14.0);
}

#[test]
fn exponentiation_binds_tighter_than_everything() {
    assert_result("2^3+1", 9.0);
    assert_result("2*3^2", 18.0);
}

#[test]
fn same_tier_operators_reduce_left_to_right() {
    assert_result("10/2/5", 1.0);
    assert_result("2*3*4", 24.0);
    assert_result("2-3+4", 3.0);
    assert_result("2^3^2", 64.0);
}

#[test]
fn mixed_tiers_evaluate_in_fixed_order() {
    assert_result("100 - 10 * 5 + 2 ^ 3", 58.0);
    assert_result("1 + 2 * 3 - 4 / 2", 5.0);
}

#[test]
fn single_value_reduces_to_itself() {
    assert_result("42", 42.0);
    assert_result("12.5", 12.5);
}

#[test]
fn division_by_zero_follows_ieee_754() {
    assert_eq!(evaluate("1/0", false).unwrap(), f64::INFINITY);
    assert!(evaluate("0/0", false).unwrap().is_nan());
}

#[test]
fn evaluation_is_deterministic() {
    let first = evaluate("3.5 * 2 ^ 4 - 7 / 2", false).unwrap();
    let second = evaluate("3.5 * 2 ^ 4 - 7 / 2", false).unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
}

#[test]
fn adjacent_values_fail_with_expected_operator() {
    assert_failure_containing("2 3 +", "Expected Operator");
}

#[test]
fn leading_operator_fails_with_expected_value_before() {
    assert_failure_containing("+2", "Expected Value before");
    assert_failure_containing("+2", "+");
}

#[test]
fn trailing_operator_fails_with_expected_value_after() {
    assert_failure_containing("2+", "Expected Value after");
}

#[test]
fn unknown_tokens_fail_chain_building() {
    assert_failure_containing("2 & 3", "unknown token");
}

#[test]
fn parentheses_are_tokenized_but_rejected() {
    assert_failure_containing("(2+3)*4", "unknown token");
}

#[test]
fn empty_input_is_an_error() {
    assert_failure_containing("", "empty");
    assert_failure_containing("   \n\t", "empty");
}

#[test]
fn example_file_concatenates_lines_token_wise() {
    let contents = fs::read_to_string("tests/example.calc").expect("missing file");
    assert_result(&contents, 41.0);
}
