use std::fs;

use rpncalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate,
    notation::{Operator, PRECEDENCE},
};
use walkdir::WalkDir;

#[derive(Debug)]
enum Expected {
    Value(f64),
    Failure,
}

#[test]
fn case_files_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("tests/cases").into_iter()
                                   .filter_map(Result::ok)
                                   .filter(|e| e.path().extension().is_some_and(|ext| ext == "calc"))
    {
        let path = entry.path();
        let content =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        for (expression, expected) in extract_cases(&content) {
            count += 1;
            match (&expected, evaluate(&expression)) {
                (Expected::Value(want), Ok(got)) if same_value(*want, got) => {},
                (Expected::Failure, Err(_)) => {},
                (_, result) => {
                    panic!("Case {expression:?} in {path:?} expected {expected:?}, got {result:?}")
                },
            }
        }
    }

    assert!(count > 0, "No cases found in tests/cases");
}

fn extract_cases(content: &str) -> Vec<(String, Expected)> {
    let mut cases = Vec::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let (expression, expected) =
            trimmed.split_once("=>")
                   .unwrap_or_else(|| panic!("Case line is missing '=>': {line}"));
        let expected = match expected.trim() {
            "error" => Expected::Failure,
            value => {
                Expected::Value(value.parse()
                                     .unwrap_or_else(|e| panic!("Bad expected value {value}: {e}")))
            },
        };

        cases.push((expression.trim().to_string(), expected));
    }

    cases
}

fn same_value(want: f64, got: f64) -> bool {
    (want.is_nan() && got.is_nan()) || want == got || (want - got).abs() < 1e-12
}

fn assert_value(src: &str, want: f64) {
    match evaluate(src) {
        Ok(got) => assert!(same_value(want, got), "{src} evaluated to {got}, expected {want}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

#[test]
fn parenthesization() {
    assert_value("(2+3)*4", 20.0);
    assert_value("2+3*4", 14.0);
}

#[test]
fn signed_terms() {
    assert_value("-5+3", -2.0);
    assert_value("3+-2", 1.0);
    assert_value("-12.5", -12.5);
}

#[test]
fn power_and_modulo() {
    assert_value("2^3", 8.0);
    assert_value("10%3", 1.0);
}

#[test]
fn multiplication_synonym() {
    assert_eq!(evaluate("3x4"), Ok(12.0));
    assert_eq!(evaluate("3x4"), evaluate("3*4"));
}

#[test]
fn repeated_evaluation_is_identical() {
    let src = "-(7.25%2)^3 x 1.5 / (4-2.5) + 2";
    let first = evaluate(src).unwrap();
    for _ in 0..10 {
        assert_eq!(evaluate(src).unwrap().to_bits(), first.to_bits());
    }
}

fn apply(symbol: char, left: f64, right: f64) -> f64 {
    match symbol {
        '^' => left.powf(right),
        '*' | 'x' => left * right,
        '/' => left / right,
        '%' => left % right,
        '+' => left + right,
        '-' => left - right,
        _ => unreachable!("not an operator: {symbol}"),
    }
}

#[test]
fn every_operator_pair_follows_the_precedence_table() {
    let (a, b, c) = (7.0, 3.0, 2.0);

    for (rank1, (first, _)) in PRECEDENCE.iter().enumerate() {
        for (rank2, (second, _)) in PRECEDENCE.iter().enumerate() {
            let (s1, s2) = (first.symbol(), second.symbol());
            let src = format!("7{s1}3{s2}2");

            let want = if rank1 <= rank2 {
                apply(s2, apply(s1, a, b), c)
            } else {
                apply(s1, a, apply(s2, b, c))
            };

            assert_eq!(evaluate(&src).unwrap().to_bits(), want.to_bits(), "{src}");
        }
    }
}

#[test]
fn division_by_zero_is_not_an_error() {
    assert_eq!(evaluate("1/0"), Ok(f64::INFINITY));
    assert!(evaluate("0/0").unwrap().is_nan());
}

#[test]
fn missing_operands_are_reported() {
    assert_eq!(evaluate("+"),
               Err(Error::Runtime(RuntimeError::InsufficientOperands { operator: Operator::Add,
                                                                       found:    0,
                                                                       position: 0, })));
    assert_eq!(evaluate("2+"),
               Err(Error::Runtime(RuntimeError::InsufficientOperands { operator: Operator::Add,
                                                                       found:    1,
                                                                       position: 1, })));
}

#[test]
fn leftover_and_empty_expressions_are_reported() {
    assert_eq!(evaluate("2 3"),
               Err(Error::Runtime(RuntimeError::LeftoverOperands { count: 2 })));
    assert_eq!(evaluate(""), Err(Error::Runtime(RuntimeError::EmptyExpression)));
    assert_eq!(evaluate("   "), Err(Error::Runtime(RuntimeError::EmptyExpression)));
}

#[test]
fn unbalanced_parentheses_are_reported() {
    assert_eq!(evaluate("(2+3"),
               Err(Error::Parse(ParseError::UnmatchedOpeningParen { position: 0 })));
    assert_eq!(evaluate("2+3)"),
               Err(Error::Parse(ParseError::UnmatchedClosingParen { position: 3 })));
    assert_eq!(evaluate("-(2"),
               Err(Error::Parse(ParseError::UnmatchedOpeningParen { position: 1 })));
}

#[test]
fn malformed_input_is_reported() {
    assert_eq!(evaluate("1.2.3+1"),
               Err(Error::Parse(ParseError::MalformedNumber { literal:  "1.2.3".to_string(),
                                                              position: 0, })));
    assert_eq!(evaluate("3+-1..5"),
               Err(Error::Parse(ParseError::MalformedNumber { literal:  "1..5".to_string(),
                                                              position: 3, })));
    assert_eq!(evaluate("2 & 3"),
               Err(Error::Parse(ParseError::UnexpectedCharacter { token:    "&".to_string(),
                                                                  position: 2, })));
}

#[test]
fn errors_describe_themselves() {
    let err = evaluate("2+").unwrap_err();
    assert!(err.to_string().contains("needs two operands"), "{err}");
    assert!(std::error::Error::source(&err).is_some());

    let err = evaluate("(1").unwrap_err();
    assert!(err.to_string().contains("never closed"), "{err}");
}
