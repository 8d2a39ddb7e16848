use rpncalc::{
    error::{Error, ParseError, RuntimeError},
    evaluate, evaluate_postfix,
    notation::Operator,
    to_postfix,
};

fn assert_postfix(src: &str, want: &str) {
    match to_postfix(src) {
        Ok(got) => assert_eq!(got, want, "postfix of {src}"),
        Err(e) => panic!("{src} failed: {e}"),
    }
}

#[test]
fn operators_follow_the_precedence_table() {
    assert_postfix("2+3*4", "2 3 4 * +");
    assert_postfix("2*3+4", "2 3 * 4 +");
    assert_postfix("2-3+4", "2 3 4 + -");
    assert_postfix("10-2-3", "10 2 - 3 -");
    assert_postfix("2^3^2", "2 3 ^ 2 ^");
}

#[test]
fn parentheses_are_dropped() {
    assert_postfix("(2+3)*4", "2 3 + 4 *");
    assert_postfix("((1))", "1");
    assert_postfix("()", "");
}

#[test]
fn signed_terms_are_expanded() {
    assert_postfix("-5+3", "0 5 - 3 +");
    assert_postfix("3+-2", "3 0 2 - +");
    assert_postfix("-52", "0 52 -");
    assert_postfix("--5", "0 5 +");
    assert_postfix("-(2+3)", "0 2 3 + -");
}

#[test]
fn lexemes_are_kept_as_written() {
    assert_postfix("2.50 + .5", "2.50 .5 +");
    assert_postfix("  7  ", "7");
    assert_postfix("3x4", "3 4 x");
    assert_postfix("3X4", "3 4 x");
}

#[test]
fn conversion_errors_point_at_the_source() {
    assert_eq!(to_postfix("(2+3"),
               Err(Error::Parse(ParseError::UnmatchedOpeningParen { position: 0 })));
    assert_eq!(to_postfix("1 + 2)"),
               Err(Error::Parse(ParseError::UnmatchedClosingParen { position: 5 })));
    assert_eq!(to_postfix("4 # 4"),
               Err(Error::Parse(ParseError::UnexpectedCharacter { token:    "#".to_string(),
                                                                  position: 2, })));
}

#[test]
fn conversion_does_not_check_operand_counts() {
    assert_postfix("2+", "2 +");
    assert_postfix("+", "+");
}

#[test]
fn postfix_input_evaluates() {
    assert_eq!(evaluate_postfix("2 3 4 * +"), Ok(14.0));
    assert_eq!(evaluate_postfix("5 1 2 + 4 * + 3 -"), Ok(14.0));
    assert_eq!(evaluate_postfix("3 4 x"), Ok(12.0));
    assert_eq!(evaluate_postfix("2.5"), Ok(2.5));
}

#[test]
fn postfix_input_errors() {
    assert_eq!(evaluate_postfix("2 3"),
               Err(Error::Runtime(RuntimeError::LeftoverOperands { count: 2 })));
    assert_eq!(evaluate_postfix("+"),
               Err(Error::Runtime(RuntimeError::InsufficientOperands { operator: Operator::Add,
                                                                       found:    0,
                                                                       position: 0, })));
    assert_eq!(evaluate_postfix(""), Err(Error::Runtime(RuntimeError::EmptyExpression)));
    assert_eq!(evaluate_postfix("( 2 )"),
               Err(Error::Parse(ParseError::UnexpectedToken { token:    "(".to_string(),
                                                              position: 0, })));
}

#[test]
fn converted_postfix_evaluates_to_the_same_value() {
    for src in ["2+3*4", "(2+3)*4", "-5+3", "3+-2", "2^-1", "8/2*2", "-(1.5x4)%5", "2-3+4"] {
        let postfix = to_postfix(src).unwrap();
        assert_eq!(evaluate_postfix(&postfix), evaluate(src), "{src} -> {postfix}");
    }
}
