#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]
//! End-to-end evaluation through the public API.

use lisc_eval::{evaluate, EvalErrorKind, Evaluator};
use lisc_lexer::Form;
use pretty_assertions::assert_eq;

fn kind(input: &str) -> EvalErrorKind {
    evaluate(input).unwrap_err().kind
}

#[test]
fn arithmetic() {
    assert_eq!(evaluate("(add 1 (mult 2 3))"), Ok(7));
    assert_eq!(evaluate("(add -5 10)"), Ok(5));
    assert_eq!(evaluate("(mult -2 -3 -4)"), Ok(-24));
    assert_eq!(evaluate("(add (mult 2 5) (mult 3 -3) 1)"), Ok(2));
}

#[test]
fn let_bindings() {
    assert_eq!(evaluate("(let x 3 x)"), Ok(3));
    assert_eq!(evaluate("(let x 3 (add x x))"), Ok(6));
    assert_eq!(evaluate("(let x 2 y x (add x y))"), Ok(4));
    assert_eq!(evaluate("(let a 1 b (add a 1) c (mult b 3) (add a b c))"), Ok(9));
}

#[test]
fn shadowing() {
    assert_eq!(evaluate("(let x 2 (let x 5 x))"), Ok(5));
    assert_eq!(evaluate("(let x 2 (add (let x 5 x) x))"), Ok(7));
    assert_eq!(evaluate("(let x 1 x (add x 1) x)"), Ok(2));
}

#[test]
fn keywords_are_not_reserved_names() {
    assert_eq!(evaluate("(let add 2 mult 3 (mult add mult))"), Ok(6));
}

#[test]
fn extremes() {
    assert_eq!(evaluate("-9223372036854775808"), Ok(i64::MIN));
    assert_eq!(evaluate("(add 9223372036854775807 0)"), Ok(i64::MAX));
    assert_eq!(
        kind("(add -9223372036854775808 -1)"),
        EvalErrorKind::IntegerOverflow {
            operation: Form::Add
        }
    );
}

#[test]
fn errors() {
    assert_eq!(
        kind("(add x 1)"),
        EvalErrorKind::UndefinedVariable {
            name: "x".into(),
            similar: None
        }
    );
    assert_eq!(kind(")5"), EvalErrorKind::StackUnderflow);
    assert_eq!(kind("(let x 3"), EvalErrorKind::UnexpectedEndOfInput);
    assert_eq!(kind("(add 1 2))"), EvalErrorKind::TrailingInput);
}

#[test]
fn globals() {
    let evaluator = Evaluator::builder().global("x", 10).build();
    assert_eq!(evaluator.evaluate("x"), Ok(10));
    assert_eq!(evaluator.evaluate("(let x 1 x)"), Ok(1));
    assert_eq!(evaluator.evaluate("(add x (let x 1 x) x)"), Ok(21));
}

#[test]
fn deep_nesting_does_not_use_the_call_stack() {
    let depth = 100_000;
    let input = format!("{}1{}", "(add ".repeat(depth), ")".repeat(depth));
    assert_eq!(evaluate(&input), Ok(1));
}

#[test]
fn idempotence() {
    let evaluator = Evaluator::builder().global("g", 3).build();
    for input in ["(let x g (mult x x))", "(add y 1)", "(add 1", ""] {
        assert_eq!(evaluator.evaluate(input), evaluator.evaluate(input));
    }
}
