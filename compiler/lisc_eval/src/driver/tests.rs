use super::*;
use lisc_lexer::ScanErrorKind;
use pretty_assertions::assert_eq;

fn run(source: &str) -> EvalResult {
    run_with(source, &[], None)
}

fn run_with(source: &str, globals: &[(&str, i64)], max_depth: Option<usize>) -> EvalResult {
    let scanner = Scanner::new(source)?;
    let scopes = ScopeStack::with_globals(globals.iter().copied());
    Driver::new(scanner, FrameStack::with_max_depth(max_depth), scopes).run()
}

fn kind(source: &str) -> EvalErrorKind {
    match run(source) {
        Ok(value) => panic!("{source:?} evaluated to {value}"),
        Err(err) => err.kind,
    }
}

// ─── classify_identifier ───────────────────────────────────────────

fn let_frame(pending: Option<Token<'_>>) -> Frame<'_> {
    Frame::Let {
        bound_count: 0,
        pending_name: pending,
        opener: Span::new(0, 4),
    }
}

#[test]
fn test_classify_declares_in_let_awaiting_name() {
    let frame = let_frame(None);
    assert_eq!(classify_identifier(Some(&frame), false), IdentRole::Declare);
}

#[test]
fn test_classify_before_close_is_body_reference() {
    let frame = let_frame(None);
    assert_eq!(classify_identifier(Some(&frame), true), IdentRole::Reference);
}

#[test]
fn test_classify_with_pending_name_is_reference() {
    let name = Token {
        kind: TokenKind::Ident,
        text: "x",
        span: Span::new(5, 6),
    };
    let frame = let_frame(Some(name));
    assert_eq!(classify_identifier(Some(&frame), false), IdentRole::Reference);
}

#[test]
fn test_classify_outside_let_is_reference() {
    let add = Frame::open(Form::Add, Span::new(0, 4));
    let done = Frame::Value {
        result: 1,
        opener: Span::new(0, 4),
    };
    assert_eq!(classify_identifier(None, false), IdentRole::Reference);
    assert_eq!(classify_identifier(Some(&add), false), IdentRole::Reference);
    assert_eq!(classify_identifier(Some(&done), false), IdentRole::Reference);
}

// ─── Evaluation ────────────────────────────────────────────────────

#[test]
fn test_literals() {
    assert_eq!(run("5"), Ok(5));
    assert_eq!(run("-12"), Ok(-12));
}

#[test]
fn test_arithmetic() {
    assert_eq!(run("(add 1 2)"), Ok(3));
    assert_eq!(run("(mult 3 4)"), Ok(12));
    assert_eq!(run("(add 1 (mult 2 3))"), Ok(7));
    assert_eq!(run("(add -5 10)"), Ok(5));
}

#[test]
fn test_nary_fold() {
    assert_eq!(run("(add 1 2 3 4)"), Ok(10));
    assert_eq!(run("(mult 2 3 4)"), Ok(24));
    assert_eq!(run("(add 7)"), Ok(7));
}

#[test]
fn test_let() {
    assert_eq!(run("(let x 3 x)"), Ok(3));
    assert_eq!(run("(let x 3 (add x x))"), Ok(6));
    assert_eq!(run("(let x 2 y x (add x y))"), Ok(4));
}

#[test]
fn test_shadowing_ends_with_inner_let() {
    assert_eq!(run("(let x 2 (let x 5 x))"), Ok(5));
    assert_eq!(run("(let x 2 (add (let x 5 x) x))"), Ok(7));
}

#[test]
fn test_let_value_may_be_a_form() {
    assert_eq!(run("(let x (add 1 2) y (mult x x) (add x y))"), Ok(12));
}

#[test]
fn test_globals() {
    assert_eq!(run_with("x", &[("x", 10)], None), Ok(10));
    assert_eq!(run_with("(let x 1 x)", &[("x", 10)], None), Ok(1));
    assert_eq!(run_with("(add (let x 1 x) x)", &[("x", 10)], None), Ok(11));
}

#[test]
fn test_undefined_variable() {
    let err = run("(add x 1)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::UndefinedVariable {
            name: "x".into(),
            similar: None
        }
    );
    assert_eq!(err.span, Span::new(5, 6));
    assert_eq!(err.enclosing, Some(Span::new(0, 4)));
}

#[test]
fn test_binding_not_visible_after_let_closes() {
    assert_eq!(
        kind("(add (let x 1 x) x)"),
        EvalErrorKind::UndefinedVariable {
            name: "x".into(),
            similar: None
        }
    );
}

#[test]
fn test_undefined_variable_suggests_visible_name() {
    assert_eq!(
        kind("(let count 1 (add cuont 1))"),
        EvalErrorKind::UndefinedVariable {
            name: "cuont".into(),
            similar: Some("count".into())
        }
    );
}

#[test]
fn test_stack_underflow() {
    let err = run(")5").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::StackUnderflow);
    assert_eq!(err.span, Span::new(0, 1));
}

#[test]
fn test_end_of_input() {
    assert_eq!(kind(""), EvalErrorKind::UnexpectedEndOfInput);
    let err = run("(add 1 (mult 2 3)").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UnexpectedEndOfInput);
    assert_eq!(err.span, Span::point(17));
    assert_eq!(err.enclosing, Some(Span::new(0, 4)));
}

#[test]
fn test_incomplete_forms() {
    assert_eq!(kind("(add)"), EvalErrorKind::IncompleteForm { form: Form::Add });
    assert_eq!(kind("(mult)"), EvalErrorKind::IncompleteForm { form: Form::Mult });
    assert_eq!(kind("(let x 1)"), EvalErrorKind::IncompleteForm { form: Form::Let });
    assert_eq!(kind("(let)"), EvalErrorKind::IncompleteForm { form: Form::Let });
}

#[test]
fn test_space_before_close_makes_a_declaration() {
    // `y` is not directly followed by `)`, so it names a binding with no value.
    assert_eq!(
        kind("(let x 1 y )"),
        EvalErrorKind::IncompleteForm { form: Form::Let }
    );
}

#[test]
fn test_operand_after_let_body() {
    let err = run("(let x 1 5 2)").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::UnexpectedOperand);
    assert_eq!(err.span, Span::new(11, 12));
    assert_eq!(err.enclosing, Some(Span::new(0, 4)));
}

#[test]
fn test_trailing_input() {
    let err = run("(add 1 2) 3").unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::TrailingInput);
    assert_eq!(err.span, Span::new(10, 11));
    assert_eq!(kind("5)"), EvalErrorKind::TrailingInput);
}

#[test]
fn test_single_trailing_separator_is_accepted() {
    assert_eq!(run("(add 1 2) "), Ok(3));
}

#[test]
fn test_overflow() {
    let err = run("(mult 9223372036854775807 2)").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IntegerOverflow {
            operation: Form::Mult
        }
    );
    assert_eq!(err.span, Span::new(26, 27));
    assert_eq!(err.enclosing, Some(Span::new(0, 5)));
}

#[test]
fn test_overflow_span_covers_nested_form() {
    let err = run("(add 9223372036854775807 (add 0 1))").unwrap_err();
    assert_eq!(
        err.kind,
        EvalErrorKind::IntegerOverflow {
            operation: Form::Add
        }
    );
    assert_eq!(err.span, Span::new(25, 34));
}

#[test]
fn test_scan_errors_become_invalid_token() {
    assert_eq!(
        kind("(sub 1 2)"),
        EvalErrorKind::InvalidToken {
            reason: ScanErrorKind::UnknownForm("sub".into())
        }
    );
    assert_eq!(
        kind("(add 1  2)"),
        EvalErrorKind::InvalidToken {
            reason: ScanErrorKind::UnexpectedChar(' ')
        }
    );
}

#[test]
fn test_glued_tokens_are_invalid() {
    let missing = |found| EvalErrorKind::InvalidToken {
        reason: ScanErrorKind::MissingSeparator(found),
    };
    assert_eq!(kind("(add 1x)"), missing('x'));
    assert_eq!(kind("(add 2-3)"), missing('-'));
    assert_eq!(kind("(add(add 1 2) 3)"), missing('('));
    assert_eq!(kind("(let x 1(add x 1))"), missing('('));

    let err = run("(add(add 1 2) 3)").unwrap_err();
    assert_eq!(err.span, Span::new(4, 5));
    assert_eq!(run("(add (add 1 2) 3)"), Ok(6));
}

#[test]
fn test_depth_limit() {
    assert_eq!(run_with("(add 1 (add 2 3))", &[], Some(2)), Ok(6));
    let err = run_with("(add 1 (add 2 (add 3 4)))", &[], Some(2)).unwrap_err();
    assert_eq!(err.kind, EvalErrorKind::DepthLimitExceeded { limit: 2 });
    assert_eq!(err.span, Span::new(14, 18));
    assert_eq!(err.enclosing, Some(Span::new(7, 11)));
}
