use super::*;
use lisc_diagnostic::emitter::ColorMode;
use pretty_assertions::assert_eq;

fn eval(expr: &str, evaluator: &Evaluator) -> (ExitStatus, String, String) {
    let mut console = Console::new(Vec::new(), Vec::new(), ColorMode::Never, false);
    let status = eval_expr(expr, evaluator, &mut console).unwrap();
    (
        status,
        String::from_utf8(console.out).unwrap(),
        String::from_utf8(console.err).unwrap(),
    )
}

#[test]
fn test_prints_value() {
    let (status, out, err) = eval("(add 1 (mult 2 3))", &Evaluator::new());
    assert_eq!(status, ExitStatus::Success);
    assert_eq!(out, "7\n");
    assert_eq!(err, "");
}

#[test]
fn test_uses_globals() {
    let evaluator = Evaluator::builder().global("x", 10).build();
    let (_, out, _) = eval("(add x 1)", &evaluator);
    assert_eq!(out, "11\n");
}

#[test]
fn test_renders_diagnostic() {
    let (status, out, err) = eval("(add x 1)", &Evaluator::new());
    assert_eq!(status, ExitStatus::Failure);
    assert_eq!(out, "");
    assert_eq!(
        err,
        "error[E6001]: undefined variable: x\n \
         --> <expr>:1:6\n  \
         |\n\
         1 | (add x 1)\n  \
         |      ^ not found in this scope\n  \
         | ---- in this form\n  \
         |\n  \
         = help: bind it with `(let x <value> ...)`\n\n"
    );
}
