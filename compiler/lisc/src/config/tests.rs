use super::*;
use pretty_assertions::assert_eq;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn parse(list: &[&str]) -> Result<Options, UsageError> {
    Options::parse(&args(list), None)
}

#[test]
fn test_positional_only() {
    let options = parse(&["(add 1 2)"]).unwrap();
    assert_eq!(options.positional, vec!["(add 1 2)"]);
    assert!(options.globals.is_empty());
    assert_eq!(options.max_depth, None);
    assert_eq!(options.color, ColorMode::Auto);
}

#[test]
fn test_defines_in_both_forms() {
    let options = parse(&["--define", "x=1", "--define=y=-2", "-D", "z=3", "x"]).unwrap();
    assert_eq!(
        options.globals,
        vec![("x".into(), 1), ("y".into(), -2), ("z".into(), 3)]
    );
    assert_eq!(options.positional, vec!["x"]);
}

#[test]
fn test_flags_after_positional() {
    let options = parse(&["x", "--max-depth", "8", "--color=never"]).unwrap();
    assert_eq!(options.positional, vec!["x"]);
    assert_eq!(options.max_depth, Some(8));
    assert_eq!(options.color, ColorMode::Never);
}

#[test]
fn test_negative_literal_and_stdin_are_positional() {
    assert_eq!(parse(&["-5"]).unwrap().positional, vec!["-5"]);
    assert_eq!(parse(&["-"]).unwrap().positional, vec!["-"]);
}

#[test]
fn test_double_dash_ends_flags() {
    let options = parse(&["--", "--define"]).unwrap();
    assert_eq!(options.positional, vec!["--define"]);
}

#[test]
fn test_env_max_depth_is_a_fallback() {
    let from_env = Options::parse(&args(&["x"]), Some("3")).unwrap();
    assert_eq!(from_env.max_depth, Some(3));

    let from_flag = Options::parse(&args(&["--max-depth=5", "x"]), Some("3")).unwrap();
    assert_eq!(from_flag.max_depth, Some(5));
}

#[test]
fn test_invalid_env_max_depth() {
    let err = Options::parse(&args(&["x"]), Some("deep")).unwrap_err();
    assert!(matches!(
        err,
        UsageError::InvalidNumber {
            source_name: MAX_DEPTH_ENV,
            ..
        }
    ));
}

#[test]
fn test_usage_errors() {
    assert_eq!(
        parse(&["--verbose"]),
        Err(UsageError::UnknownOption("--verbose".into()))
    );
    assert_eq!(
        parse(&["--define"]),
        Err(UsageError::MissingValue("--define"))
    );
    assert_eq!(
        parse(&["--define", "x"]),
        Err(UsageError::InvalidDefine("x".into()))
    );
    assert_eq!(
        parse(&["--define", "1x=2"]),
        Err(UsageError::InvalidName("1x".into()))
    );
    assert!(matches!(
        parse(&["--define", "x=ten"]),
        Err(UsageError::InvalidNumber {
            source_name: "--define",
            ..
        })
    ));
    assert!(matches!(
        parse(&["--max-depth", "-1"]),
        Err(UsageError::InvalidNumber { .. })
    ));
    assert!(matches!(
        parse(&["--color", "sometimes"]),
        Err(UsageError::InvalidColor(_))
    ));
}

#[test]
fn test_single_positional() {
    let none = parse(&[]).unwrap();
    assert_eq!(
        none.single_positional("expression"),
        Err(UsageError::MissingArgument("expression"))
    );

    let two = parse(&["a", "b"]).unwrap();
    assert_eq!(
        two.single_positional("expression"),
        Err(UsageError::UnexpectedArgument("b".into()))
    );

    let one = parse(&["a"]).unwrap();
    assert_eq!(one.single_positional("expression"), Ok("a"));
}

#[test]
fn test_evaluator_from_options() {
    let options = parse(&["-D", "x=4", "--max-depth", "1"]).unwrap();
    let evaluator = options.evaluator();
    assert_eq!(evaluator.evaluate("(mult x x)"), Ok(16));
    assert!(evaluator.evaluate("(add 1 (add 2 3))").is_err());
}

#[test]
fn test_usage_error_messages() {
    assert_eq!(
        UsageError::InvalidName("1x".into()).to_string(),
        "invalid global name `1x`; names are a letter followed by letters or digits"
    );
    assert_eq!(
        UsageError::MissingArgument("expression").to_string(),
        "missing expression"
    );
}
