use super::*;
use pretty_assertions::assert_eq;

fn sample() -> Diagnostic {
    Diagnostic::error(ErrorCode::E6001)
        .with_message("undefined variable `y`")
        .with_secondary_label(Span::new(0, 4), "in this form")
        .with_label(Span::new(5, 6), "not found in this scope")
        .with_note("`x` is bound here")
        .with_suggestion("did you mean `x`?")
}

#[test]
fn test_builder_collects_parts() {
    let diag = sample();
    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.labels.len(), 2);
    assert_eq!(diag.notes, vec!["`x` is bound here".to_string()]);
    assert_eq!(diag.suggestions, vec!["did you mean `x`?".to_string()]);
}

#[test]
fn test_primary_span_skips_secondary_labels() {
    assert_eq!(sample().primary_span(), Some(Span::new(5, 6)));
    assert_eq!(Diagnostic::error(ErrorCode::E6003).primary_span(), None);
}

#[test]
fn test_shifted_moves_every_label() {
    let diag = sample().shifted(10);
    let spans: Vec<_> = diag.labels.iter().map(|l| l.span).collect();
    assert_eq!(spans, vec![Span::new(10, 14), Span::new(15, 16)]);
}

#[test]
fn test_display_is_plain_text() {
    let text = sample().to_string();
    assert!(text.starts_with("error [E6001]: undefined variable `y`"));
    assert!(text.contains("5..6: not found in this scope"));
    assert!(text.contains("= note: `x` is bound here"));
    assert!(text.contains("= help: did you mean `x`?"));
}
