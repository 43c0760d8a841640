use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_span_merge_covers_both() {
    let open = Span::new(0, 4);
    let close = Span::new(12, 13);
    assert_eq!(open.merge(close), Span::new(0, 13));
    assert_eq!(close.merge(open), Span::new(0, 13));
}

#[test]
fn test_span_point() {
    assert_eq!(Span::point(7), Span::new(7, 7));
    assert_eq!(Span::point(7).to_range(), 7..7);
}

#[test]
fn test_merge_with_point_extends_to_it() {
    assert_eq!(Span::new(0, 4).merge(Span::point(9)), Span::new(0, 9));
}

#[test]
fn test_span_try_from_range() {
    assert_eq!(Span::try_from_range(3..9), Ok(Span::new(3, 9)));

    let large = u32::MAX as usize + 1;
    assert!(matches!(
        Span::try_from_range(large..large + 1),
        Err(SpanError::StartTooLarge(_))
    ));
    assert!(matches!(
        Span::try_from_range(0..large),
        Err(SpanError::EndTooLarge(_))
    ));
}

#[test]
fn test_span_error_display() {
    assert_eq!(
        SpanError::EndTooLarge(8_589_934_592).to_string(),
        "end offset 8589934592 is beyond the 4 GiB input limit"
    );
}

#[test]
fn test_span_formatting() {
    let span = Span::new(4, 9);
    assert_eq!(format!("{span}"), "4..9");
    assert_eq!(format!("{span:?}"), "4..9");
    assert_eq!(span.to_range(), 4..9);
}
