use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_single_line() {
    let source = "(add 1 2)";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 5), (1, 6));
    assert_eq!(table.line_text(source, 1), Some("(add 1 2)"));
}

#[test]
fn test_multi_line_lookup() {
    let source = "1\n(add x 2)\r\n3";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.line_from_offset(0), 1);
    assert_eq!(table.line_from_offset(2), 2);
    assert_eq!(table.offset_to_line_col(source, 7), (2, 6));
    assert_eq!(table.line_text(source, 2), Some("(add x 2)"));
    assert_eq!(table.line_text(source, 3), Some("3"));
    assert_eq!(table.line_text(source, 4), None);
}

#[test]
fn test_column_counts_chars() {
    let source = "(add é x)";
    let table = LineOffsetTable::build(source);
    // 'x' is byte 8 but character 7
    assert_eq!(table.offset_to_line_col(source, 8), (1, 8));
}

#[test]
fn test_line_zero_has_no_start() {
    let table = LineOffsetTable::build("x");
    assert_eq!(table.line_start_offset(0), None);
}

#[test]
fn test_offset_past_end_is_clamped() {
    let source = "ab";
    let table = LineOffsetTable::build(source);
    assert_eq!(table.offset_to_line_col(source, 10), (1, 3));
}
