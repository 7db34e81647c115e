use super::*;

#[test]
fn test_line_map_single_line() {
    let map = LineMap::build("var a = 1;");
    assert_eq!(map.line_count(), 1);
    assert_eq!(map.offset_to_position(4), Position::new(0, 4));
}

#[test]
fn test_line_map_mixed_line_endings() {
    let map = LineMap::build("a\nbb\r\nccc\rd");
    assert_eq!(map.line_count(), 4);
    assert_eq!(map.offset_to_position(0), Position::new(0, 0));
    assert_eq!(map.offset_to_position(2), Position::new(1, 0));
    assert_eq!(map.offset_to_position(3), Position::new(1, 1));
    assert_eq!(map.offset_to_position(6), Position::new(2, 0));
    assert_eq!(map.offset_to_position(10), Position::new(3, 0));
}

#[test]
fn test_format_message_substitutes_arguments() {
    let text = crate::diagnostics::format_message("'{0}' expected, found '{1}'.", &[";", ")"]);
    assert_eq!(text, "';' expected, found ')'.");
}
