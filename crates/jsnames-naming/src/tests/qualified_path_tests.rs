use crate::qualified_path::{PathSegment, QualifiedPath};

fn render(segments: &[PathSegment]) -> String {
    QualifiedPath::from_segments(segments)
        .expect("non-empty path")
        .into_string()
}

#[test]
fn test_empty_segments_have_no_path() {
    assert!(QualifiedPath::from_segments(&[]).is_none());
}

#[test]
fn test_identifier_chain() {
    assert_eq!(
        render(&[
            PathSegment::identifier("a"),
            PathSegment::identifier("prototype"),
            PathSegment::identifier("b"),
        ]),
        "a.prototype.b"
    );
}

#[test]
fn test_identifier_shaped_string_key_is_dotted() {
    assert_eq!(
        render(&[PathSegment::identifier("a"), PathSegment::string_key("x")]),
        "a.x"
    );
}

#[test]
fn test_string_key_is_quoted_and_escaped() {
    assert_eq!(
        render(&[PathSegment::identifier("foo"), PathSegment::string_key("-")]),
        "foo['-']"
    );
    assert_eq!(
        render(&[
            PathSegment::identifier("a"),
            PathSegment::identifier("prototype"),
            PathSegment::string_key("\n"),
        ]),
        "a.prototype['\\n']"
    );
    assert_eq!(
        render(&[PathSegment::identifier("a"), PathSegment::string_key("it's")]),
        "a['it\\'s']"
    );
}

#[test]
fn test_computed_forms() {
    assert_eq!(
        render(&[
            PathSegment::identifier("a"),
            PathSegment::identifier("b"),
            PathSegment::bracketed("0"),
            PathSegment::identifier("c"),
        ]),
        "a.b[0].c"
    );
    assert_eq!(
        render(&[
            PathSegment::identifier("A"),
            PathSegment::identifier("prototype"),
            PathSegment::dotted("'foo'+bar()"),
        ]),
        "A.prototype.'foo'+bar()"
    );
}

#[test]
fn test_first_segment_is_bare() {
    assert_eq!(
        render(&[
            PathSegment::bracketed("document.getElementById('x')"),
            PathSegment::identifier("onClick"),
        ]),
        "document.getElementById('x').onClick"
    );
}

#[test]
fn test_equality_is_textual() {
    let built = QualifiedPath::from_segments(&[
        PathSegment::identifier("a"),
        PathSegment::string_key("b"),
    ]);
    assert_eq!(built, Some(QualifiedPath::from_canonical("a.b")));
}
