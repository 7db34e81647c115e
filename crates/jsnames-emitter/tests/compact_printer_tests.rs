//! Tests for the compact printer layout used for path segments.
use jsnames_emitter::{PrinterOptions, print_expression_compact, print_node, quote_string};
use jsnames_parser::parser::{NodeData, NodeIndex, ParserState};

/// Parse `source` and return the printed compact form of the first
/// expression statement's expression.
fn compact_expression(source: &str) -> String {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let Some(NodeData::ExpressionStatement(stmt)) = arena.data(sf.statements.nodes[0]) else {
        panic!("expected expression statement");
    };
    print_expression_compact(arena, stmt.expression)
}

#[test]
fn compact_drops_optional_whitespace() {
    assert_eq!(compact_expression("'x' + this.id;"), "'x'+this.id");
    assert_eq!(compact_expression("a ? b : c;"), "a?b:c");
    assert_eq!(compact_expression("f(a, b);"), "f(a,b)");
}

#[test]
fn compact_forces_single_quotes_and_escapes() {
    assert_eq!(compact_expression("\"it's\";"), "'it\\'s'");
    assert_eq!(compact_expression("'\\n';"), "'\\n'");
}

#[test]
fn compact_keeps_required_separators() {
    assert_eq!(compact_expression("typeof a;"), "typeof a");
    assert_eq!(compact_expression("a in b;"), "a in b");
    assert_eq!(compact_expression("a + +b;"), "a+ +b");
    assert_eq!(compact_expression("a - -b;"), "a- -b");
    assert_eq!(compact_expression("new Foo;"), "new Foo");
}

#[test]
fn compact_functions() {
    assert_eq!(
        compact_expression("(function* g(a) { return a; });"),
        "(function*g(a){return a;})"
    );
}

#[test]
fn print_node_whole_file_compact() {
    let mut parser =
        ParserState::new("test.js".to_string(), "var a = 1;\nif (a) { a = 2; }".to_string());
    let root = parser.parse_source_file();
    let options = PrinterOptions {
        compact: true,
        single_quote: false,
    };
    assert_eq!(print_node(parser.get_arena(), root, options), "var a=1;if(a){a=2;}");
}

#[test]
fn print_missing_node_is_empty() {
    let parser = ParserState::new("test.js".to_string(), String::new());
    assert_eq!(print_expression_compact(parser.get_arena(), NodeIndex::NONE), "");
}

#[test]
fn quote_string_escapes_controls() {
    assert_eq!(quote_string("a\tb\u{1}", '"'), "\"a\\tb\\u0001\"");
    assert_eq!(quote_string("\\", '\''), "'\\\\'");
}
