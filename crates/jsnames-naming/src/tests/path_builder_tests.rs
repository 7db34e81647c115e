use crate::path_builder::{PathBuilder, PathResolution, SkipReason};
use jsnames_parser::parser::{NodeData, NodeIndex, ParserState};

fn parse(source: &str) -> ParserState {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    parser.parse_source_file();
    assert!(
        parser.get_diagnostics().is_empty(),
        "unexpected diagnostics: {:?}",
        parser.get_diagnostics()
    );
    parser
}

/// Function expressions in source order.
fn function_expressions(parser: &ParserState) -> Vec<NodeIndex> {
    let arena = parser.get_arena();
    let mut found: Vec<(u32, NodeIndex)> = arena
        .nodes
        .iter()
        .enumerate()
        .filter(|(_, node)| matches!(node.data, NodeData::FunctionExpression(_)))
        .map(|(i, node)| (node.pos, NodeIndex(i as u32)))
        .collect();
    found.sort();
    found.into_iter().map(|(_, idx)| idx).collect()
}

fn resolutions(source: &str) -> Vec<PathResolution> {
    let parser = parse(source);
    let builder = PathBuilder::new(parser.get_arena());
    function_expressions(&parser)
        .into_iter()
        .map(|func| builder.build(func))
        .collect()
}

fn paths(source: &str) -> Vec<Option<String>> {
    resolutions(source)
        .into_iter()
        .map(|resolution| resolution.path().map(|path| path.as_str().to_string()))
        .collect()
}

fn single_path(source: &str) -> String {
    let found = paths(source);
    assert_eq!(found.len(), 1, "expected one function in {source:?}");
    found[0].clone().unwrap_or_else(|| panic!("no path for {source:?}"))
}

fn single_skip(source: &str) -> SkipReason {
    match resolutions(source).as_slice() {
        [PathResolution::NotApplicable(reason)] => *reason,
        other => panic!("expected one skipped function, got {other:?}"),
    }
}

#[test]
fn test_declarations() {
    assert_eq!(single_path("var a = function() {};"), "a");
    assert_eq!(single_path("let b = function*() {};"), "b");
    assert_eq!(single_path("const c = (function() {});"), "c");
}

#[test]
fn test_assignment_chains() {
    assert_eq!(single_path("a = function() {};"), "a");
    assert_eq!(
        single_path("a.prototype.b = function() {};"),
        "a.prototype.b"
    );
    assert_eq!(single_path("this.x = function() {};"), "this.x");
    assert_eq!(single_path("(a.b) = function() {};"), "a.b");
}

#[test]
fn test_non_name_chain_base() {
    assert_eq!(
        single_path("document.getElementById(\"x\").onClick = function() {};"),
        "document.getElementById('x').onClick"
    );
}

#[test]
fn test_element_access_segments() {
    assert_eq!(single_path("a.b[0].c = function() {};"), "a.b[0].c");
    assert_eq!(single_path("a.b[x()].d = function() {};"), "a.b[x()].d");
    assert_eq!(
        single_path("win['x' + this.id] = function() {};"),
        "win['x'+this.id]"
    );
    assert_eq!(single_path("foo['-'] = function() {};"), "foo['-']");
    assert_eq!(single_path("foo['bar'] = function() {};"), "foo.bar");
    assert_eq!(
        single_path("a.prototype['\\n'] = function() {};"),
        "a.prototype['\\n']"
    );
    assert_eq!(single_path("a.prototype[Y] = function() {};"), "a.prototype[Y]");
}

#[test]
fn test_object_literal_on_assignment() {
    assert_eq!(
        paths("a.prototype = { b: function() {}, 'c-d': function() {}, 1: function() {} };"),
        vec![
            Some("a.prototype.b".to_string()),
            Some("a.prototype['c-d']".to_string()),
            Some("a.prototype[1]".to_string()),
        ]
    );
    assert_eq!(
        single_path("a.prototype = { b: { c: function() {} } };"),
        "a.prototype.b.c"
    );
}

#[test]
fn test_computed_object_keys() {
    assert_eq!(
        single_path("A.prototype = { ['foo']: function() {} };"),
        "A.prototype.foo"
    );
    assert_eq!(
        single_path("A.prototype = { ['foo' + bar()]: function() {} };"),
        "A.prototype.'foo'+bar()"
    );
}

#[test]
fn test_defaults_and_destructuring() {
    assert_eq!(single_path("function f(g = function() {}) {}"), "g");
    assert_eq!(single_path("var { a = function() {} } = {};"), "a");
    assert_eq!(single_path("var { k: b = function() {} } = {};"), "b");
    assert_eq!(single_path("var [c = function() {}] = [];"), "c");
}

#[test]
fn test_object_literal_in_declaration_is_skipped() {
    assert_eq!(
        single_skip("var a = { b: function() {} };"),
        SkipReason::DeclarationObjectLiteral
    );
}

#[test]
fn test_other_contexts_are_skipped() {
    assert_eq!(single_skip("f(function() {});"), SkipReason::NoNamingContext);
    assert_eq!(
        single_skip("export default (function() {});"),
        SkipReason::NoNamingContext
    );
    assert_eq!(single_skip("a += function() {};"), SkipReason::NoNamingContext);
    assert_eq!(single_skip("a == function() {};"), SkipReason::NoNamingContext);
    assert_eq!(single_skip("var f = function g() {};"), SkipReason::AlreadyNamed);
}

#[test]
fn test_unsupported_assignment_target() {
    let found = resolutions("[a][0] = function() {}; f() = function() {};");
    assert_eq!(found.len(), 2);
    assert_eq!(
        found[1],
        PathResolution::NotApplicable(SkipReason::UnsupportedTarget)
    );
}

#[test]
fn test_non_function_expressions_are_not_applicable() {
    let parser = parse("var a = () => 1; function b() {} var o = { m() {} };");
    let builder = PathBuilder::new(parser.get_arena());
    let arena = parser.get_arena();
    for (i, node) in arena.nodes.iter().enumerate() {
        if matches!(
            node.data,
            NodeData::ArrowFunction(_)
                | NodeData::FunctionDeclaration(_)
                | NodeData::MethodDeclaration(_)
        ) {
            assert_eq!(
                builder.build(NodeIndex(i as u32)),
                PathResolution::NotApplicable(SkipReason::NotAFunctionExpression)
            );
        }
    }
}
