//! Tests for the mapped naming pass: parse, rename, print and compare with
//! the printed parse of the expected source.
use jsnames_emitter::print_source_file;
use jsnames_naming::{
    MappedPassResult, NameAnonymousFunctionsMapped, NamingOptions, VariableMap,
};
use jsnames_parser::parser::{NodeIndex, ParserState};

fn parse(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(
        parser.get_diagnostics().is_empty(),
        "unexpected diagnostics in {source:?}: {:?}",
        parser.get_diagnostics()
    );
    (parser, root)
}

fn print(source: &str) -> String {
    let (parser, root) = parse(source);
    print_source_file(parser.get_arena(), root)
}

fn run(source: &str, seed: Option<&VariableMap>) -> (String, MappedPassResult) {
    let (mut parser, root) = parse(source);
    let pass = NameAnonymousFunctionsMapped::new(NamingOptions::default());
    let result = pass.process(&mut parser.arena, root, seed);
    (print_source_file(parser.get_arena(), root), result)
}

fn entries(map: &VariableMap) -> Vec<(String, String)> {
    map.all_entries()
        .map(|(name, path)| (name.to_string(), path.as_str().to_string()))
        .collect()
}

fn pairs(expected: &[(&str, &str)]) -> Vec<(String, String)> {
    expected
        .iter()
        .map(|(name, path)| (name.to_string(), path.to_string()))
        .collect()
}

fn test_same(source: &str) {
    let (output, result) = run(source, None);
    assert_eq!(output, print(source));
    assert!(result.map.is_empty(), "unexpected entries: {:?}", entries(&result.map));
}

fn test_renamed(source: &str, expected: &str, map: &[(&str, &str)]) {
    let (output, result) = run(source, None);
    assert_eq!(output, print(expected));
    assert_eq!(entries(&result.map), pairs(map));
}

#[test]
fn test_simple_declaration() {
    test_renamed(
        "var a = function() { return 1; };",
        "var a = function $() { return 1; };",
        &[("$", "a")],
    );
}

#[test]
fn test_seed_name_is_reused() {
    let seed = VariableMap::from_map([("a", "previous")]).expect("valid seed");
    let (output, result) = run("var a = function() { return 1; };", Some(&seed));
    assert_eq!(output, print("var a = function previous() { return 1; };"));
    assert_eq!(entries(&result.map), pairs(&[("previous", "a")]));
    assert_eq!(result.named, 1);
}

#[test]
fn test_seed_names_are_not_reissued() {
    let seed = VariableMap::from_map([("unused", "$")]).expect("valid seed");
    let (output, result) = run("var fn = function() {};", Some(&seed));
    assert_eq!(output, print("var fn = function $a() {};"));
    assert_eq!(entries(&result.map), pairs(&[("$", "unused"), ("$a", "fn")]));
}

#[test]
fn test_seed_is_not_modified() {
    let seed = VariableMap::from_map([("a", "$")]).expect("valid seed");
    let before = seed.clone();
    let (_, result) = run("var a = function() {}; var b = function() {};", Some(&seed));
    assert_eq!(seed, before);
    assert_eq!(result.map.len(), 2);
}

#[test]
fn test_prototype_assignment() {
    test_renamed(
        "function a() {} a.prototype.b = function() {};",
        "function a() {} a.prototype.b = function $() {};",
        &[("$", "a.prototype.b")],
    );
}

#[test]
fn test_same_path_shares_name() {
    test_renamed(
        "var a = function() {}; a = function() {};",
        "var a = function $() {}; a = function $() {};",
        &[("$", "a")],
    );
}

#[test]
fn test_names_follow_document_order() {
    test_renamed(
        "var x = function() { var y = function() {}; }; var z = function() {};",
        "var x = function $() { var y = function $a() {}; }; var z = function $b() {};",
        &[("$", "x"), ("$a", "y"), ("$b", "z")],
    );
}

#[test]
fn test_deterministic() {
    let source = "a.b = function() {}; var c = function() {}; d['-'] = function() {};";
    let (first_output, first) = run(source, None);
    let (second_output, second) = run(source, None);
    assert_eq!(first_output, second_output);
    assert_eq!(first.map, second.map);
}

#[test]
fn test_member_chains() {
    test_renamed(
        "document.getElementById('x').onClick = function() {};",
        "document.getElementById('x').onClick = function $() {};",
        &[("$", "document.getElementById('x').onClick")],
    );
    test_renamed(
        "a.b[0].c = function() {}; a.b[x()].d = function() {};",
        "a.b[0].c = function $() {}; a.b[x()].d = function $a() {};",
        &[("$", "a.b[0].c"), ("$a", "a.b[x()].d")],
    );
    test_renamed(
        "win['x' + this.id] = function() {};",
        "win['x' + this.id] = function $() {};",
        &[("$", "win['x'+this.id]")],
    );
    test_renamed(
        "foo['-'] = function() {}; a.prototype['\\n'] = function() {}; a.prototype[Y] = function() {};",
        "foo['-'] = function $() {}; a.prototype['\\n'] = function $a() {}; a.prototype[Y] = function $b() {};",
        &[
            ("$", "foo['-']"),
            ("$a", "a.prototype['\\n']"),
            ("$b", "a.prototype[Y]"),
        ],
    );
}

#[test]
fn test_object_literal_assignment() {
    test_renamed(
        "A.prototype = { ['foo']: function() {}, ['foo' + bar()]: function() {} };",
        "A.prototype = { ['foo']: function $() {}, ['foo' + bar()]: function $a() {} };",
        &[("$", "A.prototype.foo"), ("$a", "A.prototype.'foo'+bar()")],
    );
    test_renamed(
        "a.prototype = { b: { c: function() {} } };",
        "a.prototype = { b: { c: function $() {} } };",
        &[("$", "a.prototype.b.c")],
    );
}

#[test]
fn test_defaults_and_destructuring() {
    test_renamed(
        "function f(g = function() {}) {}",
        "function f(g = function $() {}) {}",
        &[("$", "g")],
    );
    test_renamed(
        "var { a = function() {} } = {};",
        "var { a = function $() {} } = {};",
        &[("$", "a")],
    );
}

#[test]
fn test_generator_and_async_markers_are_kept() {
    test_renamed(
        "var a = function*() { yield 1; }; var b = async function() {};",
        "var a = function* $() { yield 1; }; var b = async function $a() {};",
        &[("$", "a"), ("$a", "b")],
    );
}

#[test]
fn test_parenthesized_function() {
    test_renamed(
        "var a = (function() {});",
        "var a = (function $() {});",
        &[("$", "a")],
    );
}

const NOT_RENAMED: &[&str] = &[
    "var a = () => 1;",
    "var f = function g() {};",
    "class C { constructor() {} m() {} static s() {} get x() { return 1; } set x(v) {} y = 1; }",
    "var o = { m() {}, get p() { return 1; } };",
    "var o = { b: function() {} };",
    "export default function() {}",
    "export default (function() {});",
    "f(function() {});",
    "a += function() {};",
];

#[test]
fn test_not_renamed() {
    for source in NOT_RENAMED {
        test_same(source);
    }
}

#[test]
fn test_not_renamed_with_seed_for_the_same_paths() {
    let seed = VariableMap::from_map([
        ("a", "$"),
        ("f", "$a"),
        ("g", "$b"),
        ("o", "$c"),
        ("o.b", "$d"),
        ("o.m", "$e"),
        ("C", "$f"),
        ("C.prototype.m", "$g"),
        ("C.s", "$h"),
        ("default", "$i"),
    ])
    .expect("valid seed");
    for source in NOT_RENAMED {
        let (output, result) = run(source, Some(&seed));
        assert_eq!(output, print(source), "renamed under seed: {source}");
        assert_eq!(result.named, 0);
        assert_eq!(result.map, seed);
    }
}

#[test]
fn test_fresh_names_avoid_identifiers_in_the_file() {
    test_renamed(
        "var $ = 1; var b = 2; var a = function() { return $('x'); };",
        "var $ = 1; var b = 2; var a = function $a() { return $('x'); };",
        &[("$a", "a")],
    );
    test_renamed(
        "var x = function() {}; o.$a = 1;",
        "var x = function $() {}; o.$a = 1;",
        &[("$", "x")],
    );
    test_renamed(
        "var x = function() {}; var y = function() { return $a; };",
        "var x = function $() {}; var y = function $b() { return $a; };",
        &[("$", "x"), ("$b", "y")],
    );
}

#[test]
fn test_seed_name_referenced_in_body_is_not_attached() {
    let seed = VariableMap::from_map([("a", "helper")]).expect("valid seed");
    let source = "var a = function() { return helper(); };";
    let (output, result) = run(source, Some(&seed));
    assert_eq!(output, print(source));
    assert_eq!(result.named, 0);
    assert_eq!(result.map, seed);
}

#[test]
fn test_seed_name_used_outside_the_body_is_reused() {
    let seed = VariableMap::from_map([("a", "helper")]).expect("valid seed");
    let (output, result) = run("var helper = 1; var a = function() {};", Some(&seed));
    assert_eq!(output, print("var helper = 1; var a = function helper() {};"));
    assert_eq!(result.named, 1);
    assert_eq!(entries(&result.map), pairs(&[("helper", "a")]));
}

#[test]
fn test_reserved_names_are_skipped() {
    let options = NamingOptions {
        reserved_names: vec!["$".to_string()],
        ..NamingOptions::default()
    };
    let (mut parser, root) = parse("var a = function() {};");
    let result = NameAnonymousFunctionsMapped::new(options).process(&mut parser.arena, root, None);
    assert_eq!(entries(&result.map), pairs(&[("$a", "a")]));
}

#[test]
fn test_custom_prefix() {
    let options = NamingOptions {
        prefix: "fn_".to_string(),
        ..NamingOptions::default()
    };
    let (mut parser, root) = parse("var a = function() {}; var b = function() {};");
    let result = NameAnonymousFunctionsMapped::new(options).process(&mut parser.arena, root, None);
    assert_eq!(entries(&result.map), pairs(&[("fn_", "a"), ("fn_a", "b")]));
    assert_eq!(
        print_source_file(parser.get_arena(), root),
        print("var a = function fn_() {}; var b = function fn_a() {};")
    );
}
