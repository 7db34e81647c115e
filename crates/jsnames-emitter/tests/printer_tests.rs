//! Tests for the readable printer layout.
use jsnames_emitter::print_source_file;
use jsnames_parser::parser::ParserState;

fn print(source: &str) -> String {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(
        parser.get_diagnostics().is_empty(),
        "unexpected diagnostics: {:?}",
        parser.get_diagnostics()
    );
    print_source_file(parser.get_arena(), root)
}

#[test]
fn prints_function_expression_in_declaration() {
    assert_eq!(
        print("var a=function(){return 1}"),
        "var a = function() {\n    return 1;\n};\n"
    );
}

#[test]
fn prints_generators_and_async_functions() {
    assert_eq!(
        print("var g = function*(){ yield* x }; async function f(a, ...b) {}"),
        "var g = function*() {\n    yield* x;\n};\nasync function f(a, ...b) {}\n"
    );
}

#[test]
fn keeps_source_quote_style() {
    assert_eq!(
        print("x = 'a' + \"b\" + 'it\\'s';"),
        "x = 'a' + \"b\" + 'it\\'s';\n"
    );
}

#[test]
fn prints_member_chains_and_calls() {
    assert_eq!(
        print("document.getElementById('x').onClick = function(){};\na.b[0]['c'] = new Foo(1, 2);"),
        "document.getElementById('x').onClick = function() {};\na.b[0]['c'] = new Foo(1, 2);\n"
    );
}

#[test]
fn prints_object_literals_and_binding_patterns() {
    assert_eq!(
        print("var {a = 1, b: c, ...d} = {e: 1, f, [g]: 2, h() {}, get i() {}};"),
        "var { a = 1, b: c, ...d } = { e: 1, f, [g]: 2, h() {}, get i() {} };\n"
    );
    assert_eq!(print("var [a, , b] = [1, , 2, ,];"), "var [a, , b] = [1, , 2, ,];\n");
}

#[test]
fn prints_classes() {
    assert_eq!(
        print("class A extends B { constructor(x) { this.x = x } static m() {} y = 1 }"),
        "class A extends B {\n    constructor(x) {\n        this.x = x;\n    }\n    static m() {}\n    y = 1;\n}\n"
    );
}

#[test]
fn prints_control_flow() {
    assert_eq!(
        print("if (a) { b() } else c();\nwhile (x) x--;\nfor (var i = 0; i < n; i++) {}\nfor (;;) break_();"),
        "if (a) {\n    b();\n} else c();\nwhile (x) x--;\nfor (var i = 0; i < n; i++) {}\nfor (;;) break_();\n"
    );
}

#[test]
fn prints_arrows_and_operators() {
    assert_eq!(
        print("f = (a, b) => a ? !b : typeof b, void 0;"),
        "f = (a, b) => a ? !b : typeof b, void 0;\n"
    );
    assert_eq!(print("async x => { await_(x) };"), "async (x) => {\n    await_(x);\n};\n");
}

#[test]
fn prints_export_default_forms() {
    assert_eq!(
        print("export default function() {}\nexport default (function() {});\nexport var v = 1;"),
        "export default function() {}\nexport default (function() {});\nexport var v = 1;\n"
    );
}
