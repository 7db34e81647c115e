//! Tests for statement parsing in the parser.
use jsnames_parser::parser::{NodeData, NodeIndex, ParserState, VariableKind};

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

fn statement_kinds(parser: &ParserState, root: NodeIndex) -> Vec<&'static str> {
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    sf.statements
        .nodes
        .iter()
        .map(|&idx| arena.data(idx).unwrap().kind_name())
        .collect()
}

#[test]
fn parse_statement_recovery_on_malformed_top_level_diagnostics() {
    let (parser, root) = parse_source("const x = 1\nconst y = ;\nconst z = 3;");
    let sf = parser.get_arena().get_source_file_at(root).unwrap();
    assert_eq!(sf.statements.nodes.len(), 3);
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1109]);
}

#[test]
fn parse_statement_kinds_in_source_order() {
    let (parser, root) = parse_source(
        "var a = 1;\nfunction f() {}\nclass C {}\nif (a) {} else ;\nwhile (a) a--;\nfor (var i = 0; i < 3; i++) {}\nthrow a;\n{}",
    );
    assert!(parser.get_diagnostics().is_empty());
    assert_eq!(
        statement_kinds(&parser, root),
        vec![
            "VariableStatement",
            "FunctionDeclaration",
            "ClassDeclaration",
            "IfStatement",
            "WhileStatement",
            "ForStatement",
            "ThrowStatement",
            "Block",
        ]
    );
}

#[test]
fn parse_variable_declaration_list_kinds() {
    let (parser, root) = parse_source("let a = 1, b; const c = 2;");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let kinds: Vec<(VariableKind, usize)> = sf
        .statements
        .nodes
        .iter()
        .map(|&stmt| {
            let Some(NodeData::VariableStatement(var)) = arena.data(stmt) else {
                panic!("expected variable statement");
            };
            let Some(NodeData::VariableDeclarationList(list)) = arena.data(var.declaration_list)
            else {
                panic!("expected declaration list");
            };
            (list.kind, list.declarations.len())
        })
        .collect();
    assert_eq!(kinds, vec![(VariableKind::Let, 2), (VariableKind::Const, 1)]);
}

#[test]
fn parse_destructuring_declarations() {
    let (parser, root) =
        parse_source("var {a, b: c = 1, ...rest} = x;\nvar [d, , e = function() {}, ...f] = y;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    assert_eq!(
        statement_kinds(&parser, root),
        vec!["VariableStatement", "VariableStatement"]
    );
}

#[test]
fn parse_automatic_semicolon_insertion() {
    let (parser, root) = parse_source("a = 1\nb = 2\nreturn\nc");
    assert!(parser.get_diagnostics().is_empty());
    assert_eq!(
        statement_kinds(&parser, root),
        vec![
            "ExpressionStatement",
            "ExpressionStatement",
            "ReturnStatement",
            "ExpressionStatement",
        ]
    );
}

#[test]
fn parse_missing_semicolon_on_same_line_reports_error() {
    let (parser, _root) = parse_source("a = 1 b = 2");
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1005]);
}

#[test]
fn parse_export_default_forms() {
    let (parser, root) = parse_source(
        "export default function() {}\nexport default class {}\nexport default (function() {});",
    );
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let exported: Vec<&str> = sf
        .statements
        .nodes
        .iter()
        .map(|&stmt| {
            let Some(NodeData::ExportDefault(export)) = arena.data(stmt) else {
                panic!("expected export default");
            };
            arena.data(export.expression).unwrap().kind_name()
        })
        .collect();
    assert_eq!(
        exported,
        vec![
            "FunctionDeclaration",
            "ClassDeclaration",
            "ParenthesizedExpression"
        ]
    );
}

#[test]
fn parse_export_declaration() {
    let (parser, root) = parse_source("export var a = function() {};\nexport function f() {}");
    assert!(parser.get_diagnostics().is_empty());
    assert_eq!(
        statement_kinds(&parser, root),
        vec!["ExportDeclaration", "ExportDeclaration"]
    );
}

#[test]
fn parse_stray_close_brace_recovers() {
    let (parser, root) = parse_source("}\nvar ok = 1;");
    assert_eq!(statement_kinds(&parser, root), vec!["VariableStatement"]);
    assert_eq!(parser.get_diagnostics()[0].code, 1128);
}

#[test]
fn parse_unterminated_string_is_reported() {
    let (parser, _root) = parse_source("var s = 'abc\nvar t = 1;");
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert!(codes.contains(&1002), "got {codes:?}");
}

#[test]
fn parse_generator_and_async_function_declarations() {
    let (parser, root) = parse_source("function *g() { yield 1; }\nasync function h() {}");
    assert!(parser.get_diagnostics().is_empty());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let flags: Vec<(bool, bool)> = sf
        .statements
        .nodes
        .iter()
        .map(|&stmt| {
            let func = arena.get_function(arena.get(stmt).unwrap()).unwrap();
            (func.asterisk_token, func.is_async)
        })
        .collect();
    assert_eq!(flags, vec![(true, false), (false, true)]);
}

#[test]
fn parse_deeply_nested_blocks_reports_nesting_error() {
    let source = format!("{}{}", "{".repeat(1200), "}".repeat(1200));
    let codes = std::thread::Builder::new()
        .stack_size(64 * 1024 * 1024)
        .spawn(move || {
            let (parser, _root) = parse_source(&source);
            parser
                .get_diagnostics()
                .iter()
                .map(|d| d.code)
                .collect::<Vec<u32>>()
        })
        .unwrap()
        .join()
        .unwrap();
    assert!(codes.contains(&2589), "got {codes:?}");
}
