//! Tests for expression parsing in the parser.
use jsnames_parser::parser::{NodeArena, NodeData, NodeIndex, ParserState};
use jsnames_scanner::SyntaxKind;

fn parse_source(source: &str) -> (ParserState, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    (parser, root)
}

/// The expression of the first expression statement.
fn first_expression(source: &str) -> (ParserState, NodeIndex) {
    let (parser, root) = parse_source(source);
    assert!(
        parser.get_diagnostics().is_empty(),
        "unexpected diagnostics: {:?}",
        parser.get_diagnostics()
    );
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let Some(NodeData::ExpressionStatement(stmt)) = arena.data(sf.statements.nodes[0]) else {
        panic!("expected expression statement");
    };
    let expression = stmt.expression;
    (parser, expression)
}

fn kind(arena: &NodeArena, idx: NodeIndex) -> &'static str {
    arena.data(idx).unwrap().kind_name()
}

#[test]
fn parse_assignment_is_right_associative() {
    let (parser, expr) = first_expression("a = b = c;");
    let arena = parser.get_arena();
    let outer = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(outer.operator_token, SyntaxKind::EqualsToken);
    assert_eq!(arena.get_identifier_text(outer.left), Some("a"));
    assert_eq!(kind(arena, outer.right), "BinaryExpression");
}

#[test]
fn parse_binary_precedence() {
    let (parser, expr) = first_expression("a + b * c || d;");
    let arena = parser.get_arena();
    let or = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(or.operator_token, SyntaxKind::BarBarToken);
    let plus = arena.get_binary_expr(arena.get(or.left).unwrap()).unwrap();
    assert_eq!(plus.operator_token, SyntaxKind::PlusToken);
    let times = arena.get_binary_expr(arena.get(plus.right).unwrap()).unwrap();
    assert_eq!(times.operator_token, SyntaxKind::AsteriskToken);
}

#[test]
fn parse_member_and_call_chain() {
    let (parser, expr) = first_expression("document.getElementById('x').onClick = function() {};");
    let arena = parser.get_arena();
    let assign = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    assert_eq!(kind(arena, assign.left), "PropertyAccessExpression");
    assert_eq!(kind(arena, assign.right), "FunctionExpression");

    let access = arena.get_access_expr(arena.get(assign.left).unwrap()).unwrap();
    assert_eq!(arena.get_identifier_text(access.name_or_argument), Some("onClick"));
    assert_eq!(kind(arena, access.expression), "CallExpression");
}

#[test]
fn parse_element_access_with_computed_argument() {
    let (parser, expr) = first_expression("a.b[x()].d;");
    let arena = parser.get_arena();
    let outer = arena.get_access_expr(arena.get(expr).unwrap()).unwrap();
    let element = arena.get(outer.expression).unwrap();
    assert_eq!(element.data.kind_name(), "ElementAccessExpression");
    let element = arena.get_access_expr(element).unwrap();
    assert_eq!(kind(arena, element.name_or_argument), "CallExpression");
}

#[test]
fn parse_arrow_functions() {
    for source in ["x => x;", "(a, b) => a + b;", "async (a) => { return a; };", "async x => x;", "() => {};"] {
        let (parser, expr) = first_expression(source);
        assert_eq!(kind(parser.get_arena(), expr), "ArrowFunction", "{source}");
    }
}

#[test]
fn parse_parenthesized_expression_is_not_arrow() {
    let (parser, expr) = first_expression("(a, b);");
    let arena = parser.get_arena();
    assert_eq!(kind(arena, expr), "ParenthesizedExpression");
    assert_eq!(kind(arena, arena.skip_parentheses(expr)), "BinaryExpression");
}

#[test]
fn parse_conditional_and_unary() {
    let (parser, expr) = first_expression("!a ? -b : typeof c;");
    let arena = parser.get_arena();
    let Some(NodeData::ConditionalExpression(cond)) = arena.data(expr) else {
        panic!("expected conditional");
    };
    assert_eq!(kind(arena, cond.condition), "PrefixUnaryExpression");
    assert_eq!(kind(arena, cond.when_true), "PrefixUnaryExpression");
    assert_eq!(kind(arena, cond.when_false), "PrefixUnaryExpression");
}

#[test]
fn parse_new_with_and_without_arguments() {
    let (parser, expr) = first_expression("new Foo.Bar(1);");
    let arena = parser.get_arena();
    let Some(NodeData::NewExpression(new_expr)) = arena.data(expr) else {
        panic!("expected new expression");
    };
    assert_eq!(kind(arena, new_expr.expression), "PropertyAccessExpression");
    assert_eq!(new_expr.arguments.as_ref().map(|a| a.len()), Some(1));

    let (parser, expr) = first_expression("new Foo;");
    let Some(NodeData::NewExpression(new_expr)) = parser.get_arena().data(expr) else {
        panic!("expected new expression");
    };
    assert!(new_expr.arguments.is_none());
}

#[test]
fn parse_object_literal_members() {
    let (parser, expr) = first_expression(
        "x = {a: 1, 'b': function() {}, [c]: 2, d, e() {}, get f() {}, set f(v) {}, *g() {}, async h() {}, ...i, get: 3};",
    );
    let arena = parser.get_arena();
    let assign = arena.get_binary_expr(arena.get(expr).unwrap()).unwrap();
    let Some(NodeData::ObjectLiteralExpression(obj)) = arena.data(assign.right) else {
        panic!("expected object literal");
    };
    let kinds: Vec<&str> = obj.properties.nodes.iter().map(|&p| kind(arena, p)).collect();
    assert_eq!(
        kinds,
        vec![
            "PropertyAssignment",
            "PropertyAssignment",
            "PropertyAssignment",
            "ShorthandPropertyAssignment",
            "MethodDeclaration",
            "GetAccessor",
            "SetAccessor",
            "MethodDeclaration",
            "MethodDeclaration",
            "SpreadElement",
            "PropertyAssignment",
        ]
    );
}

#[test]
fn parse_class_members() {
    let (parser, root) = parse_source(
        "class A extends B { constructor() {} m() {} static s() {} get g() {} x = function() {}; static y; }",
    );
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let arena = parser.get_arena();
    let sf = arena.get_source_file_at(root).unwrap();
    let Some(NodeData::ClassDeclaration(class)) = arena.data(sf.statements.nodes[0]) else {
        panic!("expected class");
    };
    assert_eq!(arena.get_identifier_text(class.heritage), Some("B"));
    let kinds: Vec<&str> = class.members.nodes.iter().map(|&m| kind(arena, m)).collect();
    assert_eq!(
        kinds,
        vec![
            "Constructor",
            "MethodDeclaration",
            "MethodDeclaration",
            "GetAccessor",
            "PropertyDeclaration",
            "PropertyDeclaration",
        ]
    );
}

#[test]
fn parse_yield_only_in_generators() {
    let (parser, root) = parse_source("function *g() { var x = yield; yield* x; }\nvar yield = 1;");
    assert!(parser.get_diagnostics().is_empty(), "{:?}", parser.get_diagnostics());
    let sf = parser.get_arena().get_source_file_at(root).unwrap();
    assert_eq!(sf.statements.nodes.len(), 2);
}

#[test]
fn parse_missing_expression_reports_error() {
    let (parser, _root) = parse_source("a = ;");
    let codes: Vec<u32> = parser.get_diagnostics().iter().map(|d| d.code).collect();
    assert_eq!(codes, vec![1109]);
}

#[test]
fn parse_node_positions_cover_source_text() {
    let source = "var a = function() {};";
    let (parser, root) = parse_source(source);
    let arena = parser.get_arena();
    let sf_node = arena.get(root).unwrap();
    assert_eq!((sf_node.pos, sf_node.end), (0, source.len() as u32));
    let func = arena
        .nodes
        .iter()
        .find(|n| n.data.kind_name() == "FunctionExpression")
        .unwrap();
    assert_eq!(&source[func.pos as usize..func.end as usize], "function() {}");
}
