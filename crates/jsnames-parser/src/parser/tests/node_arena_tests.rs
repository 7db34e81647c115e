use super::*;

fn parse(source: &str) -> (NodeArena, NodeIndex) {
    let mut parser = ParserState::new("test.js".to_string(), source.to_string());
    let root = parser.parse_source_file();
    assert!(parser.get_diagnostics().is_empty());
    (parser.into_arena(), root)
}

fn find_first(arena: &NodeArena, kind: &str) -> NodeIndex {
    let pos = arena
        .nodes
        .iter()
        .position(|node| node.data.kind_name() == kind)
        .unwrap();
    NodeIndex(pos as u32)
}

#[test]
fn test_add_node_sets_parent_links() {
    let (arena, root) = parse("var a = function() {};");
    let func = find_first(&arena, "FunctionExpression");
    let decl = arena.parent_of(func);
    assert_eq!(arena.data(decl).unwrap().kind_name(), "VariableDeclaration");

    let mut current = func;
    while arena.parent_of(current).is_some() {
        current = arena.parent_of(current);
    }
    assert_eq!(current, root);
}

#[test]
fn test_set_function_name_on_anonymous_expression() {
    let (mut arena, _root) = parse("x = function*(a) { yield a; };");
    let func = find_first(&arena, "FunctionExpression");
    assert!(arena.set_function_name(func, "x"));

    let data = arena.get_function(arena.get(func).unwrap()).unwrap();
    assert!(data.asterisk_token);
    assert_eq!(data.parameters.len(), 1);
    assert_eq!(arena.get_identifier_text(data.name), Some("x"));
    assert_eq!(arena.parent_of(data.name), func);
}

#[test]
fn test_set_function_name_refuses_named_and_non_functions() {
    let (mut arena, _root) = parse("x = function f() {}; y = () => {};");
    let named = find_first(&arena, "FunctionExpression");
    assert!(!arena.set_function_name(named, "x"));
    let arrow = find_first(&arena, "ArrowFunction");
    assert!(!arena.set_function_name(arrow, "y"));
    assert!(!arena.set_function_name(NodeIndex::NONE, "z"));
}

#[test]
fn test_children_are_in_source_order() {
    let (arena, _root) = parse("a.b[c] = d;");
    let assign = find_first(&arena, "BinaryExpression");
    let kinds: Vec<&str> = arena
        .get_children(assign)
        .into_iter()
        .map(|child| arena.data(child).unwrap().kind_name())
        .collect();
    assert_eq!(kinds, vec!["ElementAccessExpression", "Identifier"]);
}

#[test]
fn test_skip_and_outermost_parentheses() {
    let (arena, _root) = parse("x = ((function() {}));");
    let func = find_first(&arena, "FunctionExpression");
    let outer = arena.outermost_parenthesized(func);
    assert_eq!(arena.data(outer).unwrap().kind_name(), "ParenthesizedExpression");
    assert_eq!(arena.skip_parentheses(outer), func);
    assert_eq!(arena.data(arena.parent_of(outer)).unwrap().kind_name(), "BinaryExpression");
}

#[test]
fn test_typed_getters_borrow_from_the_node() {
    let (arena, _root) = parse("var a = function() {}; o.p = 1;");
    let ident = arena.get(find_first(&arena, "Identifier")).unwrap().clone();
    let func = arena.get(find_first(&arena, "FunctionExpression")).unwrap().clone();
    let access = arena
        .get(find_first(&arena, "PropertyAccessExpression"))
        .unwrap()
        .clone();
    drop(arena);

    // Data read from a detached node outlives the arena used to read it.
    let (text, has_body, access_name) = {
        let lookup = NodeArena::new();
        (
            lookup
                .get_identifier(&ident)
                .map(|data| data.escaped_text.as_str()),
            lookup.get_function(&func).map(|data| data.body.is_some()),
            lookup.get_access_expr(&access).map(|data| data.name_or_argument),
        )
    };
    assert_eq!(text, Some("a"));
    assert_eq!(has_body, Some(true));
    assert!(access_name.is_some_and(|name| name.is_some()));
    assert!(NodeArena::new().get_literal(&ident).is_none());
}
