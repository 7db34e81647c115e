//! Node types for the arena AST.
//!
//! A [`Node`] carries its source range, its parent and a [`NodeData`] payload.
//! `NodeData` is a closed enum: every syntactic shape the parser can produce
//! is one variant, so consumers match exhaustively instead of inspecting kind
//! tags at runtime.

use std::sync::Arc;

use jsnames_scanner::SyntaxKind;

use super::base::{NodeIndex, NodeList};

/// The node storage. Children are always added before their parents, so a
/// parent's index is greater than the indices of the children it was built
/// with. Identifiers attached later by passes are appended at the end.
#[derive(Debug, Default)]
pub struct NodeArena {
    pub nodes: Vec<Node>,
}

#[derive(Clone, Debug)]
pub struct Node {
    pub pos: u32,
    pub end: u32,
    pub parent: NodeIndex,
    pub data: NodeData,
}

#[derive(Clone, Debug)]
pub enum NodeData {
    SourceFile(SourceFileData),

    // Statements
    VariableStatement(VariableStatementData),
    VariableDeclarationList(VariableDeclarationListData),
    VariableDeclaration(VariableDeclarationData),
    FunctionDeclaration(FunctionData),
    ClassDeclaration(ClassData),
    Block(BlockData),
    ExpressionStatement(ExprStatementData),
    ReturnStatement(ReturnData),
    ThrowStatement(ReturnData),
    IfStatement(IfStatementData),
    WhileStatement(LoopData),
    ForStatement(LoopData),
    EmptyStatement,
    /// `export default <expression or declaration>`
    ExportDefault(ExportDefaultData),
    /// `export <declaration>`
    ExportDeclaration(ExportDeclData),

    // Literals and primaries
    Identifier(IdentifierData),
    StringLiteral(LiteralData),
    NumericLiteral(LiteralData),
    TrueKeyword,
    FalseKeyword,
    NullKeyword,
    ThisKeyword,
    SuperKeyword,
    ArrayLiteralExpression(ArrayLiteralData),
    ObjectLiteralExpression(ObjectLiteralData),
    OmittedExpression,

    // Object literal and class members
    PropertyAssignment(PropertyAssignmentData),
    ShorthandPropertyAssignment(ShorthandPropertyData),
    SpreadElement(SpreadData),
    ComputedPropertyName(ComputedPropertyData),
    MethodDeclaration(MethodDeclData),
    GetAccessor(AccessorData),
    SetAccessor(AccessorData),
    Constructor(ConstructorData),
    PropertyDeclaration(PropertyDeclData),

    // Functions and bindings
    FunctionExpression(FunctionData),
    ArrowFunction(FunctionData),
    ClassExpression(ClassData),
    Parameter(ParameterData),
    ObjectBindingPattern(BindingPatternData),
    ArrayBindingPattern(BindingPatternData),
    BindingElement(BindingElementData),

    // Operators
    PropertyAccessExpression(AccessExprData),
    ElementAccessExpression(AccessExprData),
    CallExpression(CallExprData),
    NewExpression(CallExprData),
    BinaryExpression(BinaryExprData),
    PrefixUnaryExpression(UnaryExprData),
    PostfixUnaryExpression(UnaryExprData),
    ConditionalExpression(ConditionalExprData),
    ParenthesizedExpression(ParenthesizedData),
    YieldExpression(YieldData),
}

#[derive(Clone, Debug)]
pub struct SourceFileData {
    pub statements: NodeList,
    pub file_name: String,
    pub text: Arc<str>,
}

#[derive(Clone, Debug)]
pub struct VariableStatementData {
    pub declaration_list: NodeIndex,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VariableKind {
    Var,
    Let,
    Const,
}

impl VariableKind {
    pub const fn keyword(self) -> &'static str {
        match self {
            VariableKind::Var => "var",
            VariableKind::Let => "let",
            VariableKind::Const => "const",
        }
    }
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationListData {
    pub kind: VariableKind,
    pub declarations: NodeList,
}

#[derive(Clone, Debug)]
pub struct VariableDeclarationData {
    /// Identifier or binding pattern.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Shared by function declarations, function expressions and arrow functions.
#[derive(Clone, Debug)]
pub struct FunctionData {
    pub is_async: bool,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub parameters: NodeList,
    /// A block, or an expression for concise arrow bodies.
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ClassData {
    pub name: NodeIndex,
    pub heritage: NodeIndex,
    pub members: NodeList,
}

#[derive(Clone, Debug)]
pub struct BlockData {
    pub statements: NodeList,
}

#[derive(Clone, Debug)]
pub struct ExprStatementData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ReturnData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IfStatementData {
    pub expression: NodeIndex,
    pub then_statement: NodeIndex,
    pub else_statement: NodeIndex,
}

/// `while (condition) statement` uses only `condition` and `statement`.
#[derive(Clone, Debug)]
pub struct LoopData {
    pub initializer: NodeIndex,
    pub condition: NodeIndex,
    pub incrementor: NodeIndex,
    pub statement: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExportDefaultData {
    /// A function/class declaration or an arbitrary expression.
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ExportDeclData {
    pub declaration: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct IdentifierData {
    pub escaped_text: String,
}

/// Cooked value for string literals, raw text for numeric literals.
#[derive(Clone, Debug)]
pub struct LiteralData {
    pub text: String,
}

#[derive(Clone, Debug)]
pub struct ArrayLiteralData {
    pub elements: NodeList,
}

#[derive(Clone, Debug)]
pub struct ObjectLiteralData {
    pub properties: NodeList,
}

#[derive(Clone, Debug)]
pub struct PropertyAssignmentData {
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ShorthandPropertyData {
    pub name: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct SpreadData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ComputedPropertyData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct MethodDeclData {
    pub is_static: bool,
    pub is_async: bool,
    pub asterisk_token: bool,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct AccessorData {
    pub is_static: bool,
    pub name: NodeIndex,
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConstructorData {
    pub parameters: NodeList,
    pub body: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct PropertyDeclData {
    pub is_static: bool,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParameterData {
    pub dot_dot_dot_token: bool,
    /// Identifier or binding pattern.
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct BindingPatternData {
    pub elements: NodeList,
}

/// `{ property_name: name = initializer }`, `{ name = initializer }`,
/// `[name = initializer]`, `...name`.
#[derive(Clone, Debug)]
pub struct BindingElementData {
    pub dot_dot_dot_token: bool,
    pub property_name: NodeIndex,
    pub name: NodeIndex,
    pub initializer: NodeIndex,
}

/// Shared by property access (`name_or_argument` is an identifier) and
/// element access (`name_or_argument` is any expression).
#[derive(Clone, Debug)]
pub struct AccessExprData {
    pub expression: NodeIndex,
    pub name_or_argument: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct CallExprData {
    pub expression: NodeIndex,
    /// `None` for `new X` without an argument list.
    pub arguments: Option<NodeList>,
}

#[derive(Clone, Debug)]
pub struct BinaryExprData {
    pub left: NodeIndex,
    pub operator_token: SyntaxKind,
    pub right: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct UnaryExprData {
    pub operator: SyntaxKind,
    pub operand: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ConditionalExprData {
    pub condition: NodeIndex,
    pub when_true: NodeIndex,
    pub when_false: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct ParenthesizedData {
    pub expression: NodeIndex,
}

#[derive(Clone, Debug)]
pub struct YieldData {
    pub asterisk_token: bool,
    pub expression: NodeIndex,
}

impl NodeData {
    /// Short kind name, used in logs and test failure messages.
    pub const fn kind_name(&self) -> &'static str {
        match self {
            NodeData::SourceFile(_) => "SourceFile",
            NodeData::VariableStatement(_) => "VariableStatement",
            NodeData::VariableDeclarationList(_) => "VariableDeclarationList",
            NodeData::VariableDeclaration(_) => "VariableDeclaration",
            NodeData::FunctionDeclaration(_) => "FunctionDeclaration",
            NodeData::ClassDeclaration(_) => "ClassDeclaration",
            NodeData::Block(_) => "Block",
            NodeData::ExpressionStatement(_) => "ExpressionStatement",
            NodeData::ReturnStatement(_) => "ReturnStatement",
            NodeData::ThrowStatement(_) => "ThrowStatement",
            NodeData::IfStatement(_) => "IfStatement",
            NodeData::WhileStatement(_) => "WhileStatement",
            NodeData::ForStatement(_) => "ForStatement",
            NodeData::EmptyStatement => "EmptyStatement",
            NodeData::ExportDefault(_) => "ExportDefault",
            NodeData::ExportDeclaration(_) => "ExportDeclaration",
            NodeData::Identifier(_) => "Identifier",
            NodeData::StringLiteral(_) => "StringLiteral",
            NodeData::NumericLiteral(_) => "NumericLiteral",
            NodeData::TrueKeyword => "TrueKeyword",
            NodeData::FalseKeyword => "FalseKeyword",
            NodeData::NullKeyword => "NullKeyword",
            NodeData::ThisKeyword => "ThisKeyword",
            NodeData::SuperKeyword => "SuperKeyword",
            NodeData::ArrayLiteralExpression(_) => "ArrayLiteralExpression",
            NodeData::ObjectLiteralExpression(_) => "ObjectLiteralExpression",
            NodeData::OmittedExpression => "OmittedExpression",
            NodeData::PropertyAssignment(_) => "PropertyAssignment",
            NodeData::ShorthandPropertyAssignment(_) => "ShorthandPropertyAssignment",
            NodeData::SpreadElement(_) => "SpreadElement",
            NodeData::ComputedPropertyName(_) => "ComputedPropertyName",
            NodeData::MethodDeclaration(_) => "MethodDeclaration",
            NodeData::GetAccessor(_) => "GetAccessor",
            NodeData::SetAccessor(_) => "SetAccessor",
            NodeData::Constructor(_) => "Constructor",
            NodeData::PropertyDeclaration(_) => "PropertyDeclaration",
            NodeData::FunctionExpression(_) => "FunctionExpression",
            NodeData::ArrowFunction(_) => "ArrowFunction",
            NodeData::ClassExpression(_) => "ClassExpression",
            NodeData::Parameter(_) => "Parameter",
            NodeData::ObjectBindingPattern(_) => "ObjectBindingPattern",
            NodeData::ArrayBindingPattern(_) => "ArrayBindingPattern",
            NodeData::BindingElement(_) => "BindingElement",
            NodeData::PropertyAccessExpression(_) => "PropertyAccessExpression",
            NodeData::ElementAccessExpression(_) => "ElementAccessExpression",
            NodeData::CallExpression(_) => "CallExpression",
            NodeData::NewExpression(_) => "NewExpression",
            NodeData::BinaryExpression(_) => "BinaryExpression",
            NodeData::PrefixUnaryExpression(_) => "PrefixUnaryExpression",
            NodeData::PostfixUnaryExpression(_) => "PostfixUnaryExpression",
            NodeData::ConditionalExpression(_) => "ConditionalExpression",
            NodeData::ParenthesizedExpression(_) => "ParenthesizedExpression",
            NodeData::YieldExpression(_) => "YieldExpression",
        }
    }

    /// Whether this node is a function-like construct with its own body.
    pub const fn is_function_like(&self) -> bool {
        matches!(
            self,
            NodeData::FunctionDeclaration(_)
                | NodeData::FunctionExpression(_)
                | NodeData::ArrowFunction(_)
                | NodeData::MethodDeclaration(_)
                | NodeData::GetAccessor(_)
                | NodeData::SetAccessor(_)
                | NodeData::Constructor(_)
        )
    }

    /// Child nodes in source order. Absent children are skipped.
    pub fn children(&self) -> Vec<NodeIndex> {
        fn push(out: &mut Vec<NodeIndex>, idx: NodeIndex) {
            if idx.is_some() {
                out.push(idx);
            }
        }
        fn push_list(out: &mut Vec<NodeIndex>, list: &NodeList) {
            out.extend(list.nodes.iter().copied().filter(|idx| idx.is_some()));
        }

        let mut out = Vec::new();
        match self {
            NodeData::SourceFile(data) => push_list(&mut out, &data.statements),
            NodeData::VariableStatement(data) => push(&mut out, data.declaration_list),
            NodeData::VariableDeclarationList(data) => push_list(&mut out, &data.declarations),
            NodeData::VariableDeclaration(data) => {
                push(&mut out, data.name);
                push(&mut out, data.initializer);
            }
            NodeData::FunctionDeclaration(data)
            | NodeData::FunctionExpression(data)
            | NodeData::ArrowFunction(data) => {
                push(&mut out, data.name);
                push_list(&mut out, &data.parameters);
                push(&mut out, data.body);
            }
            NodeData::ClassDeclaration(data) | NodeData::ClassExpression(data) => {
                push(&mut out, data.name);
                push(&mut out, data.heritage);
                push_list(&mut out, &data.members);
            }
            NodeData::Block(data) => push_list(&mut out, &data.statements),
            NodeData::ExpressionStatement(data) => push(&mut out, data.expression),
            NodeData::ReturnStatement(data) | NodeData::ThrowStatement(data) => {
                push(&mut out, data.expression);
            }
            NodeData::IfStatement(data) => {
                push(&mut out, data.expression);
                push(&mut out, data.then_statement);
                push(&mut out, data.else_statement);
            }
            NodeData::WhileStatement(data) | NodeData::ForStatement(data) => {
                push(&mut out, data.initializer);
                push(&mut out, data.condition);
                push(&mut out, data.incrementor);
                push(&mut out, data.statement);
            }
            NodeData::ExportDefault(data) => push(&mut out, data.expression),
            NodeData::ExportDeclaration(data) => push(&mut out, data.declaration),
            NodeData::ArrayLiteralExpression(data) => push_list(&mut out, &data.elements),
            NodeData::ObjectLiteralExpression(data) => push_list(&mut out, &data.properties),
            NodeData::PropertyAssignment(data) => {
                push(&mut out, data.name);
                push(&mut out, data.initializer);
            }
            NodeData::ShorthandPropertyAssignment(data) => push(&mut out, data.name),
            NodeData::SpreadElement(data) => push(&mut out, data.expression),
            NodeData::ComputedPropertyName(data) => push(&mut out, data.expression),
            NodeData::MethodDeclaration(data) => {
                push(&mut out, data.name);
                push_list(&mut out, &data.parameters);
                push(&mut out, data.body);
            }
            NodeData::GetAccessor(data) | NodeData::SetAccessor(data) => {
                push(&mut out, data.name);
                push_list(&mut out, &data.parameters);
                push(&mut out, data.body);
            }
            NodeData::Constructor(data) => {
                push_list(&mut out, &data.parameters);
                push(&mut out, data.body);
            }
            NodeData::PropertyDeclaration(data) => {
                push(&mut out, data.name);
                push(&mut out, data.initializer);
            }
            NodeData::Parameter(data) => {
                push(&mut out, data.name);
                push(&mut out, data.initializer);
            }
            NodeData::ObjectBindingPattern(data) | NodeData::ArrayBindingPattern(data) => {
                push_list(&mut out, &data.elements);
            }
            NodeData::BindingElement(data) => {
                push(&mut out, data.property_name);
                push(&mut out, data.name);
                push(&mut out, data.initializer);
            }
            NodeData::PropertyAccessExpression(data) | NodeData::ElementAccessExpression(data) => {
                push(&mut out, data.expression);
                push(&mut out, data.name_or_argument);
            }
            NodeData::CallExpression(data) | NodeData::NewExpression(data) => {
                push(&mut out, data.expression);
                if let Some(arguments) = &data.arguments {
                    push_list(&mut out, arguments);
                }
            }
            NodeData::BinaryExpression(data) => {
                push(&mut out, data.left);
                push(&mut out, data.right);
            }
            NodeData::PrefixUnaryExpression(data) | NodeData::PostfixUnaryExpression(data) => {
                push(&mut out, data.operand);
            }
            NodeData::ConditionalExpression(data) => {
                push(&mut out, data.condition);
                push(&mut out, data.when_true);
                push(&mut out, data.when_false);
            }
            NodeData::ParenthesizedExpression(data) => push(&mut out, data.expression),
            NodeData::YieldExpression(data) => push(&mut out, data.expression),
            NodeData::Identifier(_)
            | NodeData::StringLiteral(_)
            | NodeData::NumericLiteral(_)
            | NodeData::TrueKeyword
            | NodeData::FalseKeyword
            | NodeData::NullKeyword
            | NodeData::ThisKeyword
            | NodeData::SuperKeyword
            | NodeData::OmittedExpression
            | NodeData::EmptyStatement => {}
        }
        out
    }
}
