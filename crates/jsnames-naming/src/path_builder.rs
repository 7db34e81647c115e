//! Reconstruction of the qualified path an anonymous function is bound to.
//!
//! The builder only looks at the parent chain of the function. Parentheses
//! around the function, around object literals and around assignment
//! targets are transparent.
//!
//! ```javascript
//! var a = function() {};              // a
//! a.prototype.b = function() {};      // a.prototype.b
//! foo['-'] = function() {};           // foo['-']
//! A.prototype = { c: function() {} }; // A.prototype.c
//! function f(g = function() {}) {}    // g
//! var { h = function() {} } = {};     // h
//! ```

use std::fmt;

use jsnames_common::limits::MAX_QUALIFIED_NAME_DEPTH;
use jsnames_emitter::print_expression_compact;
use jsnames_parser::parser::{NodeArena, NodeData, NodeIndex};
use jsnames_scanner::SyntaxKind;

use crate::qualified_path::{PathSegment, QualifiedPath};

/// Why a node did not get a path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// Declarations, arrows, methods, accessors and anything else that is not
    /// a function expression.
    NotAFunctionExpression,
    AlreadyNamed,
    /// The surrounding syntax is not one of the recognized binding positions.
    NoNamingContext,
    /// A property value inside a `var`/`let`/`const` initializer.
    DeclarationObjectLiteral,
    /// Assignment to something other than a name or member access.
    UnsupportedTarget,
    /// The member chain or literal nesting exceeds `MAX_QUALIFIED_NAME_DEPTH`.
    TooDeep,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            SkipReason::NotAFunctionExpression => "not a function expression",
            SkipReason::AlreadyNamed => "function is already named",
            SkipReason::NoNamingContext => "no naming context",
            SkipReason::DeclarationObjectLiteral => "object literal in a declaration",
            SkipReason::UnsupportedTarget => "unsupported assignment target",
            SkipReason::TooDeep => "qualified name too deep",
        };
        f.write_str(text)
    }
}

/// Outcome of [`PathBuilder::build`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResolution {
    Path(QualifiedPath),
    NotApplicable(SkipReason),
}

impl PathResolution {
    pub fn path(&self) -> Option<&QualifiedPath> {
        match self {
            PathResolution::Path(path) => Some(path),
            PathResolution::NotApplicable(_) => None,
        }
    }
}

/// The binding position found directly above a function expression.
enum NamingContext {
    /// `var NAME = fn`
    Declaration(NodeIndex),
    /// `function f(NAME = fn) {}`, `{ NAME = fn }`, `[NAME = fn]`.
    Binding(NodeIndex),
    /// `TARGET = fn`
    Assignment(NodeIndex),
    /// `{ key: fn }`; holds the property assignment node.
    ObjectLiteralValue(NodeIndex),
    None,
}

/// Builds qualified paths for function nodes of one arena.
pub struct PathBuilder<'a> {
    arena: &'a NodeArena,
}

impl<'a> PathBuilder<'a> {
    pub fn new(arena: &'a NodeArena) -> Self {
        PathBuilder { arena }
    }

    /// Path of the anonymous function expression `func`, or the reason it
    /// has none.
    pub fn build(&self, func: NodeIndex) -> PathResolution {
        match self.arena.data(func) {
            Some(NodeData::FunctionExpression(data)) if data.name.is_some() => {
                return PathResolution::NotApplicable(SkipReason::AlreadyNamed);
            }
            Some(NodeData::FunctionExpression(_)) => {}
            _ => return PathResolution::NotApplicable(SkipReason::NotAFunctionExpression),
        }

        let segments = match self.classify_context(func) {
            NamingContext::Declaration(name) | NamingContext::Binding(name) => {
                self.binding_segments(name)
            }
            NamingContext::Assignment(target) => self.target_segments(target),
            NamingContext::ObjectLiteralValue(property) => self.object_literal_segments(property),
            NamingContext::None => Err(SkipReason::NoNamingContext),
        };
        match segments.map(|segments| QualifiedPath::from_segments(&segments)) {
            Ok(Some(path)) => PathResolution::Path(path),
            Ok(None) => PathResolution::NotApplicable(SkipReason::NoNamingContext),
            Err(reason) => PathResolution::NotApplicable(reason),
        }
    }

    /// Classify the parent of `expr`, seen through any parentheses.
    fn classify_context(&self, expr: NodeIndex) -> NamingContext {
        let outer = self.arena.outermost_parenthesized(expr);
        let parent = self.arena.parent_of(outer);
        let Some(parent_data) = self.arena.data(parent) else {
            return NamingContext::None;
        };

        match parent_data {
            NodeData::VariableDeclaration(data) if data.initializer == outer => {
                NamingContext::Declaration(data.name)
            }
            NodeData::Parameter(data) if data.initializer == outer => {
                NamingContext::Binding(data.name)
            }
            NodeData::BindingElement(data) if data.initializer == outer => {
                NamingContext::Binding(data.name)
            }
            NodeData::BinaryExpression(data)
                if data.operator_token == SyntaxKind::EqualsToken && data.right == outer =>
            {
                NamingContext::Assignment(data.left)
            }
            NodeData::PropertyAssignment(data) if data.initializer == outer => {
                NamingContext::ObjectLiteralValue(parent)
            }
            NodeData::SourceFile(_)
            | NodeData::VariableStatement(_)
            | NodeData::VariableDeclarationList(_)
            | NodeData::VariableDeclaration(_)
            | NodeData::FunctionDeclaration(_)
            | NodeData::ClassDeclaration(_)
            | NodeData::Block(_)
            | NodeData::ExpressionStatement(_)
            | NodeData::ReturnStatement(_)
            | NodeData::ThrowStatement(_)
            | NodeData::IfStatement(_)
            | NodeData::WhileStatement(_)
            | NodeData::ForStatement(_)
            | NodeData::EmptyStatement
            | NodeData::ExportDefault(_)
            | NodeData::ExportDeclaration(_)
            | NodeData::Identifier(_)
            | NodeData::StringLiteral(_)
            | NodeData::NumericLiteral(_)
            | NodeData::TrueKeyword
            | NodeData::FalseKeyword
            | NodeData::NullKeyword
            | NodeData::ThisKeyword
            | NodeData::SuperKeyword
            | NodeData::ArrayLiteralExpression(_)
            | NodeData::ObjectLiteralExpression(_)
            | NodeData::OmittedExpression
            | NodeData::PropertyAssignment(_)
            | NodeData::ShorthandPropertyAssignment(_)
            | NodeData::SpreadElement(_)
            | NodeData::ComputedPropertyName(_)
            | NodeData::MethodDeclaration(_)
            | NodeData::GetAccessor(_)
            | NodeData::SetAccessor(_)
            | NodeData::Constructor(_)
            | NodeData::PropertyDeclaration(_)
            | NodeData::FunctionExpression(_)
            | NodeData::ArrowFunction(_)
            | NodeData::ClassExpression(_)
            | NodeData::Parameter(_)
            | NodeData::ObjectBindingPattern(_)
            | NodeData::ArrayBindingPattern(_)
            | NodeData::BindingElement(_)
            | NodeData::PropertyAccessExpression(_)
            | NodeData::ElementAccessExpression(_)
            | NodeData::CallExpression(_)
            | NodeData::NewExpression(_)
            | NodeData::BinaryExpression(_)
            | NodeData::PrefixUnaryExpression(_)
            | NodeData::PostfixUnaryExpression(_)
            | NodeData::ConditionalExpression(_)
            | NodeData::ParenthesizedExpression(_)
            | NodeData::YieldExpression(_) => NamingContext::None,
        }
    }

    /// Only plain identifiers name a binding; patterns do not.
    fn binding_segments(&self, name: NodeIndex) -> Result<Vec<PathSegment>, SkipReason> {
        self.arena
            .get_identifier_text(name)
            .map(|text| vec![PathSegment::identifier(text)])
            .ok_or(SkipReason::NoNamingContext)
    }

    /// Segments of an assignment target: a name or a member access chain.
    fn target_segments(&self, target: NodeIndex) -> Result<Vec<PathSegment>, SkipReason> {
        let target = self.arena.skip_parentheses(target);
        match self.arena.data(target) {
            Some(NodeData::Identifier(data)) => {
                Ok(vec![PathSegment::identifier(data.escaped_text.as_str())])
            }
            Some(NodeData::PropertyAccessExpression(_) | NodeData::ElementAccessExpression(_)) => {
                self.access_chain_segments(target)
            }
            _ => Err(SkipReason::UnsupportedTarget),
        }
    }

    /// Walk `a.b[c].d` from the outside in, then reverse. A base that is not
    /// a name or `this` becomes its compact source text.
    fn access_chain_segments(&self, target: NodeIndex) -> Result<Vec<PathSegment>, SkipReason> {
        let mut segments = Vec::new();
        let mut current = target;
        loop {
            if segments.len() >= MAX_QUALIFIED_NAME_DEPTH as usize {
                return Err(SkipReason::TooDeep);
            }
            match self.arena.data(current) {
                Some(NodeData::PropertyAccessExpression(data)) => {
                    let Some(name) = self.arena.get_identifier_text(data.name_or_argument) else {
                        return Err(SkipReason::UnsupportedTarget);
                    };
                    segments.push(PathSegment::identifier(name));
                    current = data.expression;
                }
                Some(NodeData::ElementAccessExpression(data)) => {
                    segments.push(self.element_segment(data.name_or_argument));
                    current = data.expression;
                }
                Some(NodeData::Identifier(data)) => {
                    segments.push(PathSegment::identifier(data.escaped_text.as_str()));
                    break;
                }
                Some(NodeData::ThisKeyword) => {
                    segments.push(PathSegment::identifier("this"));
                    break;
                }
                Some(_) => {
                    segments.push(PathSegment::bracketed(self.compact_text(current)));
                    break;
                }
                None => return Err(SkipReason::UnsupportedTarget),
            }
        }
        segments.reverse();
        Ok(segments)
    }

    /// `obj['key']` keeps the cooked key; any other argument is kept as text.
    fn element_segment(&self, argument: NodeIndex) -> PathSegment {
        match self.string_literal_value(argument) {
            Some(key) => PathSegment::string_key(key),
            None => PathSegment::bracketed(self.compact_text(argument)),
        }
    }

    /// Climb from a property assignment through nested object literals to
    /// the assignment that owns the outermost literal.
    fn object_literal_segments(&self, property: NodeIndex) -> Result<Vec<PathSegment>, SkipReason> {
        let mut keys = Vec::new();
        let mut property = property;
        loop {
            if keys.len() >= MAX_QUALIFIED_NAME_DEPTH as usize {
                return Err(SkipReason::TooDeep);
            }
            let Some(NodeData::PropertyAssignment(data)) = self.arena.data(property) else {
                return Err(SkipReason::NoNamingContext);
            };
            keys.push(self.property_key_segment(data.name)?);

            let literal = self.arena.parent_of(property);
            match self.classify_context(literal) {
                NamingContext::ObjectLiteralValue(outer_property) => property = outer_property,
                NamingContext::Assignment(target) => {
                    let mut segments = self.target_segments(target)?;
                    segments.extend(keys.into_iter().rev());
                    return Ok(segments);
                }
                NamingContext::Declaration(_) => return Err(SkipReason::DeclarationObjectLiteral),
                NamingContext::Binding(_) | NamingContext::None => {
                    return Err(SkipReason::NoNamingContext);
                }
            }
        }
    }

    fn property_key_segment(&self, name: NodeIndex) -> Result<PathSegment, SkipReason> {
        match self.arena.data(name) {
            Some(NodeData::Identifier(data)) => {
                Ok(PathSegment::identifier(data.escaped_text.as_str()))
            }
            Some(NodeData::StringLiteral(data)) => Ok(PathSegment::string_key(data.text.as_str())),
            Some(NodeData::NumericLiteral(data)) => Ok(PathSegment::bracketed(data.text.as_str())),
            Some(NodeData::ComputedPropertyName(data)) => {
                Ok(match self.string_literal_value(data.expression) {
                    Some(key) => PathSegment::string_key(key),
                    None => PathSegment::dotted(self.compact_text(data.expression)),
                })
            }
            _ => Err(SkipReason::NoNamingContext),
        }
    }

    /// Cooked value of a string literal, looking through parentheses.
    fn string_literal_value(&self, index: NodeIndex) -> Option<&'a str> {
        self.arena
            .get_string_literal_text(self.arena.skip_parentheses(index))
    }

    fn compact_text(&self, expr: NodeIndex) -> String {
        print_expression_compact(self.arena, expr)
    }
}
