//! Parser state - class and object literal member parsing methods
use super::state::ParserState;
use crate::parser::{
    NodeIndex,
    node::{
        AccessorData, ClassData, ComputedPropertyData, ConstructorData, MethodDeclData, NodeData,
        ObjectLiteralData, PropertyAssignmentData, PropertyDeclData, ShorthandPropertyData,
    },
};
use jsnames_common::diagnostics::diagnostic_codes;
use jsnames_scanner::SyntaxKind;

/// Modifiers seen before a member name.
#[derive(Clone, Copy, Default)]
struct MemberModifiers {
    is_static: bool,
    is_async: bool,
    asterisk_token: bool,
    accessor: Option<SyntaxKind>,
}

impl ParserState {
    // =========================================================================
    // Classes
    // =========================================================================

    /// Parse a class declaration. `name_optional` is set for
    /// `export default class {}`.
    pub(crate) fn parse_class_declaration(&mut self, name_optional: bool) -> NodeIndex {
        let start_pos = self.token_pos();
        let data = self.parse_class_like(name_optional);
        let end_pos = self.token_end();
        self.arena
            .add_node(start_pos, end_pos, NodeData::ClassDeclaration(data))
    }

    pub(crate) fn parse_class_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let data = self.parse_class_like(true);
        let end_pos = self.token_end();
        self.arena
            .add_node(start_pos, end_pos, NodeData::ClassExpression(data))
    }

    fn parse_class_like(&mut self, name_optional: bool) -> ClassData {
        self.parse_expected(SyntaxKind::ClassKeyword);
        let name = if self.is_identifier() {
            self.parse_identifier()
        } else {
            if !name_optional {
                self.parse_error_at_current_token(
                    "Identifier expected.",
                    diagnostic_codes::IDENTIFIER_EXPECTED,
                );
            }
            NodeIndex::NONE
        };
        let heritage = if self.parse_optional(SyntaxKind::ExtendsKeyword) {
            self.parse_left_hand_side_expression()
        } else {
            NodeIndex::NONE
        };

        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut members = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            if self.parse_optional(SyntaxKind::SemicolonToken) {
                continue;
            }
            let pos_before = self.token_pos();
            let member = self.parse_class_member();
            if member.is_some() {
                members.push(member);
            }
            if self.token_pos() == pos_before {
                // Nothing consumed: skip the token so recovery makes progress.
                self.next_token();
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);

        ClassData {
            name,
            heritage,
            members: self.make_node_list(members),
        }
    }

    fn parse_class_member(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut modifiers = MemberModifiers::default();
        if self.is_token(SyntaxKind::StaticKeyword) && self.look_ahead_is_modifier_followed_by_name()
        {
            self.next_token();
            modifiers.is_static = true;
        }
        self.parse_member_prefix(&mut modifiers);

        let name = self.parse_property_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }

        if let Some(kind) = modifiers.accessor {
            return self.parse_accessor_rest(start_pos, kind, modifiers.is_static, name);
        }

        if self.is_token(SyntaxKind::OpenParenToken) {
            let is_constructor = !modifiers.is_static
                && !modifiers.is_async
                && !modifiers.asterisk_token
                && self.is_constructor_name(name);
            if is_constructor {
                let (parameters, body) = self.parse_function_signature_and_body(false, false);
                let end_pos = self.token_end();
                return self.arena.add_node(
                    start_pos,
                    end_pos,
                    NodeData::Constructor(ConstructorData { parameters, body }),
                );
            }
            return self.parse_method_rest(start_pos, modifiers, name);
        }
        if modifiers.is_async || modifiers.asterisk_token {
            return self.parse_method_rest(start_pos, modifiers, name);
        }

        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression()
        } else {
            NodeIndex::NONE
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::PropertyDeclaration(PropertyDeclData {
                is_static: modifiers.is_static,
                name,
                initializer,
            }),
        )
    }

    fn is_constructor_name(&self, name: NodeIndex) -> bool {
        match self.arena.data(name) {
            Some(NodeData::Identifier(id)) => id.escaped_text == "constructor",
            Some(NodeData::StringLiteral(lit)) => lit.text == "constructor",
            _ => false,
        }
    }

    // =========================================================================
    // Object literals
    // =========================================================================

    pub(crate) fn parse_object_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut properties = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let property = self.parse_object_literal_element();
            if property.is_none() {
                break;
            }
            properties.push(property);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ObjectLiteralExpression(ObjectLiteralData {
                properties: self.make_node_list(properties),
            }),
        )
    }

    fn parse_object_literal_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        if self.is_token(SyntaxKind::DotDotDotToken) {
            return self.parse_spread_element();
        }

        let mut modifiers = MemberModifiers::default();
        self.parse_member_prefix(&mut modifiers);

        let is_shorthand_candidate = self.is_identifier();
        let name = self.parse_property_name();
        if name.is_none() {
            return NodeIndex::NONE;
        }

        if let Some(kind) = modifiers.accessor {
            return self.parse_accessor_rest(start_pos, kind, false, name);
        }
        if modifiers.is_async
            || modifiers.asterisk_token
            || self.is_token(SyntaxKind::OpenParenToken)
        {
            return self.parse_method_rest(start_pos, modifiers, name);
        }

        if self.parse_optional(SyntaxKind::ColonToken) {
            let initializer = self.parse_assignment_expression();
            let end_pos = self.token_end();
            return self.arena.add_node(
                start_pos,
                end_pos,
                NodeData::PropertyAssignment(PropertyAssignmentData { name, initializer }),
            );
        }

        if !is_shorthand_candidate {
            self.parse_expected(SyntaxKind::ColonToken);
        }
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ShorthandPropertyAssignment(ShorthandPropertyData { name }),
        )
    }

    // =========================================================================
    // Shared member helpers
    // =========================================================================

    /// Consume `get`/`set`, `async` and `*` when they act as modifiers rather
    /// than as the member name itself.
    fn parse_member_prefix(&mut self, modifiers: &mut MemberModifiers) {
        match self.token() {
            SyntaxKind::GetKeyword | SyntaxKind::SetKeyword
                if self.look_ahead_is_modifier_followed_by_name() =>
            {
                modifiers.accessor = Some(self.token());
                self.next_token();
                return;
            }
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_modifier() => {
                modifiers.is_async = true;
                self.next_token();
            }
            _ => {}
        }
        modifiers.asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);
    }

    /// `static`, `get` and `set` are modifiers only when a member name follows.
    fn look_ahead_is_modifier_followed_by_name(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_property_name_start() || p.is_token(SyntaxKind::AsteriskToken)
        })
    }

    fn look_ahead_is_async_modifier(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            !p.has_preceding_line_break()
                && (p.is_property_name_start() || p.is_token(SyntaxKind::AsteriskToken))
        })
    }

    fn is_property_name_start(&self) -> bool {
        self.is_identifier_or_keyword()
            || matches!(
                self.token(),
                SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral | SyntaxKind::OpenBracketToken
            )
    }

    /// Parse a property name: identifier (keywords allowed), string literal,
    /// numeric literal or `[computed]`.
    pub(crate) fn parse_property_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.parse_literal(),
            SyntaxKind::OpenBracketToken => {
                let start_pos = self.token_pos();
                self.next_token();
                let expression = self.parse_assignment_expression();
                self.parse_expected(SyntaxKind::CloseBracketToken);
                let end_pos = self.token_end();
                self.arena.add_node(
                    start_pos,
                    end_pos,
                    NodeData::ComputedPropertyName(ComputedPropertyData { expression }),
                )
            }
            _ if self.is_identifier_or_keyword() => self.parse_identifier_name(),
            _ => {
                self.parse_error_at_current_token(
                    "Property assignment expected.",
                    diagnostic_codes::PROPERTY_ASSIGNMENT_EXPECTED,
                );
                NodeIndex::NONE
            }
        }
    }

    fn parse_method_rest(
        &mut self,
        start_pos: u32,
        modifiers: MemberModifiers,
        name: NodeIndex,
    ) -> NodeIndex {
        let (parameters, body) =
            self.parse_function_signature_and_body(modifiers.is_async, modifiers.asterisk_token);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::MethodDeclaration(MethodDeclData {
                is_static: modifiers.is_static,
                is_async: modifiers.is_async,
                asterisk_token: modifiers.asterisk_token,
                name,
                parameters,
                body,
            }),
        )
    }

    fn parse_accessor_rest(
        &mut self,
        start_pos: u32,
        kind: SyntaxKind,
        is_static: bool,
        name: NodeIndex,
    ) -> NodeIndex {
        let (parameters, body) = self.parse_function_signature_and_body(false, false);
        let end_pos = self.token_end();
        let data = AccessorData {
            is_static,
            name,
            parameters,
            body,
        };
        let data = if kind == SyntaxKind::GetKeyword {
            NodeData::GetAccessor(data)
        } else {
            NodeData::SetAccessor(data)
        };
        self.arena.add_node(start_pos, end_pos, data)
    }
}
