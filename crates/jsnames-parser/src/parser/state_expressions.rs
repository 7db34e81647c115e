//! Parser state - expression parsing methods
use super::state::{CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_FOR_INITIALIZER, CONTEXT_FLAG_GENERATOR, ParserState};
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        AccessExprData, ArrayLiteralData, BinaryExprData, CallExprData, ConditionalExprData,
        FunctionData, LiteralData, NodeData, ParameterData, ParenthesizedData, SpreadData,
        UnaryExprData, YieldData,
    },
};
use jsnames_common::diagnostics::diagnostic_codes;
use jsnames_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Comma and assignment expressions
    // =========================================================================

    /// Parse expression (including comma operator)
    pub(crate) fn parse_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut left = self.parse_assignment_expression();
        while self.is_token(SyntaxKind::CommaToken) {
            if left.is_none() {
                break;
            }
            self.next_token();
            let right = self.parse_assignment_expression();
            let end_pos = self.token_end();
            left = self.arena.add_node(
                start_pos,
                end_pos,
                NodeData::BinaryExpression(BinaryExprData {
                    left,
                    operator_token: SyntaxKind::CommaToken,
                    right,
                }),
            );
        }
        left
    }

    /// Parse assignment expression: arrow functions, `yield`, conditional
    /// expressions and right-associative assignment.
    pub(crate) fn parse_assignment_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let result = self.parse_assignment_expression_inner();
        self.exit_recursion();
        result
    }

    fn parse_assignment_expression_inner(&mut self) -> NodeIndex {
        if self.is_token(SyntaxKind::YieldKeyword) && self.in_generator_context() {
            return self.parse_yield_expression();
        }
        if let Some(arrow) = self.try_parse_arrow_function() {
            return arrow;
        }

        let start_pos = self.token_pos();
        let left = self.parse_conditional_expression();
        if left.is_some() && self.token().is_assignment_operator() {
            let operator_token = self.token();
            self.next_token();
            let right = self.parse_assignment_expression();
            let end_pos = self.token_end();
            return self.arena.add_node(
                start_pos,
                end_pos,
                NodeData::BinaryExpression(BinaryExprData {
                    left,
                    operator_token,
                    right,
                }),
            );
        }
        left
    }

    fn parse_yield_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::YieldKeyword);
        let asterisk_token =
            !self.has_preceding_line_break() && self.parse_optional(SyntaxKind::AsteriskToken);
        let has_operand = asterisk_token
            || !(self.can_parse_semicolon()
                || matches!(
                    self.token(),
                    SyntaxKind::CloseParenToken
                        | SyntaxKind::CloseBracketToken
                        | SyntaxKind::CommaToken
                        | SyntaxKind::ColonToken
                ));
        let expression = if has_operand {
            self.parse_assignment_expression()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::YieldExpression(YieldData {
                asterisk_token,
                expression,
            }),
        )
    }

    // =========================================================================
    // Arrow functions
    // =========================================================================

    /// Parse an arrow function if one starts at the current token.
    fn try_parse_arrow_function(&mut self) -> Option<NodeIndex> {
        let is_arrow = match self.token() {
            SyntaxKind::OpenParenToken => self.look_ahead(|p| p.scan_parenthesized_arrow_head()),
            SyntaxKind::AsyncKeyword => self.look_ahead(|p| {
                p.next_token();
                if p.has_preceding_line_break() {
                    return false;
                }
                if p.is_token(SyntaxKind::OpenParenToken) {
                    p.scan_parenthesized_arrow_head()
                } else if p.is_identifier() {
                    p.next_token() == SyntaxKind::EqualsGreaterThanToken
                        && !p.has_preceding_line_break()
                } else {
                    false
                }
            }),
            _ if self.is_identifier() => self.look_ahead(|p| {
                p.next_token() == SyntaxKind::EqualsGreaterThanToken
                    && !p.has_preceding_line_break()
            }),
            _ => false,
        };
        if !is_arrow {
            return None;
        }
        Some(self.parse_arrow_function())
    }

    /// Skip a balanced parenthesized group and report whether `=>` follows.
    fn scan_parenthesized_arrow_head(&mut self) -> bool {
        let mut depth = 0u32;
        loop {
            match self.token() {
                SyntaxKind::OpenParenToken
                | SyntaxKind::OpenBracketToken
                | SyntaxKind::OpenBraceToken => depth += 1,
                SyntaxKind::CloseParenToken
                | SyntaxKind::CloseBracketToken
                | SyntaxKind::CloseBraceToken => {
                    depth = depth.saturating_sub(1);
                    if depth == 0 {
                        break;
                    }
                }
                SyntaxKind::EndOfFileToken => return false,
                _ => {}
            }
            self.next_token();
        }
        self.next_token() == SyntaxKind::EqualsGreaterThanToken && !self.has_preceding_line_break()
    }

    fn parse_arrow_function(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);

        let parameters = if self.parse_optional(SyntaxKind::OpenParenToken) {
            let parameters = self.parse_parameter_list();
            self.parse_expected(SyntaxKind::CloseParenToken);
            parameters
        } else {
            let param_start = self.token_pos();
            let name = self.parse_identifier();
            let param_end = self.token_end();
            let parameter = self.arena.add_node(
                param_start,
                param_end,
                NodeData::Parameter(ParameterData {
                    dot_dot_dot_token: false,
                    name,
                    initializer: NodeIndex::NONE,
                }),
            );
            self.make_node_list(vec![parameter])
        };
        self.parse_expected(SyntaxKind::EqualsGreaterThanToken);

        let saved_flags = self.context_flags;
        self.context_flags &= !(CONTEXT_FLAG_GENERATOR | CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_FOR_INITIALIZER);
        if is_async {
            self.context_flags |= CONTEXT_FLAG_ASYNC;
        }
        let body = if self.is_token(SyntaxKind::OpenBraceToken) {
            self.parse_block()
        } else {
            self.parse_assignment_expression()
        };
        self.context_flags = saved_flags;

        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ArrowFunction(FunctionData {
                is_async,
                asterisk_token: false,
                name: NodeIndex::NONE,
                parameters,
                body,
            }),
        )
    }

    // =========================================================================
    // Conditional and binary expressions
    // =========================================================================

    fn parse_conditional_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let condition = self.parse_binary_expression(0);
        if condition.is_none() || !self.parse_optional(SyntaxKind::QuestionToken) {
            return condition;
        }

        // `in` is allowed between `?` and `:` even in a for initializer.
        let saved_flags = self.context_flags;
        self.context_flags &= !CONTEXT_FLAG_FOR_INITIALIZER;
        let when_true = self.parse_assignment_expression();
        self.context_flags = saved_flags;

        self.parse_expected(SyntaxKind::ColonToken);
        let when_false = self.parse_assignment_expression();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ConditionalExpression(ConditionalExprData {
                condition,
                when_true,
                when_false,
            }),
        )
    }

    /// Precedence climbing over left-associative binary operators.
    fn parse_binary_expression(&mut self, min_precedence: u8) -> NodeIndex {
        let start_pos = self.token_pos();
        let mut left = self.parse_unary_expression();
        if left.is_none() {
            return left;
        }

        loop {
            let operator_token = self.token();
            let Some(precedence) = operator_token.binary_precedence() else {
                break;
            };
            if precedence <= min_precedence {
                break;
            }
            if operator_token == SyntaxKind::InKeyword && self.in_for_initializer() {
                break;
            }
            self.next_token();
            let right = self.parse_binary_expression(precedence);
            let end_pos = self.token_end();
            left = self.arena.add_node(
                start_pos,
                end_pos,
                NodeData::BinaryExpression(BinaryExprData {
                    left,
                    operator_token,
                    right,
                }),
            );
        }
        left
    }

    // =========================================================================
    // Unary and update expressions
    // =========================================================================

    fn parse_unary_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::ExclamationToken
            | SyntaxKind::MinusToken
            | SyntaxKind::PlusToken
            | SyntaxKind::TildeToken
            | SyntaxKind::TypeOfKeyword
            | SyntaxKind::VoidKeyword
            | SyntaxKind::DeleteKeyword
            | SyntaxKind::PlusPlusToken
            | SyntaxKind::MinusMinusToken => {
                if !self.enter_recursion() {
                    return NodeIndex::NONE;
                }
                let operator = self.token();
                self.next_token();
                let operand = self.parse_unary_expression();
                self.exit_recursion();
                let end_pos = self.token_end();
                self.arena.add_node(
                    start_pos,
                    end_pos,
                    NodeData::PrefixUnaryExpression(UnaryExprData { operator, operand }),
                )
            }
            _ => {
                let operand = self.parse_left_hand_side_expression();
                let is_update = matches!(
                    self.token(),
                    SyntaxKind::PlusPlusToken | SyntaxKind::MinusMinusToken
                );
                if operand.is_some() && is_update && !self.has_preceding_line_break() {
                    let operator = self.token();
                    self.next_token();
                    let end_pos = self.token_end();
                    return self.arena.add_node(
                        start_pos,
                        end_pos,
                        NodeData::PostfixUnaryExpression(UnaryExprData { operator, operand }),
                    );
                }
                operand
            }
        }
    }

    // =========================================================================
    // Member, call and new expressions
    // =========================================================================

    pub(crate) fn parse_left_hand_side_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        if expression.is_none() {
            return expression;
        }
        self.parse_member_expression_rest(start_pos, expression, true)
    }

    /// Parse `.name`, `[argument]` and (if `allow_calls`) `(arguments)` suffixes.
    fn parse_member_expression_rest(
        &mut self,
        start_pos: u32,
        mut expression: NodeIndex,
        allow_calls: bool,
    ) -> NodeIndex {
        loop {
            match self.token() {
                SyntaxKind::DotToken => {
                    self.next_token();
                    let name_or_argument = self.parse_identifier_name();
                    let end_pos = self.token_end();
                    expression = self.arena.add_node(
                        start_pos,
                        end_pos,
                        NodeData::PropertyAccessExpression(AccessExprData {
                            expression,
                            name_or_argument,
                        }),
                    );
                }
                SyntaxKind::OpenBracketToken => {
                    self.next_token();
                    let saved_flags = self.context_flags;
                    self.context_flags &= !CONTEXT_FLAG_FOR_INITIALIZER;
                    let name_or_argument = self.parse_expression();
                    self.context_flags = saved_flags;
                    self.parse_expected(SyntaxKind::CloseBracketToken);
                    let end_pos = self.token_end();
                    expression = self.arena.add_node(
                        start_pos,
                        end_pos,
                        NodeData::ElementAccessExpression(AccessExprData {
                            expression,
                            name_or_argument,
                        }),
                    );
                }
                SyntaxKind::OpenParenToken if allow_calls => {
                    let arguments = self.parse_argument_list();
                    let end_pos = self.token_end();
                    expression = self.arena.add_node(
                        start_pos,
                        end_pos,
                        NodeData::CallExpression(CallExprData {
                            expression,
                            arguments: Some(arguments),
                        }),
                    );
                }
                _ => return expression,
            }
        }
    }

    fn parse_new_expression(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::NewKeyword);

        let callee_start = self.token_pos();
        let callee = if self.is_token(SyntaxKind::NewKeyword) {
            self.parse_new_expression()
        } else {
            self.parse_primary_expression()
        };
        let expression = if callee.is_some() {
            self.parse_member_expression_rest(callee_start, callee, false)
        } else {
            callee
        };
        let arguments = if self.is_token(SyntaxKind::OpenParenToken) {
            Some(self.parse_argument_list())
        } else {
            None
        };
        self.exit_recursion();

        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::NewExpression(CallExprData {
                expression,
                arguments,
            }),
        )
    }

    fn parse_argument_list(&mut self) -> NodeList {
        self.parse_expected(SyntaxKind::OpenParenToken);
        let saved_flags = self.context_flags;
        self.context_flags &= !CONTEXT_FLAG_FOR_INITIALIZER;

        let mut arguments = Vec::new();
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            let argument = if self.is_token(SyntaxKind::DotDotDotToken) {
                self.parse_spread_element()
            } else {
                self.parse_assignment_expression()
            };
            if argument.is_none() {
                break;
            }
            arguments.push(argument);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        self.context_flags = saved_flags;
        self.parse_expected(SyntaxKind::CloseParenToken);
        self.make_node_list(arguments)
    }

    pub(crate) fn parse_spread_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::DotDotDotToken);
        let expression = self.parse_assignment_expression();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::SpreadElement(SpreadData { expression }),
        )
    }

    // =========================================================================
    // Primary expressions
    // =========================================================================

    fn parse_primary_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        match self.token() {
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                self.parse_function_expression()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_expression(),
            SyntaxKind::ClassKeyword => self.parse_class_expression(),
            SyntaxKind::OpenParenToken => self.parse_parenthesized_expression(),
            SyntaxKind::OpenBracketToken => self.parse_array_literal(),
            SyntaxKind::OpenBraceToken => self.parse_object_literal(),
            SyntaxKind::ThisKeyword => self.parse_keyword_expression(NodeData::ThisKeyword),
            SyntaxKind::SuperKeyword => self.parse_keyword_expression(NodeData::SuperKeyword),
            SyntaxKind::TrueKeyword => self.parse_keyword_expression(NodeData::TrueKeyword),
            SyntaxKind::FalseKeyword => self.parse_keyword_expression(NodeData::FalseKeyword),
            SyntaxKind::NullKeyword => self.parse_keyword_expression(NodeData::NullKeyword),
            SyntaxKind::StringLiteral | SyntaxKind::NumericLiteral => self.parse_literal(),
            _ if self.is_identifier() => self.parse_identifier(),
            _ => {
                self.parse_error_at_current_token(
                    "Expression expected.",
                    diagnostic_codes::EXPRESSION_EXPECTED,
                );
                tracing::trace!(pos = start_pos, token = ?self.token(), "no primary expression");
                NodeIndex::NONE
            }
        }
    }

    fn parse_keyword_expression(&mut self, data: NodeData) -> NodeIndex {
        let start_pos = self.token_pos();
        self.next_token();
        let end_pos = self.token_end();
        self.arena.add_node(start_pos, end_pos, data)
    }

    /// Parse a string or numeric literal at the current token.
    pub(crate) fn parse_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_string = self.is_token(SyntaxKind::StringLiteral);
        let text = self.token_value().to_string();
        self.next_token();
        let end_pos = self.token_end();
        let literal = LiteralData { text };
        let data = if is_string {
            NodeData::StringLiteral(literal)
        } else {
            NodeData::NumericLiteral(literal)
        };
        self.arena.add_node(start_pos, end_pos, data)
    }

    fn parse_parenthesized_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenParenToken);
        let saved_flags = self.context_flags;
        self.context_flags &= !CONTEXT_FLAG_FOR_INITIALIZER;
        let expression = self.parse_expression();
        self.context_flags = saved_flags;
        self.parse_expected(SyntaxKind::CloseParenToken);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ParenthesizedExpression(ParenthesizedData { expression }),
        )
    }

    fn parse_array_literal(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
        let saved_flags = self.context_flags;
        self.context_flags &= !CONTEXT_FLAG_FOR_INITIALIZER;

        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBracketToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            if self.is_token(SyntaxKind::CommaToken) {
                let pos = self.token_pos();
                elements.push(self.arena.add_node(pos, pos, NodeData::OmittedExpression));
                self.next_token();
                continue;
            }
            let element = if self.is_token(SyntaxKind::DotDotDotToken) {
                self.parse_spread_element()
            } else {
                self.parse_assignment_expression()
            };
            if element.is_none() {
                break;
            }
            elements.push(element);
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        self.context_flags = saved_flags;
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ArrayLiteralExpression(ArrayLiteralData {
                elements: self.make_node_list(elements),
            }),
        )
    }

    /// Parse `function [*] [name] (params) { body }` in expression position.
    pub(crate) fn parse_function_expression(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);

        // The name of a generator expression is bound inside it, so `yield`
        // is not a valid name there.
        let saved_flags = self.context_flags;
        if asterisk_token {
            self.context_flags |= CONTEXT_FLAG_GENERATOR;
        } else {
            self.context_flags &= !CONTEXT_FLAG_GENERATOR;
        }
        let name = if self.is_identifier() {
            self.parse_identifier()
        } else {
            NodeIndex::NONE
        };
        self.context_flags = saved_flags;

        let (parameters, body) = self.parse_function_signature_and_body(is_async, asterisk_token);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::FunctionExpression(FunctionData {
                is_async,
                asterisk_token,
                name,
                parameters,
                body,
            }),
        )
    }
}
