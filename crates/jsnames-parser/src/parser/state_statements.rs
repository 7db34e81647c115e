//! Parser state - statement and declaration parsing methods
use super::state::{CONTEXT_FLAG_ASYNC, CONTEXT_FLAG_FOR_INITIALIZER, CONTEXT_FLAG_GENERATOR, ParseDiagnostic, ParserState};
use crate::parser::{
    NodeIndex, NodeList,
    node::{
        BindingElementData, BindingPatternData, BlockData, ExportDeclData, ExportDefaultData,
        ExprStatementData, FunctionData, IfStatementData, LoopData, NodeData, ParameterData,
        ReturnData, SourceFileData, VariableDeclarationData, VariableDeclarationListData,
        VariableKind, VariableStatementData,
    },
};
use jsnames_common::diagnostics::diagnostic_codes;
use jsnames_scanner::SyntaxKind;

impl ParserState {
    // =========================================================================
    // Source file and statement lists
    // =========================================================================

    /// Parse a source file
    #[tracing::instrument(level = "debug", skip(self), fields(file = %self.file_name))]
    pub fn parse_source_file(&mut self) -> NodeIndex {
        self.next_token();
        let statements = self.parse_source_file_statements();

        // Collect scanner-level diagnostics into parse diagnostics so they
        // appear in the final output.
        for diag in self.scanner.get_scanner_diagnostics().to_vec() {
            self.parse_diagnostics.push(ParseDiagnostic {
                start: self.u32_from_usize(diag.pos),
                length: self.u32_from_usize(diag.length),
                message: diag.message.to_string(),
                code: diag.code,
            });
        }
        self.parse_diagnostics.sort_by_key(|d| d.start);

        let end_pos = self.u32_from_usize(self.scanner.source_text().len());
        let root = self.arena.add_node(
            0,
            end_pos,
            NodeData::SourceFile(SourceFileData {
                statements,
                file_name: self.file_name.clone(),
                text: self.scanner.source_text_arc(),
            }),
        );
        tracing::debug!(
            nodes = self.arena.len(),
            diagnostics = self.parse_diagnostics.len(),
            "parsed source file"
        );
        root
    }

    pub(crate) fn parse_source_file_statements(&mut self) -> NodeList {
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken) {
            if self.is_token(SyntaxKind::CloseBraceToken) {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                self.next_token();
                continue;
            }
            self.parse_statement_into(&mut statements);
        }
        self.make_node_list(statements)
    }

    pub(crate) fn parse_statements(&mut self) -> NodeList {
        let mut statements = Vec::new();
        while !self.is_token(SyntaxKind::EndOfFileToken)
            && !self.is_token(SyntaxKind::CloseBraceToken)
        {
            self.parse_statement_into(&mut statements);
        }
        self.make_node_list(statements)
    }

    /// Parse one statement, skipping the current token if nothing was consumed
    /// so error recovery always makes progress.
    fn parse_statement_into(&mut self, statements: &mut Vec<NodeIndex>) {
        let pos_before = self.token_pos();
        let token_before = self.token();
        let statement = self.parse_statement();
        if statement.is_some() {
            statements.push(statement);
        }
        if self.token_pos() == pos_before
            && self.token() == token_before
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            self.parse_error_at_current_token(
                "Declaration or statement expected.",
                diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
            );
            self.next_token();
        }
    }

    pub fn parse_statement(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }
        let statement = match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_block(),
            SyntaxKind::SemicolonToken => self.parse_empty_statement(),
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => self.parse_variable_statement(),
            SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration() => {
                self.parse_variable_statement()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(false),
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                self.parse_function_declaration(false)
            }
            SyntaxKind::ClassKeyword => self.parse_class_declaration(false),
            SyntaxKind::IfKeyword => self.parse_if_statement(),
            SyntaxKind::WhileKeyword => self.parse_while_statement(),
            SyntaxKind::ForKeyword => self.parse_for_statement(),
            SyntaxKind::ReturnKeyword => self.parse_return_statement(),
            SyntaxKind::ThrowKeyword => self.parse_throw_statement(),
            SyntaxKind::ExportKeyword => self.parse_export_declaration(),
            _ => self.parse_expression_statement(),
        };
        self.exit_recursion();
        statement
    }

    pub(crate) fn look_ahead_is_let_declaration(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token();
            p.is_identifier()
                || p.is_token(SyntaxKind::OpenBraceToken)
                || p.is_token(SyntaxKind::OpenBracketToken)
        })
    }

    pub(crate) fn look_ahead_is_async_function(&mut self) -> bool {
        self.look_ahead(|p| {
            p.next_token() == SyntaxKind::FunctionKeyword && !p.has_preceding_line_break()
        })
    }

    /// Parse a block statement
    pub(crate) fn parse_block(&mut self) -> NodeIndex {
        if !self.enter_recursion() {
            return NodeIndex::NONE;
        }

        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let statements = self.parse_statements();
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.token_end();

        self.exit_recursion();
        self.arena
            .add_node(start_pos, end_pos, NodeData::Block(BlockData { statements }))
    }

    /// Parse empty statement
    pub(crate) fn parse_empty_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::SemicolonToken);
        let end_pos = self.token_end();
        self.arena
            .add_node(start_pos, end_pos, NodeData::EmptyStatement)
    }

    pub(crate) fn parse_expression_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let expression = self.parse_expression();
        if expression.is_none() {
            return NodeIndex::NONE;
        }
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ExpressionStatement(ExprStatementData { expression }),
        )
    }

    // =========================================================================
    // Variables
    // =========================================================================

    /// Parse variable statement (var/let/const)
    pub(crate) fn parse_variable_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let declaration_list = self.parse_variable_declaration_list();
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::VariableStatement(VariableStatementData { declaration_list }),
        )
    }

    /// Parse variable declaration list
    pub(crate) fn parse_variable_declaration_list(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let kind = match self.token() {
            SyntaxKind::LetKeyword => VariableKind::Let,
            SyntaxKind::ConstKeyword => VariableKind::Const,
            _ => VariableKind::Var,
        };
        self.next_token();

        let mut declarations = Vec::new();
        loop {
            let can_start_decl = self.is_identifier()
                || self.is_token(SyntaxKind::OpenBraceToken)
                || self.is_token(SyntaxKind::OpenBracketToken);
            if !can_start_decl {
                self.parse_error_at_current_token(
                    "Variable declaration expected.",
                    diagnostic_codes::VARIABLE_DECLARATION_EXPECTED,
                );
                break;
            }
            declarations.push(self.parse_variable_declaration());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }

        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::VariableDeclarationList(VariableDeclarationListData {
                kind,
                declarations: self.make_node_list(declarations),
            }),
        )
    }

    pub(crate) fn parse_variable_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let name = self.parse_binding_name();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::VariableDeclaration(VariableDeclarationData { name, initializer }),
        )
    }

    // =========================================================================
    // Binding names and patterns
    // =========================================================================

    /// Identifier, object binding pattern or array binding pattern.
    pub(crate) fn parse_binding_name(&mut self) -> NodeIndex {
        match self.token() {
            SyntaxKind::OpenBraceToken => self.parse_object_binding_pattern(),
            SyntaxKind::OpenBracketToken => self.parse_array_binding_pattern(),
            _ => self.parse_identifier(),
        }
    }

    fn parse_object_binding_pattern(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBraceToken);
        let mut elements = Vec::new();
        while !self.is_token(SyntaxKind::CloseBraceToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            elements.push(self.parse_object_binding_element());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBraceToken);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ObjectBindingPattern(BindingPatternData {
                elements: self.make_node_list(elements),
            }),
        )
    }

    fn parse_object_binding_element(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);

        let (property_name, name) = if dot_dot_dot_token {
            (NodeIndex::NONE, self.parse_identifier())
        } else if self.is_identifier() {
            // `{ a }`, `{ a = 1 }` or `{ a: b }`
            let first = self.parse_identifier();
            if self.parse_optional(SyntaxKind::ColonToken) {
                (first, self.parse_binding_name())
            } else {
                (NodeIndex::NONE, first)
            }
        } else {
            let property_name = self.parse_property_name();
            self.parse_expected(SyntaxKind::ColonToken);
            (property_name, self.parse_binding_name())
        };

        let initializer = if !dot_dot_dot_token && self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::BindingElement(BindingElementData {
                dot_dot_dot_token,
                property_name,
                name,
                initializer,
            }),
        )
    }

    fn parse_array_binding_pattern(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::OpenBracketToken);
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
            let element_start = self.token_pos();
            let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
            let name = self.parse_binding_name();
            let initializer =
                if !dot_dot_dot_token && self.parse_optional(SyntaxKind::EqualsToken) {
                    self.parse_assignment_expression()
                } else {
                    NodeIndex::NONE
                };
            let end_pos = self.token_end();
            elements.push(self.arena.add_node(
                element_start,
                end_pos,
                NodeData::BindingElement(BindingElementData {
                    dot_dot_dot_token,
                    property_name: NodeIndex::NONE,
                    name,
                    initializer,
                }),
            ));
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.parse_expected(SyntaxKind::CloseBracketToken);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ArrayBindingPattern(BindingPatternData {
                elements: self.make_node_list(elements),
            }),
        )
    }

    // =========================================================================
    // Functions
    // =========================================================================

    /// Parse a function declaration. `name_optional` is set for
    /// `export default function() {}`.
    pub(crate) fn parse_function_declaration(&mut self, name_optional: bool) -> NodeIndex {
        let start_pos = self.token_pos();
        let is_async = self.parse_optional(SyntaxKind::AsyncKeyword);
        self.parse_expected(SyntaxKind::FunctionKeyword);
        let asterisk_token = self.parse_optional(SyntaxKind::AsteriskToken);

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

        let (parameters, body) = self.parse_function_signature_and_body(is_async, asterisk_token);
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::FunctionDeclaration(FunctionData {
                is_async,
                asterisk_token,
                name,
                parameters,
                body,
            }),
        )
    }

    /// Parse `(parameters) { body }` with the async/generator context of the
    /// function being parsed.
    pub(crate) fn parse_function_signature_and_body(
        &mut self,
        is_async: bool,
        is_generator: bool,
    ) -> (NodeList, NodeIndex) {
        let saved_flags = self.context_flags;
        self.context_flags &= !(CONTEXT_FLAG_ASYNC | CONTEXT_FLAG_GENERATOR | CONTEXT_FLAG_FOR_INITIALIZER);
        if is_async {
            self.context_flags |= CONTEXT_FLAG_ASYNC;
        }
        if is_generator {
            self.context_flags |= CONTEXT_FLAG_GENERATOR;
        }

        self.parse_expected(SyntaxKind::OpenParenToken);
        let parameters = self.parse_parameter_list();
        self.parse_expected(SyntaxKind::CloseParenToken);
        let body = self.parse_block();

        self.context_flags = saved_flags;
        (parameters, body)
    }

    /// Parse parameters up to (not including) the closing parenthesis.
    pub(crate) fn parse_parameter_list(&mut self) -> NodeList {
        let mut parameters = Vec::new();
        while !self.is_token(SyntaxKind::CloseParenToken)
            && !self.is_token(SyntaxKind::EndOfFileToken)
        {
            parameters.push(self.parse_parameter());
            if !self.parse_optional(SyntaxKind::CommaToken) {
                break;
            }
        }
        self.make_node_list(parameters)
    }

    pub(crate) fn parse_parameter(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        let dot_dot_dot_token = self.parse_optional(SyntaxKind::DotDotDotToken);
        let name = self.parse_binding_name();
        let initializer = if self.parse_optional(SyntaxKind::EqualsToken) {
            self.parse_assignment_expression()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::Parameter(ParameterData {
                dot_dot_dot_token,
                name,
                initializer,
            }),
        )
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    fn parse_if_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::IfKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);
        let expression = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseParenToken);
        let then_statement = self.parse_statement();
        let else_statement = if self.parse_optional(SyntaxKind::ElseKeyword) {
            self.parse_statement()
        } else {
            NodeIndex::NONE
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::IfStatement(IfStatementData {
                expression,
                then_statement,
                else_statement,
            }),
        )
    }

    fn parse_while_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::WhileKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);
        let condition = self.parse_expression();
        self.parse_expected(SyntaxKind::CloseParenToken);
        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::WhileStatement(LoopData {
                initializer: NodeIndex::NONE,
                condition,
                incrementor: NodeIndex::NONE,
                statement,
            }),
        )
    }

    /// Parse `for (init; condition; incrementor) statement`.
    fn parse_for_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ForKeyword);
        self.parse_expected(SyntaxKind::OpenParenToken);

        let initializer = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else {
            let saved_flags = self.context_flags;
            self.context_flags |= CONTEXT_FLAG_FOR_INITIALIZER;
            let initializer = match self.token() {
                SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword => {
                    self.parse_variable_declaration_list()
                }
                SyntaxKind::LetKeyword if self.look_ahead_is_let_declaration() => {
                    self.parse_variable_declaration_list()
                }
                _ => self.parse_expression(),
            };
            self.context_flags = saved_flags;
            initializer
        };
        self.parse_expected(SyntaxKind::SemicolonToken);

        let condition = if self.is_token(SyntaxKind::SemicolonToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_expected(SyntaxKind::SemicolonToken);

        let incrementor = if self.is_token(SyntaxKind::CloseParenToken) {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_expected(SyntaxKind::CloseParenToken);

        let statement = self.parse_statement();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ForStatement(LoopData {
                initializer,
                condition,
                incrementor,
                statement,
            }),
        )
    }

    fn parse_return_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ReturnKeyword);
        let expression = if self.can_parse_semicolon() {
            NodeIndex::NONE
        } else {
            self.parse_expression()
        };
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ReturnStatement(ReturnData { expression }),
        )
    }

    fn parse_throw_statement(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ThrowKeyword);
        let expression = self.parse_expression();
        self.parse_semicolon();
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ThrowStatement(ReturnData { expression }),
        )
    }

    // =========================================================================
    // Modules
    // =========================================================================

    /// Parse `export default ...` or `export <declaration>`.
    fn parse_export_declaration(&mut self) -> NodeIndex {
        let start_pos = self.token_pos();
        self.parse_expected(SyntaxKind::ExportKeyword);

        if self.parse_optional(SyntaxKind::DefaultKeyword) {
            let expression = match self.token() {
                SyntaxKind::FunctionKeyword => self.parse_function_declaration(true),
                SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                    self.parse_function_declaration(true)
                }
                SyntaxKind::ClassKeyword => self.parse_class_declaration(true),
                _ => {
                    let expression = self.parse_assignment_expression();
                    self.parse_semicolon();
                    expression
                }
            };
            let end_pos = self.token_end();
            return self.arena.add_node(
                start_pos,
                end_pos,
                NodeData::ExportDefault(ExportDefaultData { expression }),
            );
        }

        let declaration = match self.token() {
            SyntaxKind::VarKeyword | SyntaxKind::ConstKeyword | SyntaxKind::LetKeyword => {
                self.parse_variable_statement()
            }
            SyntaxKind::FunctionKeyword => self.parse_function_declaration(false),
            SyntaxKind::AsyncKeyword if self.look_ahead_is_async_function() => {
                self.parse_function_declaration(false)
            }
            SyntaxKind::ClassKeyword => self.parse_class_declaration(false),
            _ => {
                self.parse_error_at_current_token(
                    "Declaration or statement expected.",
                    diagnostic_codes::DECLARATION_OR_STATEMENT_EXPECTED,
                );
                NodeIndex::NONE
            }
        };
        let end_pos = self.token_end();
        self.arena.add_node(
            start_pos,
            end_pos,
            NodeData::ExportDeclaration(ExportDeclData { declaration }),
        )
    }

    // =========================================================================
    // Identifiers
    // =========================================================================

    /// Parse a binding identifier. Reports an error and returns an empty
    /// identifier when the current token cannot be one.
    pub(crate) fn parse_identifier(&mut self) -> NodeIndex {
        if self.is_identifier() {
            return self.parse_identifier_name();
        }
        self.parse_error_at_current_token("Identifier expected.", diagnostic_codes::IDENTIFIER_EXPECTED);
        let pos = self.token_pos();
        self.arena.add_identifier(pos, pos, "")
    }

    /// Parse an identifier name; keywords are allowed (property names).
    pub(crate) fn parse_identifier_name(&mut self) -> NodeIndex {
        if !self.is_identifier_or_keyword() {
            self.parse_error_at_current_token(
                "Identifier expected.",
                diagnostic_codes::IDENTIFIER_EXPECTED,
            );
            let pos = self.token_pos();
            return self.arena.add_identifier(pos, pos, "");
        }
        let start_pos = self.token_pos();
        let text = self.token_value().to_string();
        self.next_token();
        let end_pos = self.token_end();
        self.arena.add_identifier(start_pos, end_pos, text)
    }
}
