use super::Printer;
use jsnames_parser::parser::{
    ExprStatementData, IfStatementData, LoopData, NodeData, NodeIndex, NodeList, ReturnData,
    SourceFileData, VariableDeclarationData, VariableDeclarationListData, VariableStatementData,
};

impl<'a> Printer<'a> {
    // =========================================================================
    // Source files and blocks
    // =========================================================================

    pub(super) fn emit_source_file(&mut self, data: &SourceFileData) {
        self.emit_statement_list(&data.statements);
    }

    fn emit_statement_list(&mut self, statements: &NodeList) {
        for &stmt in &statements.nodes {
            self.emit_node(stmt);
            self.write_line();
        }
    }

    pub(super) fn emit_block(&mut self, statements: &NodeList) {
        if statements.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_line();
        self.increase_indent();
        self.emit_statement_list(statements);
        self.decrease_indent();
        self.write("}");
    }

    // =========================================================================
    // Variables
    // =========================================================================

    pub(super) fn emit_variable_statement(&mut self, data: &VariableStatementData) {
        self.emit_node(data.declaration_list);
        self.write(";");
    }

    pub(super) fn emit_variable_declaration_list(&mut self, data: &VariableDeclarationListData) {
        self.write(data.kind.keyword());
        self.write_space();
        self.emit_comma_list(&data.declarations);
    }

    pub(super) fn emit_variable_declaration(&mut self, data: &VariableDeclarationData) {
        self.emit_node(data.name);
        self.emit_initializer(data.initializer);
    }

    // =========================================================================
    // Simple statements
    // =========================================================================

    pub(super) fn emit_expression_statement(&mut self, data: &ExprStatementData) {
        self.emit_node(data.expression);
        self.write(";");
    }

    /// `return [expr];` and `throw expr;`
    pub(super) fn emit_keyword_statement(&mut self, keyword: &str, data: &ReturnData) {
        self.write(keyword);
        if data.expression.is_some() {
            self.write_space();
            self.emit_node(data.expression);
        }
        self.write(";");
    }

    // =========================================================================
    // Control flow
    // =========================================================================

    pub(super) fn emit_if_statement(&mut self, data: &IfStatementData) {
        self.write("if");
        self.write_space();
        self.write("(");
        self.emit_node(data.expression);
        self.write(")");
        self.write_space();
        self.emit_node(data.then_statement);
        if data.else_statement.is_some() {
            self.write_space();
            self.write("else");
            self.write_space();
            self.emit_node(data.else_statement);
        }
    }

    pub(super) fn emit_while_statement(&mut self, data: &LoopData) {
        self.write("while");
        self.write_space();
        self.write("(");
        self.emit_node(data.condition);
        self.write(")");
        self.write_space();
        self.emit_node(data.statement);
    }

    pub(super) fn emit_for_statement(&mut self, data: &LoopData) {
        self.write("for");
        self.write_space();
        self.write("(");
        self.emit_node(data.initializer);
        self.write(";");
        if data.condition.is_some() {
            self.write_space();
            self.emit_node(data.condition);
        }
        self.write(";");
        if data.incrementor.is_some() {
            self.write_space();
            self.emit_node(data.incrementor);
        }
        self.write(")");
        self.write_space();
        self.emit_node(data.statement);
    }

    // =========================================================================
    // Modules
    // =========================================================================

    pub(super) fn emit_export_default(&mut self, expression: NodeIndex) {
        self.write("export default");
        self.write_space();
        self.emit_node(expression);
        let is_declaration = matches!(
            self.arena.data(expression),
            Some(NodeData::FunctionDeclaration(_) | NodeData::ClassDeclaration(_))
        );
        if !is_declaration {
            self.write(";");
        }
    }
}
