use super::Printer;
use jsnames_parser::parser::{
    BinaryExprData, CallExprData, ConditionalExprData, NodeList, UnaryExprData, YieldData,
};
use jsnames_scanner::SyntaxKind;

impl<'a> Printer<'a> {
    // =========================================================================
    // Aggregate literals
    // =========================================================================

    pub(super) fn emit_array_literal(&mut self, elements: &NodeList) {
        self.write("[");
        self.emit_comma_list(elements);
        self.write("]");
    }

    pub(super) fn emit_object_literal(&mut self, properties: &NodeList) {
        if properties.is_empty() {
            self.write("{}");
            return;
        }
        self.write("{");
        self.write_space();
        self.emit_comma_list(properties);
        self.write_space();
        self.write("}");
    }

    // =========================================================================
    // Calls
    // =========================================================================

    /// Emit a call, or a `new` expression when `is_new` is set.
    pub(super) fn emit_call(&mut self, data: &CallExprData, is_new: bool) {
        if is_new {
            self.write("new");
            self.write_space();
        }
        self.emit_node(data.expression);
        if let Some(arguments) = &data.arguments {
            self.write("(");
            self.emit_comma_list(arguments);
            self.write(")");
        }
    }

    // =========================================================================
    // Operators
    // =========================================================================

    pub(super) fn emit_binary(&mut self, data: &BinaryExprData) {
        self.emit_node(data.left);
        if data.operator_token == SyntaxKind::CommaToken {
            self.write(",");
        } else {
            self.write_space();
            self.write(data.operator_token.text());
        }
        self.write_space();
        self.emit_node(data.right);
    }

    pub(super) fn emit_prefix_unary(&mut self, data: &UnaryExprData) {
        self.write(data.operator.text());
        if data.operator.is_keyword() {
            self.write_space();
        }
        self.emit_node(data.operand);
    }

    pub(super) fn emit_conditional(&mut self, data: &ConditionalExprData) {
        self.emit_node(data.condition);
        self.write_space();
        self.write("?");
        self.write_space();
        self.emit_node(data.when_true);
        self.write_space();
        self.write(":");
        self.write_space();
        self.emit_node(data.when_false);
    }

    pub(super) fn emit_yield(&mut self, data: &YieldData) {
        self.write("yield");
        if data.asterisk_token {
            self.write("*");
        }
        if data.expression.is_some() {
            self.write_space();
            self.emit_node(data.expression);
        }
    }
}
